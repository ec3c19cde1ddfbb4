//! Optimal ate pairing on BN254.
//!
//! The Miller loop runs in affine coordinates over the twist. Line functions are evaluated at
//! the G1 point and embedded into `Fq12` as sparse elements; vertical lines lie in a proper
//! subfield and are dropped since the final exponentiation maps them to one.

use super::{
    curve::{G1Affine, G2Affine},
    fields::{Fq, Fq12, Fq2, Fq6},
};
use crate::PrecompileError;

/// `6u + 2` for the curve parameter `u = 4965661367192848881`.
const ATE_LOOP_COUNT: u128 = 29793968203157093288;

/// `(p^4 - p^2 + 1) / r`, little-endian limbs.
const HARD_PART_EXPONENT: [u64; 12] = [
    0xe81bb482ccdf42b1,
    0x5abf5cc4f49c36d4,
    0xf1154e7e1da014fd,
    0xdcc7b44c87cdbacf,
    0xaaa441e3954bcf8a,
    0x6b887d56d5095f23,
    0x79581e16f3fd90c6,
    0x3b1b1355d189227d,
    0x4e529a5861876f6b,
    0x6c0eb522d5b12278,
    0x331ec15183177faf,
    0x01baaa710b0759ad,
];

/// Line through `t` with slope `lambda`, evaluated at `p`.
///
/// On the D-type twist the line `yP - lambda * xP * w + (lambda * xT - yT) * w^3` lands on the
/// coefficients `1`, `w` and `w^3` of `Fq12`.
fn evaluate_line(lambda: Fq2, t: &G2Affine, p: &G1Affine) -> Fq12 {
    let a = lambda * t.x() - t.y();
    let b = -lambda.mul_by_base(p.x());
    let c = Fq2::new(p.y(), Fq::ZERO);
    Fq12::new(
        Fq6::new(c, Fq2::ZERO, Fq2::ZERO),
        Fq6::new(b, a, Fq2::ZERO),
    )
}

/// Doubles `t` and returns the tangent line evaluated at `p`.
fn doubling_step(t: &G2Affine, p: &G1Affine) -> Result<(G2Affine, Fq12), PrecompileError> {
    if t.is_identity() {
        return Ok((*t, Fq12::ONE));
    }
    let x_sq = t.x().square();
    let denominator = t
        .y()
        .double()
        .invert()
        .ok_or(PrecompileError::ComputationFailed("bn254 tangent at a 2-torsion point"))?;
    let lambda = (x_sq.double() + x_sq) * denominator;
    let x3 = lambda.square() - t.x().double();
    let y3 = lambda * (t.x() - x3) - t.y();
    Ok((
        G2Affine::from_xy_unchecked(x3, y3),
        evaluate_line(lambda, t, p),
    ))
}

/// Adds `q` to `t` and returns the chord evaluated at `p`.
fn addition_step(
    t: &G2Affine,
    q: &G2Affine,
    p: &G1Affine,
) -> Result<(G2Affine, Fq12), PrecompileError> {
    if t.is_identity() {
        return Ok((*q, Fq12::ONE));
    }
    if t.x() == q.x() {
        if t.y() == q.y() {
            return doubling_step(t, p);
        }
        // Vertical line, T + Q = O.
        return Ok((G2Affine::identity(), Fq12::ONE));
    }
    let denominator = (q.x() - t.x())
        .invert()
        .ok_or(PrecompileError::ComputationFailed("bn254 chord with equal abscissae"))?;
    let lambda = (q.y() - t.y()) * denominator;
    let x3 = lambda.square() - t.x() - q.x();
    let y3 = lambda * (t.x() - x3) - t.y();
    Ok((
        G2Affine::from_xy_unchecked(x3, y3),
        evaluate_line(lambda, t, p),
    ))
}

/// Untwist-Frobenius-twist endomorphism `pi(Q)`, and `-pi^2(Q)`.
fn frobenius_twists(q: &G2Affine) -> (G2Affine, G2Affine) {
    let gamma = Fq12::frobenius_coefficients();
    let q1 = G2Affine::from_xy_unchecked(
        q.x().conjugate() * gamma[0][2],
        q.y().conjugate() * gamma[0][3],
    );
    let q2 = G2Affine::from_xy_unchecked(q.x() * gamma[1][2], -(q.y() * gamma[1][3]));
    (q1, q2)
}

/// Miller loop `f_{6u+2,Q}(P) * l_{T,pi(Q)}(P) * l_{T',-pi^2(Q)}(P)` for finite `p` and `q`.
pub(crate) fn miller_loop(p: &G1Affine, q: &G2Affine) -> Result<Fq12, PrecompileError> {
    let mut f = Fq12::ONE;
    let mut t = *q;

    let top_bit = 127 - ATE_LOOP_COUNT.leading_zeros();
    for i in (0..top_bit).rev() {
        let (next, line) = doubling_step(&t, p)?;
        t = next;
        f = f.square() * line;
        if (ATE_LOOP_COUNT >> i) & 1 == 1 {
            let (next, line) = addition_step(&t, q, p)?;
            t = next;
            f *= line;
        }
    }

    let (q1, q2) = frobenius_twists(q);
    let (next, line) = addition_step(&t, &q1, p)?;
    f *= line;
    let (_, line) = addition_step(&next, &q2, p)?;
    f *= line;
    Ok(f)
}

/// Raises a Miller loop output to `(p^12 - 1) / r`.
pub(crate) fn final_exponentiation(f: &Fq12) -> Result<Fq12, PrecompileError> {
    let f_inv = f
        .invert()
        .ok_or(PrecompileError::ComputationFailed("bn254 miller loop output is zero"))?;
    // f^(p^6 - 1)
    let f1 = f.conjugate() * f_inv;
    // f^((p^6 - 1)(p^2 + 1))
    let f2 = f1.frobenius_map(2) * f1;
    Ok(f2.pow_vartime(&HARD_PART_EXPONENT))
}

/// Reduced pairing `e(P, Q)`.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Result<Fq12, PrecompileError> {
    if p.is_identity() || q.is_identity() {
        return Ok(Fq12::ONE);
    }
    final_exponentiation(&miller_loop(p, q)?)
}

/// Checks `prod e(P_i, Q_i) == 1`.
///
/// Terms with a point at infinity contribute one and are skipped. An empty product is one.
pub fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> Result<bool, PrecompileError> {
    let mut acc = Fq12::ONE;
    let mut terms = 0usize;
    for (p, q) in pairs {
        if p.is_identity() || q.is_identity() {
            continue;
        }
        acc *= miller_loop(p, q)?;
        terms += 1;
    }
    if terms == 0 {
        return Ok(true);
    }
    Ok(final_exponentiation(&acc)?.is_one())
}
