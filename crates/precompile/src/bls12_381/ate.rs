//! Optimal ate pairing on BLS12-381.
//!
//! The Miller loop runs over `|x|` for the curve parameter `x = -0xd201000000010000`, then
//! conjugates to account for its sign. Lines on the M-type twist are scaled by `w^3` so that
//! they land on the coefficients `1`, `w^2` and `w^3` of `Fp12`.

use super::{
    curve::{G1Affine, G2Affine},
    fields::{Fp, Fp12, Fp2, Fp6},
};
use crate::PrecompileError;

/// Absolute value of the curve parameter `x`.
const BLS_X: u64 = 0xd201000000010000;

/// `(p^4 - p^2 + 1) / r`, little-endian limbs.
const HARD_PART_EXPONENT: [u64; 20] = [
    0xe516c3f438e3ba79,
    0xfa9912aae208ccf1,
    0x905ce937335d5b68,
    0xc71a2629b0dea236,
    0x83774940996754c8,
    0x21d160aeb6a1e799,
    0x2ed0b283ed237db4,
    0x915c97f36c6f1821,
    0x67f17fcbde783765,
    0x2378b9039096d1b7,
    0x7988f8761bdc51dc,
    0x2076995003fc77a1,
    0x827eca0ba621315b,
    0xe5a72bce8d63cb9f,
    0xf68f7764c28b6f8a,
    0x2f230063cf081517,
    0x94506632528d6a9a,
    0xd3cde88eeb996ca3,
    0xc0bd38c3195c899e,
    0x000f686b3d807d01,
];

fn evaluate_line(lambda: Fp2, t: &G2Affine, p: &G1Affine) -> Fp12 {
    let a = lambda * t.x() - t.y();
    let b = -lambda.mul_by_base(p.x());
    let c = Fp2::new(p.y(), Fp::ZERO);
    Fp12::new(Fp6::new(a, b, Fp2::ZERO), Fp6::new(Fp2::ZERO, c, Fp2::ZERO))
}

fn doubling_step(t: &G2Affine, p: &G1Affine) -> Result<(G2Affine, Fp12), PrecompileError> {
    let x_sq = t.x().square();
    let denominator = t
        .y()
        .double()
        .invert()
        .ok_or(PrecompileError::ComputationFailed("bls12-381 tangent at a 2-torsion point"))?;
    let lambda = (x_sq.double() + x_sq) * denominator;
    let x3 = lambda.square() - t.x().double();
    let y3 = lambda * (t.x() - x3) - t.y();
    Ok((
        G2Affine::from_xy_unchecked(x3, y3),
        evaluate_line(lambda, t, p),
    ))
}

fn addition_step(
    t: &G2Affine,
    q: &G2Affine,
    p: &G1Affine,
) -> Result<(G2Affine, Fp12), PrecompileError> {
    let denominator = (q.x() - t.x())
        .invert()
        .ok_or(PrecompileError::ComputationFailed("bls12-381 chord with equal abscissae"))?;
    let lambda = (q.y() - t.y()) * denominator;
    let x3 = lambda.square() - t.x() - q.x();
    let y3 = lambda * (t.x() - x3) - t.y();
    Ok((
        G2Affine::from_xy_unchecked(x3, y3),
        evaluate_line(lambda, t, p),
    ))
}

/// Miller loop `f_{x,Q}(P)` for finite `p` and `q` in the prime order subgroups.
///
/// Every intermediate `T = [k]Q` has `1 < k < r`, so neither step meets the identity.
pub(crate) fn miller_loop(p: &G1Affine, q: &G2Affine) -> Result<Fp12, PrecompileError> {
    let mut f = Fp12::ONE;
    let mut t = *q;
    for i in (0..63 - BLS_X.leading_zeros()).rev() {
        let (next, line) = doubling_step(&t, p)?;
        t = next;
        f = f.square() * line;
        if (BLS_X >> i) & 1 == 1 {
            let (next, line) = addition_step(&t, q, p)?;
            t = next;
            f *= line;
        }
    }
    // x < 0
    Ok(f.conjugate())
}

/// Raises a Miller loop output to `(p^12 - 1) / r`.
pub(crate) fn final_exponentiation(f: &Fp12) -> Result<Fp12, PrecompileError> {
    let f_inv = f
        .invert()
        .ok_or(PrecompileError::ComputationFailed("bls12-381 miller loop output is zero"))?;
    let f1 = f.conjugate() * f_inv;
    let f2 = f1.frobenius_map(2) * f1;
    Ok(f2.pow_vartime(&HARD_PART_EXPONENT))
}

/// Reduced pairing `e(P, Q)`.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Result<Fp12, PrecompileError> {
    if p.is_identity() || q.is_identity() {
        return Ok(Fp12::ONE);
    }
    final_exponentiation(&miller_loop(p, q)?)
}

/// Checks `prod e(P_i, Q_i) == 1` with one shared final exponentiation.
///
/// Pairs with a point at infinity are skipped. An empty product is one.
pub fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> Result<bool, PrecompileError> {
    let mut acc = Fp12::ONE;
    let mut terms = 0usize;
    for (p, q) in pairs.iter().filter(|(p, q)| !p.is_identity() && !q.is_identity()) {
        acc *= miller_loop(p, q)?;
        terms += 1;
    }
    if terms == 0 {
        return Ok(true);
    }
    Ok(final_exponentiation(&acc)?.is_one())
}
