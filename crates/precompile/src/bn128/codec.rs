//! Byte codec for BN254 points and scalars, in the EIP-196 and EIP-197 layouts.

use super::{
    curve::{G1Affine, G2Affine},
    fields::{Fq, Fq2},
    FQ2_LEN, FQ_LEN, G1_LEN, G2_LEN,
};
use crate::{
    scalar::{decode_scalar, Scalar, SCALAR_LENGTH},
    PrecompileError,
};

/// Reads a single `Fq` field element from a 32 byte big-endian slice.
///
/// Returns an error if the value is not smaller than the field modulus.
///
/// # Panics
///
/// Panics if the input is not exactly 32 bytes long.
#[inline]
pub fn read_fq(input: &[u8]) -> Result<Fq, PrecompileError> {
    let mut bytes = [0u8; FQ_LEN];
    bytes.copy_from_slice(input);
    Fq::from_be_bytes(&bytes).ok_or(PrecompileError::Bn254FieldPointNotAMember)
}

/// Reads a `Fq2` element from the input slice.
///
/// The imaginary part is encoded first: `c1 ‖ c0`.
///
/// # Panics
///
/// Panics if the input is not exactly 64 bytes long.
#[inline]
pub fn read_fq2(input: &[u8]) -> Result<Fq2, PrecompileError> {
    let c1 = read_fq(&input[..FQ_LEN])?;
    let c0 = read_fq(&input[FQ_LEN..2 * FQ_LEN])?;
    Ok(Fq2::new(c0, c1))
}

/// Creates a G1 point from affine coordinates.
///
/// `(0, 0)` is the encoding of the point at infinity. Any other pair must satisfy the curve
/// equation. G1 has cofactor one, so no subgroup check is needed.
#[inline]
pub fn new_g1_point(px: Fq, py: Fq) -> Result<G1Affine, PrecompileError> {
    if px.is_zero() && py.is_zero() {
        return Ok(G1Affine::identity());
    }
    G1Affine::from_xy(px, py).ok_or(PrecompileError::Bn254G1NotOnCurve)
}

/// Creates a G2 point from affine coordinates, checking the curve equation and membership
/// of the order `r` subgroup.
///
/// `(0, 0)` is the encoding of the point at infinity.
#[inline]
pub fn new_g2_point(x: Fq2, y: Fq2) -> Result<G2Affine, PrecompileError> {
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::identity());
    }
    let point = G2Affine::from_xy(x, y).ok_or(PrecompileError::Bn254G2NotOnCurve)?;
    if !point.is_torsion_free() {
        return Err(PrecompileError::Bn254G2NotInSubgroup);
    }
    Ok(point)
}

/// Reads a G1 point from a 64 byte slice `x ‖ y`.
///
/// # Panics
///
/// Panics if the input is not exactly 64 bytes long.
#[inline]
pub fn read_g1_point(input: &[u8]) -> Result<G1Affine, PrecompileError> {
    let px = read_fq(&input[0..FQ_LEN])?;
    let py = read_fq(&input[FQ_LEN..G1_LEN])?;
    new_g1_point(px, py)
}

/// Reads a G2 point from a 128 byte slice `x.c1 ‖ x.c0 ‖ y.c1 ‖ y.c0`.
///
/// # Panics
///
/// Panics if the input is not exactly 128 bytes long.
#[inline]
pub fn read_g2_point(input: &[u8]) -> Result<G2Affine, PrecompileError> {
    let x = read_fq2(&input[0..FQ2_LEN])?;
    let y = read_fq2(&input[FQ2_LEN..G2_LEN])?;
    new_g2_point(x, y)
}

/// Encodes a G1 point as `x ‖ y`. The point at infinity encodes as all zeroes.
#[inline]
pub fn encode_g1_point(point: &G1Affine) -> [u8; G1_LEN] {
    let mut output = [0u8; G1_LEN];
    if point.is_identity() {
        return output;
    }
    output[..FQ_LEN].copy_from_slice(&point.x().to_be_bytes());
    output[FQ_LEN..].copy_from_slice(&point.y().to_be_bytes());
    output
}

/// Encodes a G2 point as `x.c1 ‖ x.c0 ‖ y.c1 ‖ y.c0`. The point at infinity encodes as all
/// zeroes.
#[inline]
pub fn encode_g2_point(point: &G2Affine) -> [u8; G2_LEN] {
    let mut output = [0u8; G2_LEN];
    if point.is_identity() {
        return output;
    }
    for (chunk, fq) in output.chunks_exact_mut(FQ_LEN).zip([
        point.x().c1,
        point.x().c0,
        point.y().c1,
        point.y().c0,
    ]) {
        chunk.copy_from_slice(&fq.to_be_bytes());
    }
    output
}

/// Reads a scalar from a 32 byte slice.
///
/// Note: The scalar does not need to be canonical.
///
/// # Panics
///
/// If `input.len()` is not equal to [`SCALAR_LENGTH`].
#[inline]
pub fn read_scalar(input: &[u8]) -> Scalar {
    let mut bytes = [0u8; SCALAR_LENGTH];
    bytes.copy_from_slice(input);
    decode_scalar(&bytes)
}
