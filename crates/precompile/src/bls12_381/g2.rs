use super::{
    curve::G2Affine,
    utils::{fp2_to_bytes, read_fp2},
};
use crate::bls12_381_const::{PADDED_FP2_LENGTH, PADDED_G2_LENGTH};
use crate::PrecompileError;

/// Encodes a G2 point in affine format into a 256 byte array with padded elements,
/// `x.c0 ‖ x.c1 ‖ y.c0 ‖ y.c1`.
pub fn encode_g2_point(input: &G2Affine) -> [u8; PADDED_G2_LENGTH] {
    let mut out = [0u8; PADDED_G2_LENGTH];
    if !input.is_identity() {
        fp2_to_bytes(&mut out[..PADDED_FP2_LENGTH], &input.x());
        fp2_to_bytes(&mut out[PADDED_FP2_LENGTH..], &input.y());
    }
    out
}

/// Extracts a G2 point in Affine format from a 256 byte slice representation.
///
/// Same rules as [`super::extract_g1_input`], over the twist.
///
/// # Panics
///
/// Panics if the input is not exactly 256 bytes long.
pub fn extract_g2_input(input: &[u8], subgroup_check: bool) -> Result<G2Affine, PrecompileError> {
    let x = read_fp2(&input[..PADDED_FP2_LENGTH])?;
    let y = read_fp2(&input[PADDED_FP2_LENGTH..PADDED_G2_LENGTH])?;
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::identity());
    }

    let point = G2Affine::from_xy(x, y).ok_or(PrecompileError::Bls12381G2NotOnCurve)?;
    if subgroup_check && !point.is_torsion_free() {
        return Err(PrecompileError::Bls12381G2NotInSubgroup);
    }
    Ok(point)
}
