//! BLS12-381 G1 msm precompile. More details in [`g1_msm`]
use super::{
    curve::G1Projective,
    g1::{encode_g1_point, extract_g1_input},
};
use crate::bls12_381_const::{G1_MSM_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::scalar::{decode_scalar, Scalar, SCALAR_LENGTH};
use crate::utilities::is_all_zero;
use crate::{group, Precompile, PrecompileError, PrecompileId, PrecompileResult};
use alloy_primitives::Bytes;
use std::vec::Vec;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1MSM precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G1Msm, g1_msm, validate);

/// Decodes every `(point, scalar)` term, dropping the ones that contribute nothing.
fn decode(input: &[u8]) -> Result<(Vec<G1Projective>, Vec<Scalar>), PrecompileError> {
    let input_len = input.len();
    if input_len == 0 || input_len % G1_MSM_INPUT_LENGTH != 0 {
        return Err(PrecompileError::Bls12381G1MsmInputLength);
    }

    let k = input_len / G1_MSM_INPUT_LENGTH;
    let mut points = Vec::with_capacity(k);
    let mut scalars = Vec::with_capacity(k);
    for term in input.chunks_exact(G1_MSM_INPUT_LENGTH) {
        let (encoded_point, encoded_scalar) = term.split_at(PADDED_G1_LENGTH);

        // Filter out points infinity as an optimization, since it is a no-op.
        if is_all_zero(encoded_point) {
            continue;
        }

        // NB: Scalar multiplications, MSMs and pairings MUST perform a subgroup check.
        let point = extract_g1_input(encoded_point, true)?;

        // If the scalar is zero, then this is a no-op.
        //
        // Note: This check is made after checking that the point is valid,
        // so that an invalid point is an error even with a zero scalar.
        if is_all_zero(encoded_scalar) {
            continue;
        }

        let mut scalar = [0u8; SCALAR_LENGTH];
        scalar.copy_from_slice(encoded_scalar);
        points.push(point.to_projective());
        scalars.push(decode_scalar(&scalar));
    }
    Ok((points, scalars))
}

fn validate(input: &[u8]) -> Result<(), PrecompileError> {
    decode(input).map(|_| ())
}

/// Implements EIP-2537 G1MSM precompile.
/// G1 multi-scalar-multiplication call expects `160*k` bytes as an input that is interpreted
/// as byte concatenation of `k` slices each of them being a byte concatenation
/// of encoding of G1 point (`128` bytes) and encoding of a scalar value (`32`
/// bytes).
/// Output is an encoding of multi-scalar-multiplication operation result - single G1
/// point (`128` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-multiexponentiation>
pub fn g1_msm(input: &[u8]) -> PrecompileResult {
    let (points, scalars) = decode(input)?;

    // Return the encoding for the point at the infinity according to EIP-2537
    // if there are no points in the MSM.
    const ENCODED_POINT_AT_INFINITY: [u8; PADDED_G1_LENGTH] = [0; PADDED_G1_LENGTH];
    if points.is_empty() {
        return Ok(Bytes::from_static(&ENCODED_POINT_AT_INFINITY));
    }

    let multiexp = group::msm(&points, &scalars).to_affine();
    Ok(Bytes::copy_from_slice(&encode_g1_point(&multiexp)))
}
