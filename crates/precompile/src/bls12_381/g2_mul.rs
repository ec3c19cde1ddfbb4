//! BLS12-381 G2 mul precompile. More details in [`g2_mul`]
use super::{
    curve::G2Affine,
    g2::{encode_g2_point, extract_g2_input},
};
use crate::bls12_381_const::{G2_MUL_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::scalar::{decode_scalar, Scalar, SCALAR_LENGTH};
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};
use alloy_primitives::Bytes;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2MUL precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G2Mul, g2_mul, validate);

fn decode(input: &[u8]) -> Result<(G2Affine, Scalar), PrecompileError> {
    if input.len() != G2_MUL_INPUT_LENGTH {
        return Err(PrecompileError::Bls12381G2MulInputLength);
    }
    // NB: Scalar multiplications, MSMs and pairings MUST perform a subgroup check.
    let point = extract_g2_input(&input[..PADDED_G2_LENGTH], true)?;
    let mut scalar = [0u8; SCALAR_LENGTH];
    scalar.copy_from_slice(&input[PADDED_G2_LENGTH..]);
    Ok((point, decode_scalar(&scalar)))
}

fn validate(input: &[u8]) -> Result<(), PrecompileError> {
    decode(input).map(|_| ())
}

/// G2 multiplication call expects `288` bytes as an input that is interpreted as
/// byte concatenation of encoding of G2 point (`256` bytes) and encoding of a
/// scalar value (`32` bytes).
/// Output is an encoding of multiplication operation result - single G2 point
/// (`256` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiplication>
pub fn g2_mul(input: &[u8]) -> PrecompileResult {
    let (point, scalar) = decode(input)?;
    let product = point.to_projective().mul(&scalar).to_affine();
    Ok(Bytes::copy_from_slice(&encode_g2_point(&product)))
}
