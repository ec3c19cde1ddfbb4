//! BLS12-381 G2 add precompile. More details in [`g2_add`]
use super::{
    curve::G2Affine,
    g2::{encode_g2_point, extract_g2_input},
};
use crate::bls12_381_const::{G2_ADD_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};
use alloy_primitives::Bytes;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2ADD precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G2Add, g2_add, validate);

fn decode(input: &[u8]) -> Result<(G2Affine, G2Affine), PrecompileError> {
    if input.len() != G2_ADD_INPUT_LENGTH {
        return Err(PrecompileError::Bls12381G2AddInputLength);
    }

    // NB: There is no subgroup check for the G2 addition precompile.
    let a = extract_g2_input(&input[..PADDED_G2_LENGTH], false)?;
    let b = extract_g2_input(&input[PADDED_G2_LENGTH..], false)?;
    Ok((a, b))
}

fn validate(input: &[u8]) -> Result<(), PrecompileError> {
    decode(input).map(|_| ())
}

/// G2 addition call expects `512` bytes as an input that is interpreted as byte
/// concatenation of two G2 points (`256` bytes each).
/// Output is an encoding of addition operation result - single G2 point (`256`
/// bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-addition>
pub fn g2_add(input: &[u8]) -> PrecompileResult {
    let (a, b) = decode(input)?;
    let sum = (a.to_projective() + b.to_projective()).to_affine();
    Ok(Bytes::copy_from_slice(&encode_g2_point(&sum)))
}
