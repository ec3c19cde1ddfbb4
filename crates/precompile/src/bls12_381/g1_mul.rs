//! BLS12-381 G1 mul precompile. More details in [`g1_mul`]
use super::{
    curve::G1Affine,
    g1::{encode_g1_point, extract_g1_input},
};
use crate::bls12_381_const::{G1_MUL_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::scalar::{decode_scalar, Scalar, SCALAR_LENGTH};
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};
use alloy_primitives::Bytes;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1MUL precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G1Mul, g1_mul, validate);

fn decode(input: &[u8]) -> Result<(G1Affine, Scalar), PrecompileError> {
    if input.len() != G1_MUL_INPUT_LENGTH {
        return Err(PrecompileError::Bls12381G1MulInputLength);
    }
    // NB: Scalar multiplications, MSMs and pairings MUST perform a subgroup check.
    let point = extract_g1_input(&input[..PADDED_G1_LENGTH], true)?;
    let mut scalar = [0u8; SCALAR_LENGTH];
    scalar.copy_from_slice(&input[PADDED_G1_LENGTH..]);
    Ok((point, decode_scalar(&scalar)))
}

fn validate(input: &[u8]) -> Result<(), PrecompileError> {
    decode(input).map(|_| ())
}

/// G1 multiplication call expects `160` bytes as an input that is interpreted as
/// byte concatenation of encoding of G1 point (`128` bytes) and encoding of a
/// scalar value (`32` bytes).
/// Output is an encoding of multiplication operation result - single G1 point
/// (`128` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-multiplication>
pub fn g1_mul(input: &[u8]) -> PrecompileResult {
    let (point, scalar) = decode(input)?;
    let product = point.to_projective().mul(&scalar).to_affine();
    Ok(Bytes::copy_from_slice(&encode_g1_point(&product)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bls12_381::test_vectors::{with_scalar, G1, G1_3, G1_K, G1_NOT_IN_SUBGROUP};
    use alloy_primitives::hex;
    use rstest::rstest;

    #[rstest]
    #[case::by_three(
        G1,
        hex!("0000000000000000000000000000000000000000000000000000000000000003"),
        G1_3
    )]
    #[case::by_k(
        G1,
        hex!("00000000000000000000000000000000000000000000000011138ce750fa15c2"),
        G1_K
    )]
    #[case::by_zero(G1, [0; 32], [0; 128])]
    #[case::infinity([0; 128], [0xff; 32], [0; 128])]
    #[case::by_order(
        G1,
        hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001"),
        [0; 128]
    )]
    fn multiplies(#[case] point: [u8; 128], #[case] scalar: [u8; 32], #[case] expected: [u8; 128]) {
        let out = g1_mul(&[&point[..], &scalar[..]].concat()).unwrap();
        assert_eq!(out[..], expected);
    }

    #[test]
    fn subgroup_check_applies_even_for_zero_scalar() {
        assert_eq!(
            g1_mul(&with_scalar(&G1_NOT_IN_SUBGROUP, 0)),
            Err(PrecompileError::Bls12381G1NotInSubgroup)
        );
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(
            g1_mul(&[0u8; 159]),
            Err(PrecompileError::Bls12381G1MulInputLength)
        );
        assert_eq!(
            PRECOMPILE.validate(&[0u8; 161]),
            Err(PrecompileError::Bls12381G1MulInputLength)
        );
    }
}
