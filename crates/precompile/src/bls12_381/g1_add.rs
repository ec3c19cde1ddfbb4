//! BLS12-381 G1 add precompile. More details in [`g1_add`]
use super::{
    curve::G1Affine,
    g1::{encode_g1_point, extract_g1_input},
};
use crate::bls12_381_const::{G1_ADD_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};
use alloy_primitives::Bytes;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1ADD precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G1Add, g1_add, validate);

fn decode(input: &[u8]) -> Result<(G1Affine, G1Affine), PrecompileError> {
    if input.len() != G1_ADD_INPUT_LENGTH {
        return Err(PrecompileError::Bls12381G1AddInputLength);
    }

    // NB: There is no subgroup check for the G1 addition precompile.
    let a = extract_g1_input(&input[..PADDED_G1_LENGTH], false)?;
    let b = extract_g1_input(&input[PADDED_G1_LENGTH..], false)?;
    Ok((a, b))
}

fn validate(input: &[u8]) -> Result<(), PrecompileError> {
    decode(input).map(|_| ())
}

/// G1 addition call expects `256` bytes as an input that is interpreted as byte
/// concatenation of two G1 points (`128` bytes each).
/// Output is an encoding of addition operation result - single G1 point (`128`
/// bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-addition>
pub fn g1_add(input: &[u8]) -> PrecompileResult {
    let (a, b) = decode(input)?;
    let sum = (a.to_projective() + b.to_projective()).to_affine();
    Ok(Bytes::copy_from_slice(&encode_g1_point(&sum)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bls12_381::test_vectors::{G1, G1_2, G1_3, G1_NOT_IN_SUBGROUP, NEG_G1};
    use rstest::rstest;

    #[rstest]
    #[case::g_plus_g(G1, G1, G1_2)]
    #[case::g_plus_2g(G1, G1_2, G1_3)]
    #[case::g_plus_infinity(G1, [0; 128], G1)]
    #[case::infinity_plus_infinity([0; 128], [0; 128], [0; 128])]
    #[case::g_minus_g(G1, NEG_G1, [0; 128])]
    fn adds(#[case] a: [u8; 128], #[case] b: [u8; 128], #[case] expected: [u8; 128]) {
        let out = g1_add(&[a, b].concat()).unwrap();
        assert_eq!(out[..], expected);
    }

    #[test]
    fn no_subgroup_check() {
        assert!(g1_add(&[G1_NOT_IN_SUBGROUP, G1].concat()).is_ok());
    }

    #[rstest]
    #[case::short(&[0u8; 255][..], PrecompileError::Bls12381G1AddInputLength)]
    #[case::long(&[0u8; 257][..], PrecompileError::Bls12381G1AddInputLength)]
    #[case::padding(&[0xff; 256][..], PrecompileError::Bls12381FpPaddingInvalid)]
    fn rejects(#[case] input: &[u8], #[case] expected: PrecompileError) {
        assert_eq!(g1_add(input), Err(expected.clone()));
        assert_eq!(PRECOMPILE.validate(input), Err(expected));
    }

    #[test]
    fn bls_g1add_g1_not_on_curve() {
        let mut input = [G1, G1].concat();
        input[PADDED_G1_LENGTH - 1] ^= 1;
        assert_eq!(g1_add(&input), Err(PrecompileError::Bls12381G1NotOnCurve));
    }
}
