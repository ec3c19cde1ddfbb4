//! BLS12-381 pairing precompile. More details in [`pairing`]
use super::{
    ate::pairing_check,
    curve::{G1Affine, G2Affine},
    g1::extract_g1_input,
    g2::extract_g2_input,
};
use crate::bls12_381_const::{PADDED_G1_LENGTH, PAIRING_INPUT_LENGTH};
use crate::utilities::bool_to_bytes32;
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};
use std::vec::Vec;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_PAIRING_CHECK precompile.
pub const PRECOMPILE: Precompile =
    Precompile::new(PrecompileId::Bls12Pairing, pairing, validate);

fn decode(input: &[u8]) -> Result<Vec<(G1Affine, G2Affine)>, PrecompileError> {
    if input.len() % PAIRING_INPUT_LENGTH != 0 {
        return Err(PrecompileError::Bls12381PairingInputLength);
    }
    input
        .chunks_exact(PAIRING_INPUT_LENGTH)
        .map(|pair| {
            // NB: Scalar multiplications, MSMs and pairings MUST perform a subgroup check.
            let (g1, g2) = pair.split_at(PADDED_G1_LENGTH);
            Ok((extract_g1_input(g1, true)?, extract_g2_input(g2, true)?))
        })
        .collect()
}

fn validate(input: &[u8]) -> Result<(), PrecompileError> {
    decode(input).map(|_| ())
}

/// Pairing call expects 384*k (k being a non-negative integer) bytes as an inputs
/// that is interpreted as byte concatenation of k slices. Each slice has the
/// following structure:
///    * 128 bytes of G1 point encoding
///    * 256 bytes of G2 point encoding
///
/// Each point is expected to be in the subgroup of order q.
/// Output is 32 bytes where first 31 bytes are equal to 0x00 and the last byte
/// is 0x01 if pairing result is equal to the multiplicative identity in a pairing
/// target field and 0x00 otherwise. An empty input is the empty product and yields 0x01.
///
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-pairing>
pub fn pairing(input: &[u8]) -> PrecompileResult {
    let pairs = decode(input)?;
    Ok(bool_to_bytes32(pairing_check(&pairs)?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bls12_381::test_vectors::{G1, G1_2, G1_NOT_IN_SUBGROUP, G2, G2_2, NEG_G1};
    use rstest::rstest;

    #[rstest]
    // e(2 G1, G2) * e(-G1, 2 G2) = 1
    #[case::bilinear(&[G1_2, NEG_G1], &[G2, G2_2], true)]
    #[case::not_one(&[G1_2, G1], &[G2, G2_2], false)]
    #[case::single_generator_pair(&[G1], &[G2], false)]
    #[case::infinity_terms(&[[0; 128], G1], &[G2, [0; 256]], true)]
    #[case::empty(&[], &[], true)]
    fn checks(#[case] g1: &[[u8; 128]], #[case] g2: &[[u8; 256]], #[case] expected: bool) {
        let input: Vec<u8> = g1
            .iter()
            .zip(g2)
            .flat_map(|(a, b)| [&a[..], &b[..]].concat())
            .collect();
        assert_eq!(pairing(&input), Ok(bool_to_bytes32(expected)));
    }

    #[test]
    fn rejects_points_outside_subgroup() {
        let input = [&G1_NOT_IN_SUBGROUP[..], &G2[..]].concat();
        assert_eq!(
            pairing(&input),
            Err(PrecompileError::Bls12381G1NotInSubgroup)
        );
        assert_eq!(
            PRECOMPILE.validate(&input),
            Err(PrecompileError::Bls12381G1NotInSubgroup)
        );
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(
            pairing(&[0u8; 383]),
            Err(PrecompileError::Bls12381PairingInputLength)
        );
    }
}
