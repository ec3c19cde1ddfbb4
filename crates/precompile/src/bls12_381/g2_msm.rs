//! BLS12-381 G2 msm precompile. More details in [`g2_msm`]
use super::{
    curve::G2Projective,
    g2::{encode_g2_point, extract_g2_input},
};
use crate::bls12_381_const::{G2_MSM_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::scalar::{decode_scalar, Scalar, SCALAR_LENGTH};
use crate::utilities::is_all_zero;
use crate::{group, Precompile, PrecompileError, PrecompileId, PrecompileResult};
use alloy_primitives::Bytes;
use std::vec::Vec;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2MSM precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G2Msm, g2_msm, validate);

/// Decodes every `(point, scalar)` term, dropping the ones that contribute nothing.
fn decode(input: &[u8]) -> Result<(Vec<G2Projective>, Vec<Scalar>), PrecompileError> {
    let input_len = input.len();
    if input_len == 0 || input_len % G2_MSM_INPUT_LENGTH != 0 {
        return Err(PrecompileError::Bls12381G2MsmInputLength);
    }

    let k = input_len / G2_MSM_INPUT_LENGTH;
    let mut points = Vec::with_capacity(k);
    let mut scalars = Vec::with_capacity(k);
    for term in input.chunks_exact(G2_MSM_INPUT_LENGTH) {
        let (encoded_point, encoded_scalar) = term.split_at(PADDED_G2_LENGTH);

        // Filter out points infinity as an optimization, since it is a no-op.
        if is_all_zero(encoded_point) {
            continue;
        }

        // NB: Scalar multiplications, MSMs and pairings MUST perform a subgroup check.
        let point = extract_g2_input(encoded_point, true)?;

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

/// Implements EIP-2537 G2MSM precompile.
/// G2 multi-scalar-multiplication call expects `288*k` bytes as an input that is interpreted
/// as byte concatenation of `k` slices each of them being a byte concatenation
/// of encoding of G2 point (`256` bytes) and encoding of a scalar value (`32`
/// bytes).
/// Output is an encoding of multi-scalar-multiplication operation result - single G2
/// point (`256` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiexponentiation>
pub fn g2_msm(input: &[u8]) -> PrecompileResult {
    let (points, scalars) = decode(input)?;

    // Return the encoding for the point at the infinity according to EIP-2537
    // if there are no points in the MSM.
    const ENCODED_POINT_AT_INFINITY: [u8; PADDED_G2_LENGTH] = [0; PADDED_G2_LENGTH];
    if points.is_empty() {
        return Ok(Bytes::from_static(&ENCODED_POINT_AT_INFINITY));
    }

    let multiexp = group::msm(&points, &scalars).to_affine();
    Ok(Bytes::copy_from_slice(&encode_g2_point(&multiexp)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bls12_381::{
        g2_mul::g2_mul,
        test_vectors::{with_scalar, G2, G2_2, G2_8, G2_K, G2_NOT_IN_SUBGROUP},
    };

    #[test]
    fn two_terms() {
        // 2 * G + 3 * (2G) = 8G
        let input = [with_scalar(&G2, 2), with_scalar(&G2_2, 3)].concat();
        assert_eq!(g2_msm(&input).unwrap()[..], G2_8);
    }

    #[test]
    fn single_term_matches_mul() {
        let input = with_scalar(&G2, 0x11138ce750fa15c2);
        assert_eq!(g2_msm(&input).unwrap()[..], G2_K);
        assert_eq!(g2_msm(&input), g2_mul(&input));
    }

    #[test]
    fn all_terms_skipped() {
        let input = [with_scalar(&[0; 256], 7), with_scalar(&G2, 0)].concat();
        assert_eq!(g2_msm(&input).unwrap()[..], [0u8; 256]);
    }

    #[test]
    fn invalid_point_with_zero_scalar_is_rejected() {
        let input = [with_scalar(&G2_NOT_IN_SUBGROUP, 0), with_scalar(&G2, 1)].concat();
        assert_eq!(g2_msm(&input), Err(PrecompileError::Bls12381G2NotInSubgroup));
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(g2_msm(&[]), Err(PrecompileError::Bls12381G2MsmInputLength));
        assert_eq!(
            PRECOMPILE.validate(&[0u8; 160]),
            Err(PrecompileError::Bls12381G2MsmInputLength)
        );
    }
}
