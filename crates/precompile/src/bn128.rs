//! BN254 precompiles of [EIP-196](https://eips.ethereum.org/EIPS/eip-196) and
//! [EIP-197](https://eips.ethereum.org/EIPS/eip-197).
use crate::{
    utilities::bool_to_bytes32, Precompile, PrecompileError, PrecompileId, PrecompileResult,
};
use alloy_primitives::Bytes;
use std::vec::Vec;

pub mod ate;
pub mod codec;
pub mod curve;
pub mod fields;

use codec::{encode_g1_point, read_g1_point, read_g2_point, read_scalar};
use curve::{G1Affine, G2Affine};

/// Length of an encoded `Fq` element.
pub const FQ_LEN: usize = 32;

/// Length of an encoded `Fq2` element.
pub const FQ2_LEN: usize = 2 * FQ_LEN;

/// Length of an uncompressed G1 point.
pub const G1_LEN: usize = 2 * FQ_LEN;

/// Length of an uncompressed G2 point.
pub const G2_LEN: usize = 2 * FQ2_LEN;

/// Input length for the add operation.
/// `ADD` takes two uncompressed G1 points (64 bytes each).
pub const ADD_INPUT_LEN: usize = 64 + 64;

/// Input length for the multiplication operation.
/// `MUL` takes an uncompressed G1 point (64 bytes) and scalar (32 bytes).
pub const MUL_INPUT_LEN: usize = 64 + 32;

/// Pair element length.
/// `PAIR` elements are composed of an uncompressed G1 point (64 bytes) and an uncompressed G2 point
/// (128 bytes).
pub const PAIR_ELEMENT_LEN: usize = 64 + 128;

/// `ECADD` at address `0x06`.
pub mod add {
    use super::*;

    /// BN254 point addition precompile.
    pub const PRECOMPILE: Precompile =
        Precompile::new(PrecompileId::Bn254Add, super::run_add, validate);

    fn validate(input: &[u8]) -> Result<(), PrecompileError> {
        super::decode_add(input).map(|_| ())
    }
}

/// `ECMUL` at address `0x07`.
pub mod mul {
    use super::*;

    /// BN254 scalar multiplication precompile.
    pub const PRECOMPILE: Precompile =
        Precompile::new(PrecompileId::Bn254Mul, super::run_mul, validate);

    fn validate(input: &[u8]) -> Result<(), PrecompileError> {
        super::decode_mul(input).map(|_| ())
    }
}

/// `ECPAIRING` at address `0x08`.
pub mod pair {
    use super::*;

    /// BN254 pairing check precompile.
    pub const PRECOMPILE: Precompile =
        Precompile::new(PrecompileId::Bn254Pairing, super::run_pair, validate);

    fn validate(input: &[u8]) -> Result<(), PrecompileError> {
        super::decode_pair(input).map(|_| ())
    }
}

/// Decodes the two points of an `ADD` input. Bytes past [`ADD_INPUT_LEN`] are ignored.
fn decode_add(input: &[u8]) -> Result<(G1Affine, G1Affine), PrecompileError> {
    if input.len() < ADD_INPUT_LEN {
        return Err(PrecompileError::Bn254AddInputLength);
    }
    let p1 = read_g1_point(&input[..G1_LEN])?;
    let p2 = read_g1_point(&input[G1_LEN..ADD_INPUT_LEN])?;
    Ok((p1, p2))
}

/// Decodes the point and scalar of a `MUL` input. Bytes past [`MUL_INPUT_LEN`] are ignored.
fn decode_mul(input: &[u8]) -> Result<(G1Affine, crate::scalar::Scalar), PrecompileError> {
    if input.len() < MUL_INPUT_LEN {
        return Err(PrecompileError::Bn254MulInputLength);
    }
    let p = read_g1_point(&input[..G1_LEN])?;
    let k = read_scalar(&input[G1_LEN..MUL_INPUT_LEN]);
    Ok((p, k))
}

/// Decodes every `(G1, G2)` pair of a `PAIR` input.
fn decode_pair(input: &[u8]) -> Result<Vec<(G1Affine, G2Affine)>, PrecompileError> {
    if input.len() % PAIR_ELEMENT_LEN != 0 {
        return Err(PrecompileError::Bn254PairLength);
    }
    input
        .chunks_exact(PAIR_ELEMENT_LEN)
        .map(|chunk| {
            let a = read_g1_point(&chunk[..G1_LEN])?;
            let b = read_g2_point(&chunk[G1_LEN..])?;
            Ok((a, b))
        })
        .collect()
}

/// Runs the BN254 point addition.
pub fn run_add(input: &[u8]) -> PrecompileResult {
    let (p1, p2) = decode_add(input)?;
    let sum = (p1.to_projective() + p2.to_projective()).to_affine();
    Ok(Bytes::copy_from_slice(&encode_g1_point(&sum)))
}

/// Runs the BN254 scalar multiplication.
pub fn run_mul(input: &[u8]) -> PrecompileResult {
    let (p, k) = decode_mul(input)?;
    let product = p.to_projective().mul(&k).to_affine();
    Ok(Bytes::copy_from_slice(&encode_g1_point(&product)))
}

/// Runs the BN254 pairing check.
pub fn run_pair(input: &[u8]) -> PrecompileResult {
    let pairs = decode_pair(input)?;
    let success = ate::pairing_check(&pairs)?;
    Ok(bool_to_bytes32(success))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;
    use rstest::rstest;

    const EIP197_PAIRING: [u8; 384] = hex!(
        "1c76476f4def4bb94541d57ebba1193381ffa7aa76ada664dd31c16024c43f59"
        "3034dd2920f673e204fee2811c678745fc819b55d3e9d294e45c9b03a76aef41"
        "209dd15ebff5d46c4bd888e51a93cf99a7329636c63514396b4a452003a35bf7"
        "04bf11ca01483bfa8b34b43561848d28905960114c8ac04049af4b6315a41678"
        "2bb8324af6cfc93537a2ad1a445cfd0ca2a71acd7ac41fadbf933c2a51be344d"
        "120a2a4cf30c1bf9845f20c6fe39e07ea2cce61f0c9bb048165fe5e4de877550"
        "111e129f1cf1097710d41c4ac70fcdfa5ba2023c6ff1cbeac322de49d1b6df7c"
        "2032c61a830e3c17286de9462bf242fca2883585b93870a73853face6a6bf411"
        "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2"
        "1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed"
        "090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b"
        "12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa"
    );

    #[test]
    fn test_alt_bn128_add() {
        let input = hex!(
            "18b18acfb4c2c30276db5411368e7185b311dd124691610c5d3b74034e093dc9"
            "063c909c4720840cb5134cb9f59fa749755796819658d32efc0d288198f37266"
            "07c2b7f58a84bd6145f00c9c2bc0bb1a187f20ff2c92963a88019e7c6a014eed"
            "06614e20c147e940f2d70da3f74c9a17df361706a4485c742bd6788478fa17d7"
        );
        let expected = hex!(
            "2243525c5efd4b9c3d3c45ac0ca3fe4dd85e830a4ce6b65fa1eeaee202839703"
            "301d1d33be6da8e509df21cc35964723180eed7532537db9ae5e7d48f195c915"
        );
        let res = run_add(&input).unwrap();
        assert_eq!(res, expected[..]);

        // zero sum test
        let res = run_add(&[0u8; ADD_INPUT_LEN]).unwrap();
        assert_eq!(res, [0u8; 64][..]);

        // trailing bytes are ignored
        let mut long = input.to_vec();
        long.extend_from_slice(&[0xff; 7]);
        assert_eq!(run_add(&long).unwrap(), expected[..]);

        // point not on curve fail
        let res = run_add(&[0x11; ADD_INPUT_LEN]);
        assert_eq!(res, Err(PrecompileError::Bn254G1NotOnCurve));
    }

    #[test]
    fn test_alt_bn128_mul() {
        let input = hex!(
            "2bd3e6d0f3b142924f5ca7b49ce5b9d54c4703d7ae5648e61d02268b1a0a9fb7"
            "21611ce0a6af85915e2f1d70300909ce2e49dfad4a4619c8390cae66cefdb204"
            "00000000000000000000000000000000000000000000000011138ce750fa15c2"
        );
        let expected = hex!(
            "070a8d6a982153cae4be29d434e8faef8a47b274a053f5a4ee2a6c9c13c31e5c"
            "031b8ce914eba3a9ffb989f9cdd5b0f01943074bf4f0f315690ec3cec6981afc"
        );
        let res = run_mul(&input).unwrap();
        assert_eq!(res, expected[..]);

        // zero multiplication test
        let input = hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0200000000000000000000000000000000000000000000000000000000000000"
        );
        let res = run_mul(&input).unwrap();
        assert_eq!(res, [0u8; 64][..]);

        // point not on curve fail
        let input = hex!(
            "1111111111111111111111111111111111111111111111111111111111111111"
            "1111111111111111111111111111111111111111111111111111111111111111"
            "0f00000000000000000000000000000000000000000000000000000000000000"
        );
        let res = run_mul(&input);
        assert_eq!(res, Err(PrecompileError::Bn254G1NotOnCurve));
    }

    #[rstest]
    #[case::empty(&[][..])]
    #[case::one_short(&[0u8; MUL_INPUT_LEN - 1][..])]
    fn short_mul_input_is_rejected(#[case] input: &[u8]) {
        assert_eq!(run_mul(input), Err(PrecompileError::Bn254MulInputLength));
        assert!(mul::PRECOMPILE.validate(input).unwrap_err().is_invalid_input());
    }

    #[test]
    fn mul_by_zero_and_by_two() {
        let g = hex!(
            "0000000000000000000000000000000000000000000000000000000000000001"
            "0000000000000000000000000000000000000000000000000000000000000002"
        );
        let mut input = [0u8; MUL_INPUT_LEN];
        input[..G1_LEN].copy_from_slice(&g);
        assert_eq!(run_mul(&input).unwrap(), [0u8; 64][..]);

        input[MUL_INPUT_LEN - 1] = 2;
        assert_eq!(
            run_mul(&input).unwrap(),
            hex!(
                "030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3"
                "15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4"
            )[..]
        );
    }

    #[test]
    fn x_equal_to_modulus_is_invalid_point() {
        let input = hex!(
            "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"
            "0000000000000000000000000000000000000000000000000000000000000002"
            "0000000000000000000000000000000000000000000000000000000000000001"
        );
        let err = run_mul(&input).unwrap_err();
        assert_eq!(err, PrecompileError::Bn254FieldPointNotAMember);
        assert_eq!(err.result_code(), crate::ResultCode::InvalidPoint);
    }

    #[test]
    fn test_alt_bn128_pair() {
        let res = run_pair(&EIP197_PAIRING).unwrap();
        assert_eq!(res, bool_to_bytes32(true));
        assert_eq!(pair::PRECOMPILE.validate(&EIP197_PAIRING), Ok(()));

        // no input test
        let res = run_pair(&[]).unwrap();
        assert_eq!(res, bool_to_bytes32(true));

        // a single term of the valid pair does not cancel
        let res = run_pair(&EIP197_PAIRING[..PAIR_ELEMENT_LEN]).unwrap();
        assert_eq!(res, bool_to_bytes32(false));

        // point not on curve fail
        let res = run_pair(&[0x11; PAIR_ELEMENT_LEN]);
        assert_eq!(res, Err(PrecompileError::Bn254G1NotOnCurve));

        // invalid input length
        let res = run_pair(&[0x11; 79]);
        assert_eq!(res, Err(PrecompileError::Bn254PairLength));
    }

    #[test]
    fn pairing_with_identity_terms_is_one() {
        let mut input = [0u8; PAIR_ELEMENT_LEN];
        input[..G1_LEN].copy_from_slice(&EIP197_PAIRING[..G1_LEN]);
        assert_eq!(run_pair(&input).unwrap(), bool_to_bytes32(true));
        assert_eq!(run_pair(&[0u8; 2 * PAIR_ELEMENT_LEN]).unwrap(), bool_to_bytes32(true));
    }

    #[test]
    fn g2_outside_subgroup_is_rejected() {
        // On the twist, but not in the order `r` subgroup.
        let input = hex!(
            "0000000000000000000000000000000000000000000000000000000000000001"
            "0000000000000000000000000000000000000000000000000000000000000002"
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000000000000000000000000000000000000000000000000000001"
            "0d1271953ed9ea0836846e70a1934187998c7f790cb4d7511b7f8da82de048a4"
            "2869111d5381f072f8e2728fdb825a51aadd70e52c9830e9ab4b871c0531f1bb"
        );
        let err = run_pair(&input).unwrap_err();
        assert_eq!(err, PrecompileError::Bn254G2NotInSubgroup);
        assert_eq!(err.result_code(), crate::ResultCode::InvalidPoint);
    }

    #[test]
    fn validators_do_not_compute() {
        assert_eq!(add::PRECOMPILE.validate(&[0u8; ADD_INPUT_LEN]), Ok(()));
        assert_eq!(
            add::PRECOMPILE.validate(&[0u8; ADD_INPUT_LEN - 1]),
            Err(PrecompileError::Bn254AddInputLength)
        );
        assert_eq!(
            pair::PRECOMPILE.validate(&[0x11; PAIR_ELEMENT_LEN]),
            Err(PrecompileError::Bn254G1NotOnCurve)
        );
    }
}
