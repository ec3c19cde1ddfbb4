use super::{
    curve::G1Affine,
    utils::{fp_to_bytes, read_fp},
};
use crate::bls12_381_const::{PADDED_FP_LENGTH, PADDED_G1_LENGTH};
use crate::PrecompileError;

/// Encodes a G1 point in affine format into a 128 byte array with padded elements.
///
/// The point at infinity encodes as all zeros.
pub fn encode_g1_point(input: &G1Affine) -> [u8; PADDED_G1_LENGTH] {
    let mut out = [0u8; PADDED_G1_LENGTH];
    if !input.is_identity() {
        fp_to_bytes(&mut out[..PADDED_FP_LENGTH], &input.x());
        fp_to_bytes(&mut out[PADDED_FP_LENGTH..], &input.y());
    }
    out
}

/// Extracts a G1 point in Affine format from a 128 byte slice representation.
///
/// - Both coordinates must carry 16 zero padding bytes and be canonical field elements.
/// - `(0, 0)` is the point at infinity; any other point must be on the curve.
/// - With `subgroup_check` set, the point must also lie in the order `r` subgroup.
///
/// # Panics
///
/// Panics if the input is not exactly 128 bytes long.
pub fn extract_g1_input(input: &[u8], subgroup_check: bool) -> Result<G1Affine, PrecompileError> {
    let x = read_fp(&input[..PADDED_FP_LENGTH])?;
    let y = read_fp(&input[PADDED_FP_LENGTH..PADDED_G1_LENGTH])?;
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::identity());
    }

    // From EIP-2537:
    //
    // Error cases:
    //
    // * An input is neither a point on the G1 elliptic curve nor the infinity point
    let point = G1Affine::from_xy(x, y).ok_or(PrecompileError::Bls12381G1NotOnCurve)?;

    // Scalar multiplications, MSMs and pairings MUST perform a subgroup check. Addition
    // only requires the curve check.
    if subgroup_check && !point.is_torsion_free() {
        return Err(PrecompileError::Bls12381G1NotInSubgroup);
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn infinity_round_trip() {
        let zero = [0u8; PADDED_G1_LENGTH];
        let point = extract_g1_input(&zero, true).unwrap();
        assert!(point.is_identity());
        assert_eq!(encode_g1_point(&point), zero);
    }

    #[test]
    fn generator_round_trip() {
        let encoded = hex!(
            "0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
            "0000000000000000000000000000000008b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"
        );
        let point = extract_g1_input(&encoded, true).unwrap();
        assert_eq!(point, G1Affine::generator());
        assert_eq!(encode_g1_point(&point), encoded);
    }

    #[test]
    fn subgroup_check_is_optional() {
        let encoded = hex!(
            "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004"
            "000000000000000000000000000000000a989badd40d6212b33cffc3f3763e9bc760f988c9926b26da9dd85e928483446346b8ed00e1de5d5ea93e354abe706c"
        );
        assert!(extract_g1_input(&encoded, false).is_ok());
        assert_eq!(
            extract_g1_input(&encoded, true),
            Err(PrecompileError::Bls12381G1NotInSubgroup)
        );
    }

    #[test]
    fn off_curve() {
        let mut encoded = [0u8; PADDED_G1_LENGTH];
        encoded[PADDED_FP_LENGTH - 1] = 1;
        encoded[PADDED_G1_LENGTH - 1] = 1;
        assert_eq!(
            extract_g1_input(&encoded, false),
            Err(PrecompileError::Bls12381G1NotOnCurve)
        );
    }
}
