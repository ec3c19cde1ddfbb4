use super::fields::{Fp, Fp2};
use crate::bls12_381_const::{FP_LENGTH, PADDED_FP2_LENGTH, PADDED_FP_LENGTH, PADDING_LENGTH};
use crate::PrecompileError;

/// Encodes a single finite field element into byte slice with padding.
///
/// # Panics
///
/// Panics if `out` is not exactly 64 bytes long.
pub(super) fn fp_to_bytes(out: &mut [u8], input: &Fp) {
    let (padding, rest) = out.split_at_mut(PADDING_LENGTH);
    padding.fill(0);
    rest.copy_from_slice(&input.to_be_bytes());
}

/// Encodes an `Fp2` element as `c0 ‖ c1`, each padded to 64 bytes.
pub(super) fn fp2_to_bytes(out: &mut [u8], input: &Fp2) {
    fp_to_bytes(&mut out[..PADDED_FP_LENGTH], &input.c0);
    fp_to_bytes(&mut out[PADDED_FP_LENGTH..PADDED_FP2_LENGTH], &input.c1);
}

/// Removes zeros with which the precompile inputs are left padded to 64 bytes.
///
/// # Panics
///
/// Panics if the input is not exactly 64 bytes long.
pub(super) fn remove_padding(input: &[u8]) -> Result<[u8; FP_LENGTH], PrecompileError> {
    let (padding, unpadded) = input.split_at(PADDING_LENGTH);
    if !padding.iter().all(|&x| x == 0) {
        return Err(PrecompileError::Bls12381FpPaddingInvalid);
    }
    let mut out = [0u8; FP_LENGTH];
    out.copy_from_slice(unpadded);
    Ok(out)
}

/// Reads a padded 64 byte field element, checking the padding and that the value is smaller
/// than the modulus.
pub(super) fn read_fp(input: &[u8]) -> Result<Fp, PrecompileError> {
    let bytes = remove_padding(input)?;
    Fp::from_be_bytes(&bytes).ok_or(PrecompileError::Bls12381FpNotCanonical)
}

/// Reads a padded `Fp2` element encoded as `c0 ‖ c1`.
pub(super) fn read_fp2(input: &[u8]) -> Result<Fp2, PrecompileError> {
    let c0 = read_fp(&input[..PADDED_FP_LENGTH])?;
    let c1 = read_fp(&input[PADDED_FP_LENGTH..PADDED_FP2_LENGTH])?;
    Ok(Fp2::new(c0, c1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;
    use rstest::rstest;

    #[test]
    fn padded_round_trip() {
        let mut padded = [0u8; PADDED_FP_LENGTH];
        padded[PADDING_LENGTH..].copy_from_slice(&hex!("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"));
        let fp = read_fp(&padded).unwrap();
        let mut out = [0xffu8; PADDED_FP_LENGTH];
        fp_to_bytes(&mut out, &fp);
        assert_eq!(out, padded);
    }

    #[rstest]
    #[case::padding(0, 0x01, PrecompileError::Bls12381FpPaddingInvalid)]
    #[case::last_padding_byte(15, 0x80, PrecompileError::Bls12381FpPaddingInvalid)]
    #[case::not_canonical(16, 0xff, PrecompileError::Bls12381FpNotCanonical)]
    fn rejects(#[case] index: usize, #[case] byte: u8, #[case] expected: PrecompileError) {
        let mut padded = [0u8; PADDED_FP_LENGTH];
        padded[index] = byte;
        assert_eq!(read_fp(&padded), Err(expected));
    }

    #[test]
    fn modulus_is_not_canonical() {
        let mut padded = [0u8; PADDED_FP_LENGTH];
        padded[PADDING_LENGTH..].copy_from_slice(&hex!("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab"));
        assert_eq!(read_fp(&padded), Err(PrecompileError::Bls12381FpNotCanonical));
    }
}
