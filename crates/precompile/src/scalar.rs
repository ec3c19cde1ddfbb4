//! Fixed-width scalars consumed by the multiplication precompiles.

use crate::arithmetic::{limbs_from_be_bytes, limbs_to_be_bytes};

/// Scalar length in bytes, shared by both curves.
pub const SCALAR_LENGTH: usize = 32;

/// A 256-bit unsigned integer decoded from 32 big-endian bytes.
///
/// Scalars are never reduced: any value is accepted and the group order takes care of the
/// wrap-around, so decoding cannot fail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scalar([u64; 4]);

impl Scalar {
    /// Number of bits processed by scalar multiplication, independent of the value.
    pub const BITS: usize = 256;
    /// The zero scalar.
    pub const ZERO: Self = Self([0; 4]);

    /// Creates a scalar from little-endian limbs.
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }

    /// Creates a scalar from a small integer.
    pub const fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }

    /// Decodes a big-endian scalar.
    pub fn from_be_bytes(bytes: &[u8; SCALAR_LENGTH]) -> Self {
        Self(limbs_from_be_bytes(bytes))
    }

    /// Encodes the scalar as big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; SCALAR_LENGTH] {
        let mut out = [0u8; SCALAR_LENGTH];
        limbs_to_be_bytes(&self.0, &mut out);
        out
    }

    /// Returns `true` for zero.
    pub const fn is_zero(&self) -> bool {
        crate::arithmetic::is_zero(&self.0)
    }

    /// Returns bit `i`, counting from the least significant bit.
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        (self.0[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Returns the `width` bits starting at bit `offset` as an integer. Bits past the top of
    /// the scalar read as zero.
    #[inline]
    pub(crate) fn window(&self, offset: usize, width: usize) -> usize {
        let mut value = 0;
        for i in (offset..(offset + width).min(Self::BITS)).rev() {
            value = (value << 1) | self.bit(i) as usize;
        }
        value
    }
}

/// Decodes a 32-byte big-endian scalar. Every input is a valid scalar.
#[inline]
pub fn decode_scalar(input: &[u8; SCALAR_LENGTH]) -> Scalar {
    Scalar::from_be_bytes(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn decodes_big_endian() {
        let bytes = hex!("00000000000000000000000000000000000000000000000011138ce750fa15c2");
        let scalar = decode_scalar(&bytes);
        assert_eq!(scalar, Scalar::from_u64(0x11138ce750fa15c2));
        assert_eq!(scalar.to_be_bytes(), bytes);
    }

    #[test]
    fn bits_and_windows() {
        let scalar = Scalar::from_limbs([0b1011_0110, 0, 0, 1 << 63]);
        assert!(!scalar.bit(0));
        assert!(scalar.bit(1));
        assert!(scalar.bit(255));
        assert_eq!(scalar.window(0, 4), 0b0110);
        assert_eq!(scalar.window(4, 4), 0b1011);
        assert_eq!(scalar.window(254, 4), 0b10);
    }

    #[test]
    fn all_ones_is_accepted() {
        let scalar = decode_scalar(&[0xff; 32]);
        assert!(!scalar.is_zero());
        assert_eq!(scalar.window(252, 4), 0xf);
    }
}
