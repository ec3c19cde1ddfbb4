//! Operation identifiers: opcodes, addresses, names and output sizes.
use alloy_primitives::Address;
use core::{fmt, str::FromStr};

use crate::{bls12_381_const, bn128, u64_to_address, Precompile};

/// Curve family an operation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    /// The `alt_bn128` curve of EIP-196 and EIP-197.
    Bn254,
    /// BLS12-381, EIP-2537.
    Bls12_381,
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bn254 => "bn254",
            Self::Bls12_381 => "bls12-381",
        })
    }
}

/// Unique operation identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrecompileId {
    /// Point addition (ADD) on the elliptic curve 'alt_bn128'.
    Bn254Add,
    /// Scalar multiplication (MUL) on the elliptic curve 'alt_bn128'.
    Bn254Mul,
    /// Bilinear function on groups on the elliptic curve 'alt_bn128'.
    Bn254Pairing,
    /// Point addition in G1 (curve over base prime field).
    Bls12G1Add,
    /// Scalar multiplication in G1.
    Bls12G1Mul,
    /// Multi-scalar-multiplication (MSM) in G1 (curve over base prime field).
    Bls12G1Msm,
    /// Point addition in G2 (curve over quadratic extension of the base prime field).
    Bls12G2Add,
    /// Scalar multiplication in G2.
    Bls12G2Mul,
    /// Multi-scalar-multiplication (MSM) in G2 (curve over quadratic extension of the base prime field).
    Bls12G2Msm,
    /// Pairing operations between a set of pairs of (G1, G2) points.
    Bls12Pairing,
}

impl PrecompileId {
    /// Every operation, ordered by opcode.
    pub const ALL: [Self; 10] = [
        Self::Bn254Add,
        Self::Bn254Mul,
        Self::Bn254Pairing,
        Self::Bls12G1Add,
        Self::Bls12G1Mul,
        Self::Bls12G1Msm,
        Self::Bls12G2Add,
        Self::Bls12G2Mul,
        Self::Bls12G2Msm,
        Self::Bls12Pairing,
    ];

    /// One byte opcode, equal to the last byte of the EVM precompile address.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Bn254Add => 0x06,
            Self::Bn254Mul => 0x07,
            Self::Bn254Pairing => 0x08,
            Self::Bls12G1Add => 0x0b,
            Self::Bls12G1Mul => 0x0c,
            Self::Bls12G1Msm => 0x0d,
            Self::Bls12G2Add => 0x0e,
            Self::Bls12G2Mul => 0x0f,
            Self::Bls12G2Msm => 0x10,
            Self::Bls12Pairing => 0x11,
        }
    }

    /// Looks up an operation by opcode.
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        let id = match opcode {
            0x06 => Self::Bn254Add,
            0x07 => Self::Bn254Mul,
            0x08 => Self::Bn254Pairing,
            0x0b => Self::Bls12G1Add,
            0x0c => Self::Bls12G1Mul,
            0x0d => Self::Bls12G1Msm,
            0x0e => Self::Bls12G2Add,
            0x0f => Self::Bls12G2Mul,
            0x10 => Self::Bls12G2Msm,
            0x11 => Self::Bls12Pairing,
            _ => return None,
        };
        Some(id)
    }

    /// Returns the EVM address of the operation.
    pub const fn address(&self) -> Address {
        u64_to_address(self.opcode() as u64)
    }

    /// Returns the name of the operation.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bn254Add => "BN254_ADD",
            Self::Bn254Mul => "BN254_MUL",
            Self::Bn254Pairing => "BN254_PAIRING",
            Self::Bls12G1Add => "BLS12_G1ADD",
            Self::Bls12G1Mul => "BLS12_G1MUL",
            Self::Bls12G1Msm => "BLS12_G1MSM",
            Self::Bls12G2Add => "BLS12_G2ADD",
            Self::Bls12G2Mul => "BLS12_G2MUL",
            Self::Bls12G2Msm => "BLS12_G2MSM",
            Self::Bls12Pairing => "BLS12_PAIRING_CHECK",
        }
    }

    /// Returns the curve family of the operation.
    pub const fn curve(&self) -> CurveFamily {
        match self {
            Self::Bn254Add | Self::Bn254Mul | Self::Bn254Pairing => CurveFamily::Bn254,
            _ => CurveFamily::Bls12_381,
        }
    }

    /// Size in bytes of a successful output.
    pub const fn output_len(&self) -> usize {
        match self {
            Self::Bn254Add | Self::Bn254Mul => bn128::G1_LEN,
            Self::Bls12G1Add | Self::Bls12G1Mul | Self::Bls12G1Msm => {
                bls12_381_const::PADDED_G1_LENGTH
            }
            Self::Bls12G2Add | Self::Bls12G2Mul | Self::Bls12G2Msm => {
                bls12_381_const::PADDED_G2_LENGTH
            }
            Self::Bn254Pairing | Self::Bls12Pairing => 32,
        }
    }

    /// Returns the precompile implementing the operation.
    pub const fn precompile(&self) -> Precompile {
        match self {
            Self::Bn254Add => bn128::add::PRECOMPILE,
            Self::Bn254Mul => bn128::mul::PRECOMPILE,
            Self::Bn254Pairing => bn128::pair::PRECOMPILE,
            Self::Bls12G1Add => crate::bls12_381::g1_add::PRECOMPILE,
            Self::Bls12G1Mul => crate::bls12_381::g1_mul::PRECOMPILE,
            Self::Bls12G1Msm => crate::bls12_381::g1_msm::PRECOMPILE,
            Self::Bls12G2Add => crate::bls12_381::g2_add::PRECOMPILE,
            Self::Bls12G2Mul => crate::bls12_381::g2_mul::PRECOMPILE,
            Self::Bls12G2Msm => crate::bls12_381::g2_msm::PRECOMPILE,
            Self::Bls12Pairing => crate::bls12_381::pairing::PRECOMPILE,
        }
    }
}

impl fmt::Display for PrecompileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown operation name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownPrecompileId;

impl fmt::Display for UnknownPrecompileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown precompile name or opcode")
    }
}

impl core::error::Error for UnknownPrecompileId {}

impl FromStr for PrecompileId {
    type Err = UnknownPrecompileId;

    /// Accepts the operation name, case insensitive, or its opcode as `0x..` hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return u8::from_str_radix(hex, 16)
                .ok()
                .and_then(Self::from_opcode)
                .ok_or(UnknownPrecompileId);
        }
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownPrecompileId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn opcodes_round_trip() {
        for id in PrecompileId::ALL {
            assert_eq!(PrecompileId::from_opcode(id.opcode()), Some(id));
            assert_eq!(id.address().0[19], id.opcode());
            assert_eq!(id.precompile().id(), id);
        }
        assert_eq!(PrecompileId::from_opcode(0x09), None);
        assert_eq!(PrecompileId::from_opcode(0x12), None);
    }

    #[rstest]
    #[case::name("BN254_MUL", PrecompileId::Bn254Mul)]
    #[case::lowercase("bls12_g2msm", PrecompileId::Bls12G2Msm)]
    #[case::opcode("0x11", PrecompileId::Bls12Pairing)]
    fn parses(#[case] s: &str, #[case] expected: PrecompileId) {
        assert_eq!(s.parse::<PrecompileId>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!("ECRECOVER".parse::<PrecompileId>(), Err(UnknownPrecompileId));
        assert_eq!("0x01".parse::<PrecompileId>(), Err(UnknownPrecompileId));
    }

    #[test]
    fn output_lengths() {
        assert_eq!(PrecompileId::Bn254Mul.output_len(), 64);
        assert_eq!(PrecompileId::Bn254Pairing.output_len(), 32);
        assert_eq!(PrecompileId::Bls12G1Msm.output_len(), 128);
        assert_eq!(PrecompileId::Bls12G2Mul.output_len(), 256);
        assert_eq!(PrecompileId::Bls12Pairing.output_len(), 32);
        assert_eq!(PrecompileId::Bls12G1Add.curve(), CurveFamily::Bls12_381);
    }
}
