//! Interface for the precompiles. It contains the precompile result type,
//! the result code reported at the outer boundary, and the precompile error type.
use alloy_primitives::Bytes;
use core::fmt;

/// A precompile operation result type
///
/// Returns either `Ok(output_bytes)` or `Err(error)`.
pub type PrecompileResult = Result<Bytes, PrecompileError>;

/// Precompile function type. Takes the input and returns the encoded output.
pub type PrecompileFn = fn(&[u8]) -> PrecompileResult;

/// Validator function type. Runs the decode and validation path of a precompile without
/// computing anything.
pub type ValidateFn = fn(&[u8]) -> Result<(), PrecompileError>;

/// Stable numeric outcome of a call, see [`crate::execute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ResultCode {
    /// The call succeeded and the output was written.
    Success = 0,
    /// Input length or shape is wrong, the operation is unknown or the output buffer is too
    /// small.
    InvalidInput = 1,
    /// A point failed the field range, padding, curve or subgroup check.
    InvalidPoint = 2,
    /// Reserved. Every 32-byte scalar is accepted, so this is never produced.
    InvalidScalar = 3,
    /// An internal invariant was broken during computation.
    ComputationFailed = 4,
}

impl ResultCode {
    /// Returns `true` for [`ResultCode::Success`].
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the code as its numeric value.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<ResultCode> for u8 {
    #[inline]
    fn from(code: ResultCode) -> Self {
        code.as_u8()
    }
}

impl From<&PrecompileError> for ResultCode {
    #[inline]
    fn from(err: &PrecompileError) -> Self {
        err.result_code()
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::InvalidInput => "invalid input",
            Self::InvalidPoint => "invalid point",
            Self::InvalidScalar => "invalid scalar",
            Self::ComputationFailed => "computation failed",
        };
        f.write_str(s)
    }
}

/// Precompile error type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// Bn254 add input is shorter than two points
    Bn254AddInputLength,
    /// Bn254 mul input is shorter than a point and a scalar
    Bn254MulInputLength,
    /// Bn254 pair length
    Bn254PairLength,
    /// Bn254 coordinate is not smaller than the field modulus
    Bn254FieldPointNotAMember,
    /// Bn254 G1 point is not on the curve
    Bn254G1NotOnCurve,
    /// Bn254 G2 point is not on the twist
    Bn254G2NotOnCurve,
    /// Bn254 G2 point is not in the prime order subgroup
    Bn254G2NotInSubgroup,
    // BLS12-381 errors
    /// G1 addition input is not 256 bytes
    Bls12381G1AddInputLength,
    /// G1 multiplication input is not 160 bytes
    Bls12381G1MulInputLength,
    /// G1 MSM input is empty or not a multiple of 160 bytes
    Bls12381G1MsmInputLength,
    /// G2 addition input is not 512 bytes
    Bls12381G2AddInputLength,
    /// G2 multiplication input is not 288 bytes
    Bls12381G2MulInputLength,
    /// G2 MSM input is empty or not a multiple of 288 bytes
    Bls12381G2MsmInputLength,
    /// Pairing input is not a multiple of 384 bytes
    Bls12381PairingInputLength,
    /// The top 16 bytes of a padded field element are not zero
    Bls12381FpPaddingInvalid,
    /// Field element is not smaller than the modulus
    Bls12381FpNotCanonical,
    /// G1 point is not on the curve
    Bls12381G1NotOnCurve,
    /// G1 point is not in the prime order subgroup
    Bls12381G1NotInSubgroup,
    /// G2 point is not on the twist
    Bls12381G2NotOnCurve,
    /// G2 point is not in the prime order subgroup
    Bls12381G2NotInSubgroup,
    /// Scalar out of representation. Never produced, every 32-byte scalar is valid.
    InvalidScalar,
    /// The caller provided output buffer cannot hold the result
    OutputBufferTooSmall {
        /// Bytes needed
        expected: usize,
        /// Bytes available
        actual: usize,
    },
    /// No operation is registered for the opcode
    UnknownOperation(u8),
    /// Internal invariant violation with a static description
    ComputationFailed(&'static str),
}

impl PrecompileError {
    /// Collapses the error into the result code reported to callers.
    pub const fn result_code(&self) -> ResultCode {
        match self {
            Self::Bn254AddInputLength
            | Self::Bn254MulInputLength
            | Self::Bn254PairLength
            | Self::Bls12381G1AddInputLength
            | Self::Bls12381G1MulInputLength
            | Self::Bls12381G1MsmInputLength
            | Self::Bls12381G2AddInputLength
            | Self::Bls12381G2MulInputLength
            | Self::Bls12381G2MsmInputLength
            | Self::Bls12381PairingInputLength
            | Self::OutputBufferTooSmall { .. }
            | Self::UnknownOperation(_) => ResultCode::InvalidInput,
            Self::Bn254FieldPointNotAMember
            | Self::Bn254G1NotOnCurve
            | Self::Bn254G2NotOnCurve
            | Self::Bn254G2NotInSubgroup
            | Self::Bls12381FpPaddingInvalid
            | Self::Bls12381FpNotCanonical
            | Self::Bls12381G1NotOnCurve
            | Self::Bls12381G1NotInSubgroup
            | Self::Bls12381G2NotOnCurve
            | Self::Bls12381G2NotInSubgroup => ResultCode::InvalidPoint,
            Self::InvalidScalar => ResultCode::InvalidScalar,
            Self::ComputationFailed(_) => ResultCode::ComputationFailed,
        }
    }

    /// Returns `true` if the error is a length or shape violation.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self.result_code(), ResultCode::InvalidInput)
    }
}

impl core::error::Error for PrecompileError {}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Bn254AddInputLength => "bn254 add input too short",
            Self::Bn254MulInputLength => "bn254 mul input too short",
            Self::Bn254PairLength => "bn254 invalid pair length",
            Self::Bn254FieldPointNotAMember => "field point not a member of bn254 curve",
            Self::Bn254G1NotOnCurve => "bn254 g1 point not on curve",
            Self::Bn254G2NotOnCurve => "bn254 g2 point not on curve",
            Self::Bn254G2NotInSubgroup => "bn254 g2 point not in subgroup",
            Self::Bls12381G1AddInputLength => "bls12-381 g1 add invalid input length",
            Self::Bls12381G1MulInputLength => "bls12-381 g1 mul invalid input length",
            Self::Bls12381G1MsmInputLength => "bls12-381 g1 msm invalid input length",
            Self::Bls12381G2AddInputLength => "bls12-381 g2 add invalid input length",
            Self::Bls12381G2MulInputLength => "bls12-381 g2 mul invalid input length",
            Self::Bls12381G2MsmInputLength => "bls12-381 g2 msm invalid input length",
            Self::Bls12381PairingInputLength => "bls12-381 pairing invalid input length",
            Self::Bls12381FpPaddingInvalid => "bls12-381 field element padding is not zero",
            Self::Bls12381FpNotCanonical => "bls12-381 field element is not canonical",
            Self::Bls12381G1NotOnCurve => "bls12-381 g1 point not on curve",
            Self::Bls12381G1NotInSubgroup => "bls12-381 g1 point not in subgroup",
            Self::Bls12381G2NotOnCurve => "bls12-381 g2 point not on curve",
            Self::Bls12381G2NotInSubgroup => "bls12-381 g2 point not in subgroup",
            Self::InvalidScalar => "invalid scalar",
            Self::OutputBufferTooSmall { expected, actual } => {
                return write!(f, "output buffer too small: need {expected}, got {actual}");
            }
            Self::UnknownOperation(opcode) => {
                return write!(f, "unknown operation {opcode:#04x}");
            }
            Self::ComputationFailed(s) => *s,
        };
        f.write_str(s)
    }
}
