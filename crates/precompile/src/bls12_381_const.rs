//! Byte layout constants of the BLS12-381 precompile inputs and outputs.

/// FP_LENGTH specifies the number of bytes needed to represent an
/// Fp element. This is an element in the base field of BLS12-381.
///
/// Note: The base field is used to define G1 and G2 elements.
pub const FP_LENGTH: usize = 48;
/// PADDED_FP_LENGTH specifies the number of bytes used to represent an Fp element on the
/// wire, see EIP-2537.
///
/// Note: We only need FP_LENGTH number of bytes to represent it,
/// but the byte representation is padded to be 32 byte aligned.
pub const PADDED_FP_LENGTH: usize = 64;
/// Number of zero bytes in front of every padded field element.
pub const PADDING_LENGTH: usize = PADDED_FP_LENGTH - FP_LENGTH;

/// G1_LENGTH specifies the number of bytes needed to represent a G1 element.
///
/// Note: A G1 element contains 2 Fp elements.
pub const G1_LENGTH: usize = 2 * FP_LENGTH;
/// PADDED_G1_LENGTH specifies the number of bytes used to represent a padded G1 element.
pub const PADDED_G1_LENGTH: usize = 2 * PADDED_FP_LENGTH;

/// PADDED_FP2_LENGTH specifies the number of bytes used to represent a padded Fp2 element,
/// `c0 ‖ c1`.
pub const PADDED_FP2_LENGTH: usize = 2 * PADDED_FP_LENGTH;
/// PADDED_G2_LENGTH specifies the number of bytes used to represent a padded G2 element.
///
/// Note: A G2 element can be represented using 2 Fp2 elements.
pub const PADDED_G2_LENGTH: usize = 2 * PADDED_FP2_LENGTH;

/// SCALAR_LENGTH specifies the number of bytes needed to represent a scalar.
///
/// Note: Scalars are 32 byte big-endian integers and are not reduced.
pub const SCALAR_LENGTH: usize = crate::scalar::SCALAR_LENGTH;

/// G1_ADD_INPUT_LENGTH specifies the number of bytes that the input to G1ADD
/// must occupy.
///
/// Note: The input to the G1 addition precompile is 2 G1 elements.
pub const G1_ADD_INPUT_LENGTH: usize = 2 * PADDED_G1_LENGTH;
/// G1_MUL_INPUT_LENGTH specifies the number of bytes that the input to G1MUL must occupy.
///
/// Note: The input is a G1 element and a scalar.
pub const G1_MUL_INPUT_LENGTH: usize = PADDED_G1_LENGTH + SCALAR_LENGTH;
/// G1_MSM_INPUT_LENGTH specifies the number of bytes that each MSM input pair should have.
///
/// Note: An MSM pair is a G1 element and a scalar. The input to the MSM precompile will have `n`
/// of these pairs.
pub const G1_MSM_INPUT_LENGTH: usize = PADDED_G1_LENGTH + SCALAR_LENGTH;

/// G2_ADD_INPUT_LENGTH specifies the number of bytes that the input to G2ADD
/// must occupy.
///
/// Note: The input to the G2 addition precompile is 2 G2 elements.
pub const G2_ADD_INPUT_LENGTH: usize = 2 * PADDED_G2_LENGTH;
/// G2_MUL_INPUT_LENGTH specifies the number of bytes that the input to G2MUL must occupy.
pub const G2_MUL_INPUT_LENGTH: usize = PADDED_G2_LENGTH + SCALAR_LENGTH;
/// G2_MSM_INPUT_LENGTH specifies the number of bytes that each MSM input pair should have.
///
/// Note: An MSM pair is a G2 element and a scalar. The input to the MSM will have `n`
/// of these pairs.
pub const G2_MSM_INPUT_LENGTH: usize = PADDED_G2_LENGTH + SCALAR_LENGTH;

/// PAIRING_INPUT_LENGTH specifies the number of bytes that each Pairing input pair should have.
///
/// Note: An Pairing input-pair is a G1 element and a G2 element. The input to the Pairing will have `n`
/// of these pairs.
pub const PAIRING_INPUT_LENGTH: usize = PADDED_G1_LENGTH + PADDED_G2_LENGTH;
