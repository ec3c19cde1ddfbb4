//! # curve-precompiles
//!
//! BN254 and BLS12-381 precompiles: point addition, scalar multiplication, multi-scalar
//! multiplication and pairing checks over the fixed byte layouts of EIP-196, EIP-197 and
//! EIP-2537.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[macro_use]
mod field;
#[macro_use]
mod group;

mod arithmetic;
pub mod bls12_381;
pub mod bls12_381_const;
pub mod bn128;
pub mod id;
pub mod interface;
pub mod scalar;
pub mod utilities;

pub use id::{CurveFamily, PrecompileId};
pub use interface::*;

use alloy_primitives::{map::HashMap, Address};
use once_cell::race::OnceBox;
use std::boxed::Box;
use tracing::{debug, trace};

/// A single operation: its identifier, the function computing it and the validator sharing
/// its decode path.
#[derive(Clone, Copy, Debug)]
pub struct Precompile {
    id: PrecompileId,
    run: PrecompileFn,
    validate: ValidateFn,
}

impl Precompile {
    /// Creates a new precompile.
    pub const fn new(id: PrecompileId, run: PrecompileFn, validate: ValidateFn) -> Self {
        Self { id, run, validate }
    }

    /// Returns the operation identifier.
    #[inline]
    pub const fn id(&self) -> PrecompileId {
        self.id
    }

    /// Returns the EVM address of the precompile.
    #[inline]
    pub const fn address(&self) -> Address {
        self.id.address()
    }

    /// Size in bytes of a successful output.
    #[inline]
    pub const fn output_len(&self) -> usize {
        self.id.output_len()
    }

    /// Runs the precompile.
    #[inline]
    pub fn run(&self, input: &[u8]) -> PrecompileResult {
        (self.run)(input)
    }

    /// Checks the input layout and every point in it without computing the result.
    #[inline]
    pub fn validate(&self, input: &[u8]) -> Result<(), PrecompileError> {
        (self.validate)(input)
    }
}

/// Registry of every supported operation.
#[derive(Clone, Default, Debug)]
pub struct Precompiles {
    /// Precompiles by address
    inner: HashMap<Address, Precompile>,
}

impl Precompiles {
    /// Returns the registry, building it on first use.
    pub fn new() -> &'static Self {
        static INSTANCE: OnceBox<Precompiles> = OnceBox::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Precompiles::default();
            precompiles.extend([
                // EIP-196: Precompiled contracts for addition and scalar multiplication on the elliptic curve alt_bn128.
                // EIP-197: Precompiled contracts for optimal ate pairing check on the elliptic curve alt_bn128.
                bn128::add::PRECOMPILE,
                bn128::mul::PRECOMPILE,
                bn128::pair::PRECOMPILE,
            ]);
            // EIP-2537: Precompile for BLS12-381 curve operations.
            precompiles.extend(bls12_381::precompiles());
            Box::new(precompiles)
        })
    }

    /// Is the given address a precompile.
    #[inline]
    pub fn contains(&self, address: &Address) -> bool {
        self.inner.contains_key(address)
    }

    /// Returns the precompile for the given operation.
    #[inline]
    pub fn get(&self, id: PrecompileId) -> Option<&Precompile> {
        self.get_by_address(&id.address())
    }

    /// Returns the precompile for the given address.
    #[inline]
    pub fn get_by_address(&self, address: &Address) -> Option<&Precompile> {
        self.inner.get(address)
    }

    /// Returns the precompile for the given opcode.
    #[inline]
    pub fn get_by_opcode(&self, opcode: u8) -> Option<&Precompile> {
        self.get_by_address(&u64_to_address(opcode as u64))
    }

    /// Iterates over the registered precompiles ordered by opcode.
    pub fn iter(&self) -> impl Iterator<Item = &Precompile> {
        PrecompileId::ALL.into_iter().filter_map(|id| self.get(id))
    }

    /// Is the precompiles list empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of precompiles.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Extends the precompiles with the given precompiles.
    ///
    /// A precompile at an address already present replaces the existing one.
    #[inline]
    pub fn extend(&mut self, other: impl IntoIterator<Item = Precompile>) {
        for precompile in other {
            self.inner.insert(precompile.address(), precompile);
        }
    }
}

/// Builds every lazily initialized table and the registry. Idempotent, and safe to call
/// from several threads at once.
pub fn init() {
    let _ = bn128::fields::Fq12::frobenius_coefficients();
    let _ = bls12_381::fields::Fp12::frobenius_coefficients();
    let _ = Precompiles::new();
}

/// Runs `id` on `input` and writes the encoded result to the front of `output`.
///
/// Exactly [`PrecompileId::output_len`] bytes are written on success. On failure `output` is
/// left untouched and the error is collapsed into its [`ResultCode`].
pub fn execute(id: PrecompileId, input: &[u8], output: &mut [u8]) -> ResultCode {
    trace!(op = %id, input_len = input.len(), "executing precompile");
    match try_execute(id, input, output) {
        Ok(()) => ResultCode::Success,
        Err(err) => {
            let code = err.result_code();
            debug!(op = %id, %err, code = code.as_u8(), "precompile rejected input");
            code
        }
    }
}

/// Same as [`execute`], with the operation selected by opcode. Unknown opcodes are
/// [`ResultCode::InvalidInput`].
pub fn execute_opcode(opcode: u8, input: &[u8], output: &mut [u8]) -> ResultCode {
    match PrecompileId::from_opcode(opcode) {
        Some(id) => execute(id, input, output),
        None => {
            let err = PrecompileError::UnknownOperation(opcode);
            debug!(opcode, %err, "precompile rejected input");
            err.result_code()
        }
    }
}

/// Runs `id` and copies the result into `output`, propagating the detailed error.
pub fn try_execute(
    id: PrecompileId,
    input: &[u8],
    output: &mut [u8],
) -> Result<(), PrecompileError> {
    let expected = id.output_len();
    if output.len() < expected {
        return Err(PrecompileError::OutputBufferTooSmall {
            expected,
            actual: output.len(),
        });
    }
    let precompile = Precompiles::new()
        .get(id)
        .ok_or(PrecompileError::UnknownOperation(id.opcode()))?;
    let bytes = precompile.run(input)?;
    if bytes.len() != expected {
        return Err(PrecompileError::ComputationFailed("unexpected output length"));
    }
    output[..expected].copy_from_slice(&bytes);
    Ok(())
}

/// Const function for making an address by concatenating the bytes from two given numbers.
///
/// Note that 32 + 128 = 160 = 20 bytes (the length of an address).
///
/// This function is used as a convenience for specifying the addresses of the various precompiles.
#[inline]
pub const fn u64_to_address(x: u64) -> Address {
    let x = x.to_be_bytes();
    Address::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7],
    ])
}
