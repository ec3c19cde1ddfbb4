//! BLS12-381 precompiles added in [`EIP-2537`](https://eips.ethereum.org/EIPS/eip-2537)
//! For more details check modules for each precompile.
use crate::Precompile;

pub mod ate;
pub mod curve;
pub mod fields;
mod g1;
pub mod g1_add;
pub mod g1_msm;
pub mod g1_mul;
mod g2;
pub mod g2_add;
pub mod g2_msm;
pub mod g2_mul;
pub mod pairing;
#[cfg(test)]
mod test_vectors;
mod utils;

pub use g1::{encode_g1_point, extract_g1_input};
pub use g2::{encode_g2_point, extract_g2_input};

/// Returns the BLS12-381 precompiles.
pub fn precompiles() -> impl Iterator<Item = Precompile> {
    [
        g1_add::PRECOMPILE,
        g1_mul::PRECOMPILE,
        g1_msm::PRECOMPILE,
        g2_add::PRECOMPILE,
        g2_mul::PRECOMPILE,
        g2_msm::PRECOMPILE,
        pairing::PRECOMPILE,
    ]
    .into_iter()
}
