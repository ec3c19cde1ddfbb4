//! `curveme`: runs, validates and tests the BN254 and BLS12-381 precompiles from the
//! command line.
pub mod cmd;
pub mod tracing_util;
