#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image filtering module.
pub mod filter;

/// module containing parallelization utilities.
pub mod parallel;
