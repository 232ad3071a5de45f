//! Filter operations
//!
//! This module provides the separable Gaussian blur and its building blocks.

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;

/// Separable filter operations
mod separable_filter;
pub use separable_filter::*;
