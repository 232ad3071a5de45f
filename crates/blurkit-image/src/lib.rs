#![deny(missing_docs)]
//! RGB image container types for the blurkit filters

/// image representation used by the filter operations.
pub mod image;

/// Error types for the image module.
pub mod error;

/// RGB pixel type.
pub mod pixel;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::pixel::Pixel;
