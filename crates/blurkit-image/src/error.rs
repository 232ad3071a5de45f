/// An error type for the image and filter modules.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when the pixel data length does not match the declared size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidShape(usize, usize),

    /// Error when source and destination images have different sizes.
    #[error("Source image size ({0}x{1}) does not match destination image size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the kernel size is even, too small or empty.
    #[error("Kernel size must be odd and at least 3, got {0}")]
    InvalidKernelSize(usize),

    /// Error when sigma is non-positive or not finite.
    #[error("Sigma must be positive and finite, got {0}")]
    InvalidSigma(f64),

    /// Error when the image width or height is zero.
    #[error("Image dimensions must be positive, got {0}x{1}")]
    InvalidDimensions(usize, usize),

    /// Error when the image carries no pixel data.
    #[error("Image data cannot be empty")]
    EmptyImage,
}
