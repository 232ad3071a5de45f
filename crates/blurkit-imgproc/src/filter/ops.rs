use blurkit_image::{Image, ImageError, Pixel};

use super::{kernels, separable_filter_with_strategy};
use crate::parallel::ExecutionStrategy;

/// Standard deviation used when a caller has no particular value in mind.
pub const DEFAULT_SIGMA: f64 = 1.0;

/// Blur an image using a gaussian blur filter.
///
/// Builds a normalized 1D gaussian kernel and applies it as two sequential
/// 1D passes (horizontal, then vertical) with replicate border handling.
/// The source image is never mutated; a newly allocated image of identical
/// dimensions is returned.
///
/// Uses [`ExecutionStrategy::Auto`]; for explicit control over parallel
/// execution, use [`gaussian_blur_with_strategy`].
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel_size` - The size of the kernel, odd and at least 3.
/// * `sigma` - The standard deviation of the gaussian, positive and finite.
///
/// # Errors
///
/// All inputs are validated before any pixel is touched:
///
/// * [`ImageError::InvalidKernelSize`] - `kernel_size` is even or below 3.
/// * [`ImageError::InvalidSigma`] - `sigma` is non-positive or not finite.
/// * [`ImageError::InvalidDimensions`] - the image width or height is zero.
/// * [`ImageError::EmptyImage`] - the image carries no pixel data.
/// * [`ImageError::InvalidShape`] - the image carries fewer or more pixels
///   than its declared size.
///
/// # Examples
///
/// ```
/// use blurkit_image::{Image, ImageSize, Pixel};
/// use blurkit_imgproc::filter::gaussian_blur;
///
/// let src = Image::from_size_val(
///     ImageSize {
///         width: 8,
///         height: 8,
///     },
///     Pixel::new(30, 60, 90),
/// ).unwrap();
///
/// let dst = gaussian_blur(&src, 3, 1.0).unwrap();
/// assert_eq!(dst.size(), src.size());
/// ```
pub fn gaussian_blur(src: &Image, kernel_size: usize, sigma: f64) -> Result<Image, ImageError> {
    gaussian_blur_with_strategy(src, kernel_size, sigma, ExecutionStrategy::Auto)
}

/// Blur an image using a gaussian blur filter with execution strategy
/// control.
///
/// Same contract as [`gaussian_blur`]; the strategy only selects between
/// serial and row-parallel execution, which produce identical output.
pub fn gaussian_blur_with_strategy(
    src: &Image,
    kernel_size: usize,
    sigma: f64,
    strategy: ExecutionStrategy,
) -> Result<Image, ImageError> {
    validate(src, kernel_size, sigma)?;

    let kernel = kernels::gaussian_kernel_1d(kernel_size, sigma);

    let mut dst = Image::from_size_val(src.size(), Pixel::BLACK)?;
    separable_filter_with_strategy(src, &mut dst, &kernel, &kernel, strategy)?;

    Ok(dst)
}

/// Check every blur precondition before any computation starts.
fn validate(src: &Image, kernel_size: usize, sigma: f64) -> Result<(), ImageError> {
    if kernel_size < 3 || kernel_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size));
    }

    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ImageError::InvalidSigma(sigma));
    }

    if src.width() == 0 || src.height() == 0 {
        return Err(ImageError::InvalidDimensions(src.width(), src.height()));
    }

    if src.as_slice().is_empty() {
        return Err(ImageError::EmptyImage);
    }

    let num_pixels = src.width() * src.height();
    if src.as_slice().len() != num_pixels {
        return Err(ImageError::InvalidShape(src.as_slice().len(), num_pixels));
    }

    Ok(())
}
