use blurkit_image::{Image, ImageError, Pixel};
use rayon::prelude::*;

use crate::parallel::ExecutionStrategy;

/// Convert an accumulated channel value to 8 bits, saturating at the valid
/// range. Accumulation stays in floating point for the whole pass and is
/// clamped exactly once here.
#[inline]
fn to_u8(val: f64) -> u8 {
    val.round().clamp(0.0, 255.0) as u8
}

/// A separable 2D filter that applies horizontal and vertical 1D convolutions
/// sequentially.
///
/// This struct caches the kernel data and precomputed tap offsets for
/// efficient filtering.
struct SeparableFilter {
    kernel_x: Vec<f64>,
    kernel_y: Vec<f64>,
    offsets_x: Vec<isize>,
    offsets_y: Vec<isize>,
}

impl SeparableFilter {
    /// Create a new separable filter with the given kernels.
    ///
    /// # Arguments
    ///
    /// * `kernel_x` - The horizontal convolution kernel
    /// * `kernel_y` - The vertical convolution kernel
    fn new(kernel_x: &[f64], kernel_y: &[f64]) -> Self {
        let half_x = kernel_x.len() / 2;
        let half_y = kernel_y.len() / 2;

        let offsets_x = (0..kernel_x.len())
            .map(|i| i as isize - half_x as isize)
            .collect();

        let offsets_y = (0..kernel_y.len())
            .map(|i| i as isize - half_y as isize)
            .collect();

        Self {
            kernel_x: kernel_x.to_vec(),
            kernel_y: kernel_y.to_vec(),
            offsets_x,
            offsets_y,
        }
    }

    /// Convolve one output pixel along the horizontal axis.
    ///
    /// Taps falling outside the row are clamped to the nearest edge column
    /// (replicate border).
    #[inline]
    fn filter_pixel_horizontal(&self, src_row: &[Pixel], cols: usize, c: usize) -> Pixel {
        let (mut acc_r, mut acc_g, mut acc_b) = (0.0f64, 0.0f64, 0.0f64);

        for (&k, &off) in self.kernel_x.iter().zip(self.offsets_x.iter()) {
            let x = (c as isize + off).clamp(0, cols as isize - 1) as usize;
            let p = src_row[x];
            acc_r += p.r as f64 * k;
            acc_g += p.g as f64 * k;
            acc_b += p.b as f64 * k;
        }

        Pixel::new(to_u8(acc_r), to_u8(acc_g), to_u8(acc_b))
    }

    /// Convolve one output pixel along the vertical axis, reading the
    /// already horizontally filtered buffer.
    #[inline]
    fn filter_pixel_vertical(
        &self,
        temp: &[Pixel],
        rows: usize,
        cols: usize,
        r: usize,
        c: usize,
    ) -> Pixel {
        let (mut acc_r, mut acc_g, mut acc_b) = (0.0f64, 0.0f64, 0.0f64);

        for (&k, &off) in self.kernel_y.iter().zip(self.offsets_y.iter()) {
            let y = (r as isize + off).clamp(0, rows as isize - 1) as usize;
            let p = temp[y * cols + c];
            acc_r += p.r as f64 * k;
            acc_g += p.g as f64 * k;
            acc_b += p.b as f64 * k;
        }

        Pixel::new(to_u8(acc_r), to_u8(acc_g), to_u8(acc_b))
    }

    /// Apply the filter to an image with execution strategy control.
    ///
    /// Performs horizontal filtering into a temporary buffer, then vertical
    /// filtering from that buffer into `dst`. The horizontal pass completes
    /// fully before the vertical pass starts; the vertical pass must only
    /// ever read horizontally filtered values.
    fn apply(
        &self,
        src: &Image,
        dst: &mut Image,
        strategy: ExecutionStrategy,
    ) -> Result<(), ImageError> {
        let rows = src.rows();
        let cols = src.cols();
        let num_pixels = rows * cols;

        let src_data = src.as_slice();
        let dst_data = dst.as_slice_mut();
        let mut temp = vec![Pixel::BLACK; num_pixels];

        if strategy.is_parallel(num_pixels) {
            self.apply_parallel(&mut temp, src_data, dst_data, rows, cols);
        } else {
            self.apply_serial(&mut temp, src_data, dst_data, rows, cols);
        }

        Ok(())
    }

    fn apply_serial(
        &self,
        temp: &mut [Pixel],
        src_data: &[Pixel],
        dst_data: &mut [Pixel],
        rows: usize,
        cols: usize,
    ) {
        // Horizontal
        for r in 0..rows {
            let row_offset = r * cols;
            let src_row = &src_data[row_offset..row_offset + cols];
            for c in 0..cols {
                temp[row_offset + c] = self.filter_pixel_horizontal(src_row, cols, c);
            }
        }

        // Vertical
        for r in 0..rows {
            let row_offset = r * cols;
            for c in 0..cols {
                dst_data[row_offset + c] = self.filter_pixel_vertical(temp, rows, cols, r, c);
            }
        }
    }

    fn apply_parallel(
        &self,
        temp: &mut [Pixel],
        src_data: &[Pixel],
        dst_data: &mut [Pixel],
        rows: usize,
        cols: usize,
    ) {
        // Horizontal (parallel over rows)
        temp.par_chunks_mut(cols)
            .enumerate()
            .for_each(|(r, temp_row)| {
                let row_offset = r * cols;
                let src_row = &src_data[row_offset..row_offset + cols];
                for (c, out) in temp_row.iter_mut().enumerate() {
                    *out = self.filter_pixel_horizontal(src_row, cols, c);
                }
            });

        // Vertical (parallel over rows, reading the now immutable buffer)
        let temp = &*temp;
        dst_data
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(r, dst_row)| {
                for (c, out) in dst_row.iter_mut().enumerate() {
                    *out = self.filter_pixel_vertical(temp, rows, cols, r, c);
                }
            });
    }
}

/// Apply a separable filter with execution strategy control.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image, same size as the source.
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
/// * `strategy` - Execution strategy: `Auto`, `Serial`, or `Parallel`.
///
/// Border taps replicate the nearest edge pixel. The strategy changes only
/// the wall-clock time; serial and parallel execution produce identical
/// output.
pub fn separable_filter_with_strategy(
    src: &Image,
    dst: &mut Image,
    kernel_x: &[f64],
    kernel_y: &[f64],
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if kernel_x.is_empty() || kernel_y.is_empty() {
        return Err(ImageError::InvalidKernelSize(0));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if src.cols() == 0 || src.rows() == 0 {
        return Err(ImageError::InvalidDimensions(src.cols(), src.rows()));
    }

    if src.as_slice().is_empty() {
        return Err(ImageError::EmptyImage);
    }

    // images built from raw parts may declare more pixels than they carry
    let num_pixels = src.cols() * src.rows();
    if src.as_slice().len() != num_pixels {
        return Err(ImageError::InvalidShape(src.as_slice().len(), num_pixels));
    }
    if dst.as_slice().len() != num_pixels {
        return Err(ImageError::InvalidShape(dst.as_slice().len(), num_pixels));
    }

    let filter = SeparableFilter::new(kernel_x, kernel_y);
    filter.apply(src, dst, strategy)
}

/// Apply a separable filter to an image.
///
/// Uses [`ExecutionStrategy::Auto`] (parallel for large images, serial
/// otherwise). For explicit control, use [`separable_filter_with_strategy`].
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image, same size as the source.
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
pub fn separable_filter(
    src: &Image,
    dst: &mut Image,
    kernel_x: &[f64],
    kernel_y: &[f64],
) -> Result<(), ImageError> {
    separable_filter_with_strategy(src, dst, kernel_x, kernel_y, ExecutionStrategy::Auto)
}
