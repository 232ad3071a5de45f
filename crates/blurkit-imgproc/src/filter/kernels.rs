/// Create a normalized 1D gaussian kernel.
///
/// The kernel is the discrete gaussian sampled at integer offsets from the
/// center index (`kernel_size / 2`) and renormalized so the weights sum to
/// 1.0, not a continuous-integral approximation.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The standard deviation of the gaussian.
///
/// # Returns
///
/// A vector of `kernel_size` weights summing to 1.0, symmetric around the
/// center. Callers are expected to validate `kernel_size` and `sigma`
/// beforehand; see [`super::gaussian_blur`].
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f64) -> Vec<f64> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let center = (kernel_size / 2) as f64;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f64 - center;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f64>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}
