/// Controls how filter passes are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Decide based on the image size: parallel for images with at least
    /// 100K pixels, serial otherwise.
    #[default]
    Auto,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of
    /// parallelization outweighs the benefits.
    Serial,

    /// Split rows across the global Rayon thread pool.
    Parallel,
}

impl ExecutionStrategy {
    /// Pixel count at which `Auto` switches to parallel execution.
    pub const AUTO_PARALLEL_THRESHOLD: usize = 100_000;

    /// Whether this strategy runs in parallel for an image with the given
    /// number of pixels.
    pub fn is_parallel(&self, num_pixels: usize) -> bool {
        match self {
            Self::Auto => num_pixels >= Self::AUTO_PARALLEL_THRESHOLD,
            Self::Serial => false,
            Self::Parallel => true,
        }
    }
}
