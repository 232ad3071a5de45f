use crate::error::ImageError;
use crate::pixel::Pixel;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use blurkit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A two-dimensional RGB image stored as a flat row-major pixel grid.
///
/// The pixel at `(x, y)` lives at index `y * width + x`. The grid is never
/// mutated by the filter operations; they always allocate a fresh output.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    size: ImageSize,
    data: Vec<Pixel>,
}

impl Image {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, row-major.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use blurkit_image::{Image, ImageSize, Pixel};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![Pixel::BLACK; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<Pixel>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidShape(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size, filled with a constant pixel.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The pixel used for every position.
    pub fn from_size_val(size: ImageSize, val: Pixel) -> Result<Self, ImageError> {
        let data = vec![val; size.width * size.height];
        Image::new(size, data)
    }

    /// Create an image from a declared size and pixel data without checking
    /// that the two agree.
    ///
    /// This mirrors call contracts where width and height travel separately
    /// from the grid. The filter operations validate the declared dimensions
    /// and reject empty or mis-sized data before touching any pixel, so an
    /// inconsistent image surfaces as an error there rather than as silent
    /// corruption.
    pub fn from_parts(size: ImageSize, data: Vec<Pixel>) -> Self {
        Self { size, data }
    }

    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The number of columns, same as the width.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The number of rows, same as the height.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.data.get(y * self.size.width + x)
    }

    /// The pixel data as a flat row-major slice.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// The pixel data as a mutable flat row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Consume the image and return the pixel data.
    pub fn into_vec(self) -> Vec<Pixel> {
        self.data
    }
}
