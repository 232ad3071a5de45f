/// A single RGB pixel with 8-bit channels.
///
/// Channels are independent intensities in the range `0..=255`. The type is
/// `Copy` and is stored by value inside [`crate::Image`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    /// Red channel intensity.
    pub r: u8,
    /// Green channel intensity.
    pub g: u8,
    /// Blue channel intensity.
    pub b: u8,
}

impl Pixel {
    /// Create a new pixel from its channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A black pixel.
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    /// A white pixel.
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);
}

impl From<[u8; 3]> for Pixel {
    fn from(rgb: [u8; 3]) -> Self {
        Pixel::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(p: Pixel) -> Self {
        [p.r, p.g, p.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_roundtrip() {
        let p = Pixel::from([1, 2, 3]);
        assert_eq!(p, Pixel::new(1, 2, 3));
        assert_eq!(<[u8; 3]>::from(p), [1, 2, 3]);
    }

    #[test]
    fn test_pixel_default_is_black() {
        assert_eq!(Pixel::default(), Pixel::BLACK);
    }
}
