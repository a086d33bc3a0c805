// MIT/Apache2 License

use crate::Color;

/// Bytes per pixel: red, green, blue and alpha, in that order.
pub const QUANTUM: usize = 4;

/// A client-side image: a block of pixel data the program owns and can read directly.
///
/// `Image`s are produced by taking a snapshot of a [`Surface`] once a gradient has been drawn onto it, and are
/// then shared by the [`Fill`]s handed out to callers. Pixels are stored row by row, starting at the top left
/// corner, with no padding between rows. Every pixel is four bytes of unpremultiplied RGBA.
///
/// [`Surface`]: crate::Surface
/// [`Fill`]: crate::Fill
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    width: u32,
    height: u32,
    // invariant: len == width * height * QUANTUM
    bytes: Vec<u8>,
}

impl Image {
    /// Create a new `Image` from raw RGBA pixel data. Returns `None` if the length of `bytes` does not match
    /// the dimensions.
    #[inline]
    pub fn new(width: u32, height: u32, bytes: Vec<u8>) -> Option<Image> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(QUANTUM)?;
        if bytes.len() == expected {
            Some(Image {
                width,
                height,
                bytes,
            })
        } else {
            None
        }
    }

    /// The width of the image, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height of the image, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw pixel data.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the raw pixel data out of the `Image`.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Get the color of the pixel at the given coordinates, or `None` if they are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let start = (y as usize * self.width as usize + x as usize) * QUANTUM;
        let px = &self.bytes[start..start + QUANTUM];
        Some(Color::from_rgba8(px[0], px[1], px[2], px[3]))
    }

    /// Iterate over the pixels of this image, row by row.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(QUANTUM)
    }
}
