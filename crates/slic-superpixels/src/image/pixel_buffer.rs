//! Owned, bounds-checked RGB8 buffer.

use thiserror::Error;

/// Error type for pixel buffer construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Width or height is zero
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Sample count does not match `3 * width * height`
    #[error("pixel data length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Required byte length
        expected: usize,
        /// Provided byte length
        actual: usize,
    },
    /// `3 * width * height` overflows `usize`
    #[error("image dimensions {width}x{height} are too large")]
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}

/// An image as interleaved 8-bit R, G, B samples in row-major order.
///
/// Pixel `(x, y)` lives at linear index `y * width + x`; its samples occupy
/// bytes `3 * index .. 3 * index + 3`. A buffer is never empty: both
/// dimensions are validated to be non-zero at construction.
///
/// # Example
///
/// ```
/// use slic_superpixels::PixelBuffer;
///
/// let buffer = PixelBuffer::new(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
/// assert_eq!(buffer.pixel_at(1, 0), [0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw interleaved RGB samples.
    ///
    /// Fails if either dimension is zero or `data` is not exactly
    /// `3 * width * height` bytes long.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap samples whose dimensions were already validated.
    pub(crate) fn from_raw_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), 3 * width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a buffer where every pixel has the same color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Result<Self, BufferError> {
        let len = Self::byte_len(width, height)?;
        let data = rgb.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Byte length for the given dimensions, validating them on the way.
    pub fn byte_len(width: usize, height: usize) -> Result<usize, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension { width, height });
        }
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(BufferError::TooLarge { width, height })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Linear pixel index of `(x, y)`.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// The RGB samples of the pixel at linear `index`.
    #[inline]
    pub fn pixel(&self, index: usize) -> [u8; 3] {
        let base = 3 * index;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }

    /// The RGB samples of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel_at(&self, x: usize, y: usize) -> [u8; 3] {
        self.pixel(self.index_of(x, y))
    }

    /// Overwrite the pixel at linear `index`.
    #[inline]
    pub fn set_pixel(&mut self, index: usize, rgb: [u8; 3]) {
        let base = 3 * index;
        self.data[base..base + 3].copy_from_slice(&rgb);
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw samples.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
