//! Three-channel color vector.

/// A color with continuous channels on the 0.0..=255.0 scale.
///
/// Used for centroid mean colors. Unlike the raw samples in a
/// [`PixelBuffer`](crate::PixelBuffer), channels are signed floats, so
/// subtracting two colors can never wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel (0.0..=255.0)
    pub r: f32,
    /// Green channel (0.0..=255.0)
    pub g: f32,
    /// Blue channel (0.0..=255.0)
    pub b: f32,
}

impl Rgb {
    /// Black; the starting color of every seeded centroid.
    pub const ZERO: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a color from channel values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Widen an 8-bit sample triple.
    ///
    /// This conversion is required before any color arithmetic: samples
    /// are unsigned magnitudes and must become signed values before they
    /// are subtracted.
    ///
    /// ```
    /// use slic_superpixels::Rgb;
    /// let c = Rgb::from_bytes([255, 0, 128]);
    /// assert_eq!(c.channels(), [255.0, 0.0, 128.0]);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        let [r, g, b] = bytes.map(f32::from);
        Self { r, g, b }
    }

    /// Channels as an array `[r, g, b]`.
    #[inline]
    pub fn channels(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance between two colors.
    #[inline]
    pub fn squared_distance(self, other: Rgb) -> f32 {
        self.channels()
            .iter()
            .zip(other.channels())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    /// Convert to 8-bit samples, clamping and truncating toward zero.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        self.channels().map(|c| c.clamp(0.0, 255.0) as u8)
    }

    /// True when every channel is a finite number.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.channels().iter().all(|c| c.is_finite())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}
