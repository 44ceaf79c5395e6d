//! Centroid snapshots and their running-sum accumulators.

use crate::color::Rgb;

/// The representative of one superpixel: a position and a mean color.
///
/// A `Centroid` is a snapshot. It is only replaced as a whole at the end of
/// an accumulate phase and is never used as scratch space for sums; see
/// [`Accumulator`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Centroid {
    /// Horizontal position in pixel coordinates
    pub x: f32,
    /// Vertical position in pixel coordinates
    pub y: f32,
    /// Mean color of the member pixels
    pub color: Rgb,
}

impl Centroid {
    /// Create a centroid at `(x, y)` with the given color.
    #[inline]
    pub fn new(x: f32, y: f32, color: Rgb) -> Self {
        Self { x, y, color }
    }

    /// True when position and color are all finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.color.is_finite()
    }
}

/// Running sums of member positions and colors for one centroid.
///
/// Sums are kept in `f64`; integer coordinates and 8-bit samples add up
/// exactly, so the mean only rounds once, when it is narrowed to `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Accumulator {
    sum_x: f64,
    sum_y: f64,
    sum_color: [f64; 3],
    count: u32,
}

impl Accumulator {
    /// Add one member pixel.
    #[inline]
    pub fn add(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        self.sum_x += x as f64;
        self.sum_y += y as f64;
        for (sum, sample) in self.sum_color.iter_mut().zip(rgb) {
            *sum += f64::from(sample);
        }
        self.count += 1;
    }

    /// Number of member pixels added so far.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean color of the members, or `None` with no members.
    pub fn mean_color(&self) -> Option<Rgb> {
        if self.is_empty() {
            return None;
        }
        let n = f64::from(self.count);
        let [r, g, b] = self.sum_color.map(|sum| (sum / n) as f32);
        Some(Rgb::new(r, g, b))
    }

    /// Mean position and color of the members, or `None` with no members.
    pub fn mean(&self) -> Option<Centroid> {
        let color = self.mean_color()?;
        let n = f64::from(self.count);
        Some(Centroid::new(
            (self.sum_x / n) as f32,
            (self.sum_y / n) as f32,
            color,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_accumulator_has_no_mean() {
        let acc = Accumulator::default();
        assert!(acc.is_empty());
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.mean_color(), None);
    }

    #[test]
    fn test_mean_of_members() {
        let mut acc = Accumulator::default();
        acc.add(0, 0, [255, 0, 10]);
        acc.add(2, 1, [0, 0, 20]);
        acc.add(1, 2, [0, 255, 30]);

        let mean = acc.mean().unwrap();
        assert_eq!(acc.count(), 3);
        assert_eq!(mean.x, 1.0);
        assert_eq!(mean.y, 1.0);
        assert_eq!(mean.color, Rgb::new(85.0, 85.0, 20.0));
    }

    #[test]
    fn test_large_sums_stay_exact() {
        let mut acc = Accumulator::default();
        for i in 0..100_000 {
            acc.add(i % 1000, i / 1000, [255, 255, 255]);
        }
        assert_eq!(acc.mean_color(), Some(Rgb::new(255.0, 255.0, 255.0)));
    }

    #[test]
    fn test_centroid_is_finite() {
        assert!(Centroid::default().is_finite());
        assert!(!Centroid::new(f32::NAN, 0.0, Rgb::ZERO).is_finite());
    }
}
