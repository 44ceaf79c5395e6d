//! Combined color and spatial distance between a centroid and a pixel.
//!
//! ```text
//! deltaC   = |pixel - centroid.color|^2 * COLOR_FACTOR
//! deltaD   = ((x - cx)^2 + (y - cy)^2)  * spatial_factor
//! distance = compactness * deltaC + deltaD
//! ```
//!
//! `COLOR_FACTOR` normalizes the color term to 0..=1 over the full RGB
//! cube. `spatial_factor` is `1 / (cell_width^2 + cell_height^2)`, so the
//! spatial term is measured relative to the expected centroid spacing and
//! does not depend on image size. `compactness` weights the color term
//! against the spatial term.

use crate::color::Rgb;
use crate::grid::{Centroid, GridLayout};

/// `1 / (3 * 255^2)`: the inverse of the largest possible squared RGB
/// distance.
pub const COLOR_FACTOR: f32 = 1.0 / (3.0 * 255.0 * 255.0);

/// Distance metric with normalization factors fixed for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMetric {
    spatial_factor: f32,
    compactness: f32,
}

impl DistanceMetric {
    /// Derive the spatial normalization from the grid geometry.
    pub fn new(layout: &GridLayout, compactness: f32) -> Self {
        let cw = layout.cell_width();
        let ch = layout.cell_height();
        Self {
            spatial_factor: 1.0 / (cw * cw + ch * ch),
            compactness,
        }
    }

    #[inline]
    pub fn spatial_factor(&self) -> f32 {
        self.spatial_factor
    }

    #[inline]
    pub fn compactness(&self) -> f32 {
        self.compactness
    }

    /// Cost of assigning the pixel at `(x, y)` with samples `rgb` to
    /// `centroid`. Never negative for non-negative factors.
    #[inline]
    pub fn distance(&self, centroid: &Centroid, x: usize, y: usize, rgb: [u8; 3]) -> f32 {
        let delta_c = Rgb::from_bytes(rgb).squared_distance(centroid.color) * COLOR_FACTOR;

        let dx = x as f32 - centroid.x;
        let dy = y as f32 - centroid.y;
        let delta_d = (dx * dx + dy * dy) * self.spatial_factor;

        self.compactness * delta_c + delta_d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric() -> DistanceMetric {
        // 4x4 image, 4 superpixels -> 2x2 cells -> spatial factor 1/8
        let layout = GridLayout::new(4, 4, 4).unwrap();
        DistanceMetric::new(&layout, 5.0)
    }

    #[test]
    fn test_spatial_factor_from_layout() {
        assert_eq!(metric().spatial_factor(), 0.125);
        assert_eq!(metric().compactness(), 5.0);
    }

    #[test]
    fn test_zero_at_centroid() {
        let centroid = Centroid::new(1.0, 2.0, Rgb::new(10.0, 20.0, 30.0));
        assert_eq!(metric().distance(&centroid, 1, 2, [10, 20, 30]), 0.0);
    }

    #[test]
    fn test_spatial_term_only() {
        let centroid = Centroid::new(0.0, 0.0, Rgb::new(50.0, 50.0, 50.0));
        let d = metric().distance(&centroid, 2, 2, [50, 50, 50]);
        assert!((d - 8.0 * 0.125).abs() < 1e-6);
    }

    #[test]
    fn test_color_term_is_normalized() {
        let centroid = Centroid::new(3.0, 3.0, Rgb::ZERO);
        let d = metric().distance(&centroid, 3, 3, [255, 255, 255]);
        // Maximal color difference equals compactness
        assert!((d - 5.0).abs() < 1e-5, "got {}", d);
    }

    #[test]
    fn test_high_samples_do_not_wrap() {
        // A centroid brighter than the pixel must give the same cost as
        // the mirrored case
        let bright = Centroid::new(0.0, 0.0, Rgb::new(250.0, 250.0, 250.0));
        let dark = Centroid::new(0.0, 0.0, Rgb::new(5.0, 5.0, 5.0));
        let m = metric();
        let a = m.distance(&bright, 0, 0, [5, 5, 5]);
        let b = m.distance(&dark, 0, 0, [250, 250, 250]);
        assert_eq!(a, b);
        assert!(a > 0.0);
    }

    #[test]
    fn test_compactness_scales_color_only() {
        let layout = GridLayout::new(4, 4, 4).unwrap();
        let loose = DistanceMetric::new(&layout, 1.0);
        let tight = DistanceMetric::new(&layout, 10.0);
        let centroid = Centroid::new(0.0, 0.0, Rgb::ZERO);

        let gray = Centroid::new(0.0, 0.0, Rgb::new(9.0, 9.0, 9.0));
        let spatial = loose.distance(&gray, 1, 1, [9, 9, 9]);
        let l = loose.distance(&centroid, 1, 1, [100, 0, 0]);
        let t = tight.distance(&centroid, 1, 1, [100, 0, 0]);

        assert!(((t - spatial) - 10.0 * (l - spatial)).abs() < 1e-5);
    }
}
