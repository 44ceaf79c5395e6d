//! Local search window around a centroid.

use crate::grid::{Centroid, GridLayout};

/// Inclusive pixel rectangle a centroid competes for during one sweep.
///
/// The window spans one cell width left and right of the centroid and one
/// cell height above and below it, clamped to the image on every side.
/// This keeps each sweep at O(pixels) regardless of the superpixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
}

impl SearchWindow {
    /// Window around `centroid`, clamped to the image the layout was
    /// derived for.
    pub fn around(centroid: &Centroid, layout: &GridLayout) -> Self {
        let (min_x, max_x) = clamp_span(centroid.x, layout.cell_width(), layout.image_width());
        let (min_y, max_y) = clamp_span(centroid.y, layout.cell_height(), layout.image_height());
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// `[center - reach, center + reach]` floored to pixel indices and clamped
/// to `0..=extent - 1`. Both ends are clamped independently.
fn clamp_span(center: f32, reach: f32, extent: usize) -> (usize, usize) {
    let last = extent - 1;
    let lo = (center - reach).floor().max(0.0) as usize;
    let hi = (center + reach).floor().max(0.0) as usize;
    (lo.min(last), hi.min(last))
}
