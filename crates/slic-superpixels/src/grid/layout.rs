//! Seed grid geometry.

use crate::api::ConfigError;

/// Geometry of the regular seed grid.
///
/// For a requested superpixel count `K` the grid has
/// `floor(sqrt(K))` cells across the width and `K / floor(sqrt(K))` cells
/// across the height (integer division). The product can be smaller than
/// `K` and the grid can be non-square; both are accepted as is.
///
/// # Example
///
/// ```
/// use slic_superpixels::GridLayout;
///
/// let layout = GridLayout::new(100, 50, 10).unwrap();
/// assert_eq!(layout.cells_across_width(), 3);
/// assert_eq!(layout.cells_across_height(), 3);
/// assert_eq!(layout.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    image_width: usize,
    image_height: usize,
    cells_across_width: usize,
    cells_across_height: usize,
    cell_width: f32,
    cell_height: f32,
}

impl GridLayout {
    /// Derive the grid for an image of `width` x `height` pixels and
    /// `num_superpixels` requested superpixels.
    pub fn new(width: usize, height: usize, num_superpixels: u32) -> Result<Self, ConfigError> {
        if num_superpixels == 0 {
            return Err(ConfigError::ZeroSuperpixels);
        }
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }

        let cells_across_width = integer_sqrt(num_superpixels) as usize;
        let cells_across_height = num_superpixels as usize / cells_across_width;

        Ok(Self {
            image_width: width,
            image_height: height,
            cells_across_width,
            cells_across_height,
            cell_width: width as f32 / cells_across_width as f32,
            cell_height: height as f32 / cells_across_height as f32,
        })
    }

    /// Number of centroids (`cells_across_width * cells_across_height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells_across_width * self.cells_across_height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn cells_across_width(&self) -> usize {
        self.cells_across_width
    }

    #[inline]
    pub fn cells_across_height(&self) -> usize {
        self.cells_across_height
    }

    /// Width of one grid cell in pixels (expected centroid spacing on x).
    #[inline]
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Height of one grid cell in pixels (expected centroid spacing on y).
    #[inline]
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Width of the image the grid covers.
    #[inline]
    pub fn image_width(&self) -> usize {
        self.image_width
    }

    #[inline]
    pub fn image_height(&self) -> usize {
        self.image_height
    }

    /// Center of cell `(nx, ny)`, where its centroid is seeded.
    #[inline]
    pub fn cell_center(&self, nx: usize, ny: usize) -> (f32, f32) {
        (
            (nx as f32 + 0.5) * self.cell_width,
            (ny as f32 + 0.5) * self.cell_height,
        )
    }

    /// Row-major index of the cell that pixel `(x, y)` falls in.
    ///
    /// Clamped into the grid so float rounding near the right or bottom
    /// edge can never yield an out-of-range index.
    #[inline]
    pub fn cell_of(&self, x: usize, y: usize) -> usize {
        let nx = ((x as f32 / self.cell_width) as usize).min(self.cells_across_width - 1);
        let ny = ((y as f32 / self.cell_height) as usize).min(self.cells_across_height - 1);
        ny * self.cells_across_width + nx
    }
}

/// `floor(sqrt(n))`, exact for every `u32`.
fn integer_sqrt(n: u32) -> u32 {
    let n = u64::from(n);
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root as u32
}
