//! The centroid grid: seeding, bootstrap assignment and mean updates.
//!
//! Centroids live in a fixed-size array allocated once per run and are
//! addressed by a stable index. The grid is seeded at the cell centers of a
//! [`GridLayout`], bootstrapped by assigning every pixel to the cell it
//! falls in, and afterwards updated from the label map once per iteration.
//!
//! # Empty centroids
//!
//! A centroid can end an assignment sweep without members, for example on
//! images thinner than the grid. Such a centroid is frozen: its previous
//! position and color are kept as they are. No division by zero happens
//! and no NaN can reach the distance metric.

mod centroid;
mod layout;

pub use centroid::{Accumulator, Centroid};
pub use layout::GridLayout;

use crate::color::Rgb;
use crate::image::PixelBuffer;

/// The ordered set of superpixel centroids for one run.
#[derive(Debug, Clone)]
pub struct CentroidGrid {
    layout: GridLayout,
    centroids: Vec<Centroid>,
}

impl CentroidGrid {
    /// Place one centroid at the center of every grid cell, row-major.
    ///
    /// Colors start at zero. Centroids are not moved away from the image
    /// border.
    pub fn seed(layout: GridLayout) -> Self {
        let mut centroids = Vec::with_capacity(layout.len());
        for ny in 0..layout.cells_across_height() {
            for nx in 0..layout.cells_across_width() {
                let (x, y) = layout.cell_center(nx, ny);
                centroids.push(Centroid::new(x, y, Rgb::ZERO));
            }
        }
        Self { layout, centroids }
    }

    /// Assign every pixel to the centroid of its grid cell and set each
    /// centroid's color to the mean of its members.
    ///
    /// Positions keep their seeded values until the first full update.
    /// Returns the bootstrap label map.
    pub fn bootstrap(&mut self, image: &PixelBuffer) -> Vec<u32> {
        let mut labels = Vec::with_capacity(image.len());
        let mut accumulators = vec![Accumulator::default(); self.centroids.len()];

        for y in 0..image.height() {
            for x in 0..image.width() {
                let cell = self.layout.cell_of(x, y);
                accumulators[cell].add(x, y, image.pixel_at(x, y));
                labels.push(cell as u32);
            }
        }

        for (centroid, acc) in self.centroids.iter_mut().zip(&accumulators) {
            if let Some(color) = acc.mean_color() {
                centroid.color = color;
            }
        }

        labels
    }

    /// Rebuild all accumulators from `labels` and replace every non-empty
    /// centroid by the mean of its members.
    ///
    /// Returns the number of centroids that had no members and were left
    /// unchanged.
    pub fn update(&mut self, image: &PixelBuffer, labels: &[u32]) -> usize {
        let accumulators = self.accumulate(image, labels);

        let mut empty = 0;
        for (centroid, acc) in self.centroids.iter_mut().zip(&accumulators) {
            match acc.mean() {
                Some(mean) => *centroid = mean,
                None => empty += 1,
            }
        }
        empty
    }

    /// Sum member positions and colors per centroid in one pass over the
    /// label map.
    pub fn accumulate(&self, image: &PixelBuffer, labels: &[u32]) -> Vec<Accumulator> {
        debug_assert_eq!(labels.len(), image.len());

        let mut accumulators = vec![Accumulator::default(); self.centroids.len()];
        for y in 0..image.height() {
            for x in 0..image.width() {
                let index = image.index_of(x, y);
                accumulators[labels[index] as usize].add(x, y, image.pixel(index));
            }
        }
        accumulators
    }

    #[inline]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[inline]
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    #[inline]
    pub fn get(&self, index: usize) -> &Centroid {
        &self.centroids[index]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    /// Consume the grid, returning the centroid array.
    pub fn into_centroids(self) -> Vec<Centroid> {
        self.centroids
    }
}
