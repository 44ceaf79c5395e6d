//! Segmentation result and the recoloring pass.

use crate::grid::Centroid;
use crate::image::PixelBuffer;

/// Why the clustering loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A full sweep reassigned no pixel.
    Converged,
    /// The iteration cap was reached first.
    IterationLimit,
}

/// The canonical output of a clustering run.
///
/// Holds one centroid index per pixel in row-major order and the final
/// centroid records. Every label is a valid index into
/// [`centroids()`](Segmentation::centroids).
///
/// # Example
///
/// ```
/// use slic_superpixels::{PixelBuffer, Superpixels};
///
/// let image = PixelBuffer::filled(4, 4, [255, 0, 0]).unwrap();
/// let segmentation = Superpixels::new(4).segment(&image).unwrap();
///
/// assert_eq!(segmentation.labels().len(), 16);
/// assert_eq!(segmentation.render(), image);
/// ```
///
/// Segmentations come out of the engine only; they cannot be assembled
/// from arbitrary labels:
///
/// ```compile_fail
/// use slic_superpixels::{Segmentation, Termination};
///
/// let bogus = Segmentation::new(2, 1, vec![0, 5], Vec::new(), 0, Termination::Converged, 0);
/// ```
#[derive(Debug, Clone)]
pub struct Segmentation {
    width: usize,
    height: usize,
    labels: Vec<u32>,
    centroids: Vec<Centroid>,
    iterations: u32,
    termination: Termination,
    empty_clusters: usize,
}

impl Segmentation {
    /// Assemble a segmentation from engine state.
    ///
    /// Only the engine builds these, so `labels.len() == width * height`
    /// and every label indexes into `centroids`.
    pub(crate) fn new(
        width: usize,
        height: usize,
        labels: Vec<u32>,
        centroids: Vec<Centroid>,
        iterations: u32,
        termination: Termination,
        empty_clusters: usize,
    ) -> Self {
        debug_assert_eq!(labels.len(), width * height);
        debug_assert!(labels.iter().all(|&l| (l as usize) < centroids.len()));
        Self {
            width,
            height,
            labels,
            centroids,
            iterations,
            termination,
            empty_clusters,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Owning centroid index of every pixel, row-major.
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Final centroid records, indexed by label.
    #[inline]
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    /// Completed assignment sweeps, not counting the bootstrap pass.
    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[inline]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    #[inline]
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Centroids that ended without members and kept their last values.
    #[inline]
    pub fn empty_clusters(&self) -> usize {
        self.empty_clusters
    }

    /// Label of the pixel at `(x, y)`.
    #[inline]
    pub fn label_at(&self, x: usize, y: usize) -> u32 {
        self.labels[y * self.width + x]
    }

    /// Number of pixels owned by each centroid.
    pub fn member_counts(&self) -> Vec<u32> {
        let mut counts = vec![0; self.centroids.len()];
        for &label in &self.labels {
            counts[label as usize] += 1;
        }
        counts
    }

    /// Paint every pixel with the mean color of its centroid.
    ///
    /// Mean colors are truncated to 8 bits.
    pub fn render(&self) -> PixelBuffer {
        let palette: Vec<[u8; 3]> = self.centroids.iter().map(|c| c.color.to_bytes()).collect();
        let data = self
            .labels
            .iter()
            .flat_map(|&label| palette[label as usize])
            .collect();
        PixelBuffer::from_raw_parts(self.width, self.height, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::color::Rgb;

    fn two_region() -> Segmentation {
        let centroids = vec![
            Centroid::new(0.5, 0.0, Rgb::new(255.0, 0.0, 0.0)),
            Centroid::new(2.0, 0.0, Rgb::new(10.4, 20.6, 30.5)),
        ];
        Segmentation::new(3, 1, vec![0, 0, 1], centroids, 2, Termination::Converged, 0)
    }

    #[test]
    fn test_accessors() {
        let seg = two_region();
        assert_eq!(seg.width(), 3);
        assert_eq!(seg.height(), 1);
        assert_eq!(seg.label_at(2, 0), 1);
        assert_eq!(seg.iterations(), 2);
        assert!(seg.converged());
        assert_eq!(seg.member_counts(), vec![2, 1]);
    }

    #[test]
    fn test_render_paints_truncated_means() {
        let rendered = two_region().render();
        assert_eq!(
            rendered.as_bytes(),
            &[255, 0, 0, 255, 0, 0, 10, 20, 30]
        );
    }
}
