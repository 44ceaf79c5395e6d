//! Superpixels builder -- the primary ergonomic entry point for the crate.

use crate::engine::{ClusteringEngine, SlicOptions};
use crate::image::PixelBuffer;
use crate::output::Segmentation;

use super::SegmentError;

/// High-level superpixel segmentation builder.
///
/// # Design
///
/// - Constructor takes the requested superpixel count; everything else has
///   a default (compactness 5.0, no iteration cap)
/// - Configuration methods consume and return `self`
/// - [`segment()`](Self::segment) takes `&self`, so one builder can be
///   reused across images
/// - Parameters are validated on every `segment()` call, before any
///   per-image state is allocated
///
/// # Example
///
/// ```
/// use slic_superpixels::{PixelBuffer, Superpixels};
///
/// let image = PixelBuffer::filled(16, 16, [40, 80, 120]).unwrap();
/// let segmentation = Superpixels::new(16)
///     .compactness(10.0)
///     .max_iterations(20)
///     .segment(&image)
///     .unwrap();
///
/// let output = segmentation.render();
/// assert_eq!(output.width(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct Superpixels {
    options: SlicOptions,
}

impl Superpixels {
    /// Create a builder requesting `num_superpixels` regions.
    pub fn new(num_superpixels: u32) -> Self {
        Self {
            options: SlicOptions::new().num_superpixels(num_superpixels),
        }
    }

    /// Create a builder from complete options.
    pub fn with_options(options: SlicOptions) -> Self {
        Self { options }
    }

    /// Set the compactness weight.
    #[inline]
    pub fn compactness(mut self, compactness: f32) -> Self {
        self.options = self.options.compactness(compactness);
        self
    }

    /// Cap the number of assignment sweeps; `0` means no cap.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.options = self.options.max_iterations(max_iterations);
        self
    }

    /// The options this builder will run with.
    #[inline]
    pub fn options(&self) -> &SlicOptions {
        &self.options
    }

    /// Cluster `image` into superpixels.
    pub fn segment(&self, image: &PixelBuffer) -> Result<Segmentation, SegmentError> {
        let engine = ClusteringEngine::new(image, self.options.clone())?;
        Ok(engine.run())
    }

    /// Cluster `image` and return the recolored copy alongside the
    /// segmentation.
    pub fn segment_and_render(
        &self,
        image: &PixelBuffer,
    ) -> Result<(Segmentation, PixelBuffer), SegmentError> {
        let segmentation = self.segment(image)?;
        let rendered = segmentation.render();
        Ok((segmentation, rendered))
    }
}

impl Default for Superpixels {
    fn default() -> Self {
        Self::with_options(SlicOptions::default())
    }
}
