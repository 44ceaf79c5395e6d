//! Clustering run parameters.

use std::num::NonZeroU32;

use crate::api::ConfigError;

/// Default requested superpixel count.
pub const DEFAULT_NUM_SUPERPIXELS: u32 = 1000;

/// Default compactness weight.
pub const DEFAULT_COMPACTNESS: f32 = 5.0;

/// Parameters for one clustering run.
///
/// # Defaults
///
/// - `num_superpixels`: 1000
/// - `compactness`: 5.0
/// - `max_iterations`: none (iterate until no pixel changes owner)
#[derive(Debug, Clone, PartialEq)]
pub struct SlicOptions {
    /// Requested superpixel count `K`. The grid may end up with fewer
    /// centroids, see [`GridLayout`](crate::GridLayout).
    pub num_superpixels: u32,

    /// Weight of the color term in the distance metric.
    pub compactness: f32,

    /// Upper bound on assignment sweeps. `None` means no cap.
    ///
    /// The bootstrap pass is not counted; a cap of `n` allows at most `n`
    /// full sweeps, and at least one sweep always runs.
    pub max_iterations: Option<NonZeroU32>,
}

impl Default for SlicOptions {
    fn default() -> Self {
        Self {
            num_superpixels: DEFAULT_NUM_SUPERPIXELS,
            compactness: DEFAULT_COMPACTNESS,
            max_iterations: None,
        }
    }
}

impl SlicOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested superpixel count.
    #[inline]
    pub fn num_superpixels(mut self, k: u32) -> Self {
        self.num_superpixels = k;
        self
    }

    /// Set the compactness weight.
    #[inline]
    pub fn compactness(mut self, m: f32) -> Self {
        self.compactness = m;
        self
    }

    /// Set the sweep cap; `0` removes it.
    #[inline]
    pub fn max_iterations(mut self, n: u32) -> Self {
        self.max_iterations = NonZeroU32::new(n);
        self
    }

    /// Check parameters that do not depend on the image.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_superpixels == 0 {
            return Err(ConfigError::ZeroSuperpixels);
        }
        if !self.compactness.is_finite() || self.compactness < 0.0 {
            return Err(ConfigError::InvalidCompactness(self.compactness));
        }
        Ok(())
    }

    /// Whether `iterations` completed sweeps have reached the cap.
    #[inline]
    pub fn cap_reached(&self, iterations: u32) -> bool {
        self.max_iterations
            .is_some_and(|cap| iterations >= cap.get())
    }
}
