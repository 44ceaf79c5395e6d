//! Error types for the slic-superpixels public API.
//!
//! [`ConfigError`] covers invalid run parameters and is raised before any
//! clustering state is allocated. [`SegmentError`] wraps it together with
//! [`BufferError`] for convenient `?` propagation in application code.

use crate::image::BufferError;
use thiserror::Error;

/// Invalid clustering parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Requested superpixel count is zero
    #[error("number of superpixels must be positive")]
    ZeroSuperpixels,
    /// Compactness is negative, NaN or infinite
    #[error("compactness must be a finite, non-negative number, got {0}")]
    InvalidCompactness(f32),
    /// Image has a zero dimension
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },
}

/// Unified error type for segmentation.
///
/// # Example
///
/// ```
/// use slic_superpixels::{PixelBuffer, SegmentError, Segmentation, Superpixels};
///
/// fn segment(bytes: Vec<u8>) -> Result<Segmentation, SegmentError> {
///     let image = PixelBuffer::new(2, 2, bytes)?;
///     Superpixels::new(4).segment(&image)
/// }
///
/// assert!(segment(vec![0; 12]).is_ok());
/// assert!(segment(vec![0; 5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentError {
    /// Run parameters are invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Pixel data is malformed
    #[error("pixel buffer error: {0}")]
    Buffer(#[from] BufferError),
}
