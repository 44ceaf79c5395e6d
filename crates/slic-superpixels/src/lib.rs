//! slic-superpixels: SLIC-style superpixel clustering
//!
//! This library partitions an RGB image into compact, color-coherent
//! regions by iteratively clustering pixels around a regular grid of seed
//! centroids. Each centroid only competes for pixels inside a local window,
//! so one iteration costs O(pixels) no matter how many superpixels are
//! requested.
//!
//! # Quick Start
//!
//! The [`Superpixels`] builder is the primary entry point:
//!
//! ```
//! use slic_superpixels::{PixelBuffer, Superpixels};
//!
//! let image = PixelBuffer::filled(32, 32, [200, 40, 40]).unwrap();
//! let segmentation = Superpixels::new(16).compactness(5.0).segment(&image).unwrap();
//!
//! // One centroid index per pixel
//! assert_eq!(segmentation.labels().len(), 32 * 32);
//!
//! // Every pixel painted with its superpixel's mean color
//! let output = segmentation.render();
//! assert_eq!(output, image);
//! ```
//!
//! # Stepping the Engine
//!
//! [`ClusteringEngine`] exposes the individual phases for callers that
//! want to observe intermediate state:
//!
//! ```
//! use slic_superpixels::{ClusteringEngine, EngineState, PixelBuffer, SlicOptions};
//!
//! let image = PixelBuffer::filled(8, 8, [0, 0, 0]).unwrap();
//! let mut engine = ClusteringEngine::new(&image, SlicOptions::new().num_superpixels(4)).unwrap();
//!
//! let reassigned = engine.sweep();
//! engine.update_centroids();
//! assert_eq!(reassigned, 0);
//! assert_eq!(engine.state(), EngineState::Running);
//! ```
//!
//! # Algorithm
//!
//! ```text
//! PixelBuffer
//!     |
//!     v
//! GridLayout            floor(sqrt(K)) x (K / floor(sqrt(K))) cells
//!     |
//!     v
//! seed + bootstrap      centroids at cell centers, pixels labeled by cell,
//!     |                 centroid colors = cell mean colors
//!     v
//! initial distances     distance of every pixel to its bootstrap centroid
//!     |
//!     v
//! ╔═════════════════════════════════════════════╗
//! ║  Iteration                                  ║
//! ║                                             ║
//! ║  for each centroid (index order):           ║
//! ║      for each pixel in its search window:   ║
//! ║          d = metric(centroid, pixel)        ║
//! ║          if d < distance[pixel]:            ║
//! ║              label[pixel] = centroid        ║
//! ║              distance[pixel] = d            ║
//! ║                                             ║
//! ║  centroid = mean of its members             ║
//! ║  (members-less centroids keep old values)   ║
//! ╚═════════════════════════════════════════════╝
//!     |   until no label changed, or the cap
//!     v
//! Segmentation          labels + centroids, render() recolors
//! ```
//!
//! ## Distance Metric
//!
//! ```text
//! d = compactness * |rgb - centroid.rgb|^2 / (3 * 255^2)
//!   + |xy - centroid.xy|^2 / (cell_width^2 + cell_height^2)
//! ```
//!
//! See [`DistanceMetric`].
//!
//! ## Known Approximations
//!
//! - The grid may hold fewer than `K` centroids and need not be square.
//! - Seeds are not moved away from the image border.
//! - The stored distance of a pixel is only ever lowered, never refreshed
//!   after its centroid moves; this is what guarantees termination.
//! - No connectivity post-pass: a superpixel may consist of several
//!   disconnected pieces.

pub mod api;
pub mod color;
pub mod engine;
pub mod grid;
pub mod image;
pub mod metric;
pub mod output;


pub use api::{ConfigError, SegmentError, Superpixels};
pub use color::Rgb;
pub use engine::{ClusteringEngine, EngineState, SearchWindow, SlicOptions};
pub use grid::{Accumulator, Centroid, CentroidGrid, GridLayout};
pub use image::{BufferError, PixelBuffer};
pub use metric::{DistanceMetric, COLOR_FACTOR};
pub use output::{Segmentation, Termination};
