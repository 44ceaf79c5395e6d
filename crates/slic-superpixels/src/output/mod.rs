//! Output types for the clustering pipeline.
//!
//! [`Segmentation`] stores the final label map and centroid records. The
//! flattened, recolored image is produced on demand by
//! [`Segmentation::render`].

mod segmentation;

pub use segmentation::{Segmentation, Termination};
