//! In-memory RGB pixel storage.
//!
//! [`PixelBuffer`] is the only image representation the clustering core
//! understands: a width, a height and `3 * width * height` interleaved
//! 8-bit samples. Decoding and encoding files is left to the caller.

mod pixel_buffer;

pub use pixel_buffer::{BufferError, PixelBuffer};
