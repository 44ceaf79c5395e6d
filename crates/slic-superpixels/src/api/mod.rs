//! Public API for the slic-superpixels crate.
//!
//! This module provides the high-level API: the [`Superpixels`] builder and
//! the [`SegmentError`] / [`ConfigError`] error types.

mod builder;
mod error;

pub use builder::Superpixels;
pub use error::{ConfigError, SegmentError};
