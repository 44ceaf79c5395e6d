//! Superpix - SLIC superpixel segmentation
//!
//! PPM codec, configuration, reporting and the segmentation pipeline
//! around the `slic-superpixels` engine.
//! This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
