//! Image file formats.

pub mod ppm;

pub use ppm::{load, read_ppm, save, write_ppm};
