//! Continuous color values for centroid means.
//!
//! Pixel samples are unsigned 8-bit values, but every computation on them
//! (differences, sums, means) happens on [`Rgb`], whose channels are `f32`.
//! The widening from `u8` is done in exactly one place,
//! [`Rgb::from_bytes`], so no unsigned arithmetic ever touches a color
//! difference.

mod rgb;

pub use rgb::Rgb;
