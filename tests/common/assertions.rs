//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

use slic_superpixels::PixelBuffer;
use superpix::codec::ppm;

/// Assert the file at `path` is a binary PPM with the expected dimensions
pub fn assert_ppm_file(path: &Path, width: usize, height: usize) -> PixelBuffer {
    assert!(path.exists(), "Expected {} to exist", path.display());

    let bytes = std::fs::read(path).unwrap();
    assert!(
        bytes.starts_with(b"P6"),
        "Expected a binary PPM, file starts with {:?}",
        String::from_utf8_lossy(&bytes[..2.min(bytes.len())])
    );

    let image = ppm::load(path).unwrap();
    assert_eq!((image.width(), image.height()), (width, height));
    image
}

/// Assert two images are identical, reporting the first differing pixel
pub fn assert_same_pixels(actual: &PixelBuffer, expected: &PixelBuffer) {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height()),
        "Image dimensions differ"
    );
    for index in 0..expected.len() {
        assert_eq!(
            actual.pixel(index),
            expected.pixel(index),
            "Pixel {} differs",
            index
        );
    }
}

/// Assert every pixel in the rectangle has the same color, returning it
pub fn assert_uniform_region(
    image: &PixelBuffer,
    xs: std::ops::Range<usize>,
    ys: std::ops::Range<usize>,
) -> [u8; 3] {
    let first = image.pixel_at(xs.start, ys.start);
    for y in ys {
        for x in xs.clone() {
            assert_eq!(
                image.pixel_at(x, y),
                first,
                "Pixel ({}, {}) differs from region color",
                x,
                y
            );
        }
    }
    first
}
