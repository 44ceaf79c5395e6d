//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use slic_superpixels::PixelBuffer;
use superpix::codec::ppm;

/// Colors used across scenarios
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const GREEN: [u8; 3] = [0, 200, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
}

/// 4x4 image, every pixel pure red
pub fn solid_red() -> PixelBuffer {
    PixelBuffer::filled(4, 4, colors::RED).unwrap()
}

/// 2x2 image: red above the anti-diagonal, one blue pixel below it
pub fn diagonal_split() -> PixelBuffer {
    use colors::{BLUE, RED};
    PixelBuffer::new(2, 2, [RED, RED, RED, BLUE].concat()).unwrap()
}

/// Left half one color, right half another
pub fn two_halves(width: usize, height: usize, left: [u8; 3], right: [u8; 3]) -> PixelBuffer {
    let mut image = PixelBuffer::filled(width, height, left).unwrap();
    for y in 0..height {
        for x in width / 2..width {
            let index = image.index_of(x, y);
            image.set_pixel(index, right);
        }
    }
    image
}

/// Smooth diagonal gradient
pub fn gradient(width: usize, height: usize) -> PixelBuffer {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            data.extend_from_slice(&[r, g, 128]);
        }
    }
    PixelBuffer::new(width, height, data).unwrap()
}

/// Deterministic noise (64-bit LCG), slow to converge
pub fn noise(width: usize, height: usize, seed: u64) -> PixelBuffer {
    let mut state = seed;
    let data = (0..width * height * 3)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect();
    PixelBuffer::new(width, height, data).unwrap()
}

/// Write `image` as a PPM file inside `dir`
pub fn write_image(dir: &Path, name: &str, image: &PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    ppm::save(image, &path).unwrap();
    path
}

/// Write raw bytes to a file inside `dir`
pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Write a YAML config file inside `dir`
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    write_bytes(dir, "superpix.yaml", yaml.as_bytes())
}
