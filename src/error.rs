use std::path::PathBuf;

use slic_superpixels::BufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PpmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a binary PPM file (expected P6 magic)")]
    BadMagic,

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported max sample value: {0} (expected 1..=255)")]
    UnsupportedMaxValue(u32),

    #[error("Truncated pixel data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("Invalid image: {0}")]
    Buffer(#[from] BufferError),

    #[error("Image too large to encode: {width}x{height}")]
    TooLarge { width: usize, height: usize },
}

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_error_bad_magic() {
        let error = PpmError::BadMagic;
        assert_eq!(
            error.to_string(),
            "Not a binary PPM file (expected P6 magic)"
        );
    }

    #[test]
    fn test_ppm_error_too_large() {
        let error = PpmError::TooLarge {
            width: 70_000,
            height: 1,
        };
        assert_eq!(
            error.to_string(),
            "Image too large to encode: 70000x1"
        );
    }

    #[test]
    fn test_ppm_error_unsupported_max_value() {
        let error = PpmError::UnsupportedMaxValue(65535);
        assert_eq!(
            error.to_string(),
            "Unsupported max sample value: 65535 (expected 1..=255)"
        );
    }

    #[test]
    fn test_ppm_error_truncated() {
        let error = PpmError::Truncated {
            expected: 48,
            actual: 12,
        };
        assert_eq!(
            error.to_string(),
            "Truncated pixel data: expected 48 bytes, got 12"
        );
    }

    #[test]
    fn test_ppm_error_from_buffer_error() {
        let error: PpmError = BufferError::ZeroDimension {
            width: 0,
            height: 4,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Invalid image: image dimensions must be non-zero, got 0x4"
        );
    }

    #[test]
    fn test_ppm_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: PpmError = io.into();
        match error {
            PpmError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_config_file_error_read() {
        let error = ConfigFileError::Read {
            path: PathBuf::from("/etc/superpix.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read config file /etc/superpix.yaml: not found"
        );
    }
}
