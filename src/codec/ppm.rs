//! Binary PPM (P6) reader and writer.
//!
//! Header parsing and encoding go through the `image` crate's PNM codec.
//! Only the binary pixmap subtype is accepted; ASCII pixmaps and the other
//! PNM formats are rejected as a bad magic. Trailing bytes after the
//! samples are ignored.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageEncoder};
use slic_superpixels::PixelBuffer;

use crate::error::PpmError;

const MAGIC: &[u8; 2] = b"P6";

/// Decode a P6 image from raw file contents.
///
/// Samples are rescaled to the full 0..=255 range when the file's max
/// value is below 255.
pub fn read_ppm(bytes: &[u8]) -> Result<PixelBuffer, PpmError> {
    if !bytes.starts_with(MAGIC) {
        return Err(PpmError::BadMagic);
    }

    let decoder = PnmDecoder::new(bytes)?;
    if !matches!(
        decoder.subtype(),
        PnmSubtype::Pixmap(SampleEncoding::Binary)
    ) {
        return Err(PpmError::BadMagic);
    }

    let (width, height) = decoder.dimensions();
    let (width, height) = (width as usize, height as usize);
    let expected = PixelBuffer::byte_len(width, height)?;

    let (body, header) = decoder.into_inner();
    let max_value = header.maximal_sample();
    if max_value == 0 || max_value > 255 {
        return Err(PpmError::UnsupportedMaxValue(max_value));
    }
    if body.len() < expected {
        return Err(PpmError::Truncated {
            expected,
            actual: body.len(),
        });
    }

    let decoded = DynamicImage::from_decoder(PnmDecoder::new(bytes)?)?.to_rgb8();
    Ok(PixelBuffer::new(width, height, decoded.into_raw())?)
}

/// Load a P6 image from disk.
pub fn load(path: impl AsRef<Path>) -> Result<PixelBuffer, PpmError> {
    let path = path.as_ref();
    let image = read_ppm(&std::fs::read(path)?)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded PPM"
    );
    Ok(image)
}

/// Encode `image` as P6 with a max value of 255.
pub fn write_ppm<W: Write>(mut writer: W, image: &PixelBuffer) -> Result<(), PpmError> {
    let too_large = || PpmError::TooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    PnmEncoder::new(&mut writer)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(image.as_bytes(), width, height, ExtendedColorType::Rgb8)?;
    writer.flush()?;
    Ok(())
}

/// Save `image` to disk as P6, replacing any existing file.
pub fn save(image: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), PpmError> {
    let file = File::create(path.as_ref())?;
    write_ppm(BufWriter::new(file), image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn encode(image: &PixelBuffer) -> Vec<u8> {
        let mut out = Vec::new();
        write_ppm(&mut out, image).unwrap();
        out
    }

    #[test]
    fn test_write_binary_pixmap() {
        let image = PixelBuffer::new(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let bytes = encode(&image);

        assert!(bytes.starts_with(b"P6"));
        assert_eq!(&bytes[bytes.len() - 6..], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_read_written_image() {
        let image = PixelBuffer::new(3, 2, (0..18).collect()).unwrap();
        let decoded = read_ppm(&encode(&image)).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_read_accepts_comments_and_newline_separated_fields() {
        let mut bytes = b"P6\n# created by hand\n2\n# width above\n1\n255\n".to_vec();
        bytes.extend_from_slice(&[255, 0, 0, 0, 0, 255]);

        let image = read_ppm(&bytes).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.pixel(1), [0, 0, 255]);
    }

    #[test]
    fn test_separator_is_a_single_byte() {
        // A sample value of 10 is '\n'; it must not be eaten as whitespace.
        let mut bytes = b"P6 1 1 255\n".to_vec();
        bytes.extend_from_slice(&[10, 32, 9]);

        let image = read_ppm(&bytes).unwrap();
        assert_eq!(image.pixel(0), [10, 32, 9]);
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let mut bytes = b"P6 1 1 255\n".to_vec();
        bytes.extend_from_slice(&[1, 2, 3, 99, 99]);

        let image = read_ppm(&bytes).unwrap();
        assert_eq!(image.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_low_max_value_is_rescaled() {
        let mut bytes = b"P6 2 1 15\n".to_vec();
        bytes.extend_from_slice(&[0, 15, 7, 15, 0, 8]);

        let image = read_ppm(&bytes).unwrap();
        assert_eq!(image.as_bytes(), &[0, 255, 119, 255, 0, 136]);
    }

    #[test]
    fn test_rejects_other_pnm_formats() {
        assert!(matches!(
            read_ppm(b"P3 1 1 255\n0 0 0"),
            Err(PpmError::BadMagic)
        ));
        assert!(matches!(
            read_ppm(b"P5 1 1 255\n\x00"),
            Err(PpmError::BadMagic)
        ));
        assert!(matches!(read_ppm(b""), Err(PpmError::BadMagic)));
    }

    #[test]
    fn test_rejects_malformed_header() {
        assert!(matches!(read_ppm(b"P6\n4 4"), Err(PpmError::Image(_))));
        assert!(matches!(
            read_ppm(b"P6 4 -2 255\n"),
            Err(PpmError::Image(_))
        ));
    }

    #[test]
    fn test_rejects_sixteen_bit_samples() {
        let mut bytes = b"P6 1 1 65535\n".to_vec();
        bytes.extend_from_slice(&[0; 6]);

        assert!(matches!(
            read_ppm(&bytes),
            Err(PpmError::UnsupportedMaxValue(65535))
        ));
    }

    #[test]
    fn test_rejects_truncated_samples() {
        let mut bytes = b"P6 2 2 255\n".to_vec();
        bytes.extend_from_slice(&[0; 5]);

        match read_ppm(&bytes).unwrap_err() {
            PpmError::Truncated { expected, actual } => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 5);
            }
            other => panic!("Expected Truncated, got {other:?}"),
        }
    }
}
