//! JPEG reader implementation using the image library.
//!
//! Decoded images are flattened to 8-bit RGB regardless of the colour type
//! stored in the file (grayscale and CMYK JPEGs included).

use image::ImageFormat;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::jpeg::reader::ImageReader;
use crate::image_pipeline::pixel::PixelGrid;

/// Image reader that decodes JPEG bytes with the `image` crate.
pub struct JpegReader;

impl ImageReader for JpegReader {
    /// Decodes JPEG bytes into a row-major RGB pixel grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::DecodeError`] when the bytes are not a
    /// decodable JPEG stream.
    fn read_image(&self, data: &[u8]) -> Result<PixelGrid> {
        debug!("Decoding JPEG image, {} bytes", data.len());

        let decoded = image::load_from_memory_with_format(data, ImageFormat::Jpeg)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
        let rgb = decoded.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);

        debug!("Decoded image: {}x{}", width, height);

        PixelGrid::from_rgb_bytes(width, height, rgb.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageEncoder, codecs::jpeg::JpegEncoder};

    fn encode_jpeg(width: u32, height: u32, rgb: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, 100)
            .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decodes_dimensions() {
        let rgb = vec![128u8; 16 * 8 * 3];
        let grid = JpegReader.read_image(&encode_jpeg(16, 8, &rgb)).unwrap();
        assert_eq!(grid.dimensions(), (16, 8));
    }

    #[test]
    fn test_flat_gray_survives_compression() {
        let rgb = vec![200u8; 8 * 8 * 3];
        let grid = JpegReader.read_image(&encode_jpeg(8, 8, &rgb)).unwrap();
        for pixel in grid.pixels() {
            assert!(pixel.r.abs_diff(200) <= 2, "{:?}", pixel);
        }
    }

    #[test]
    fn test_rejects_non_jpeg_data() {
        let result = JpegReader.read_image(b"definitely not a jpeg");
        assert!(matches!(result, Err(ConversionError::DecodeError(_))));
    }
}
