use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::conversions::ConversionConfig;
use crate::image_pipeline::pixel::PixelGrid;
use crate::image_pipeline::tiff::types::TiffCompression;
use crate::image_pipeline::tiff::writer::TiffWriter;

/// Predictor tag value for horizontal differencing.
const HORIZONTAL_PREDICTOR: u16 = 2;

pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_tiff(&self, image: &PixelGrid, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width(), image.height());

        let width = u32::try_from(image.width())
            .map_err(|_| ConversionError::InvalidDimensions(image.width(), image.height()))?;
        let height = u32::try_from(image.height())
            .map_err(|_| ConversionError::InvalidDimensions(image.width(), image.height()))?;

        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => ::tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => ::tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => ::tiff::encoder::Compression::Deflate(::tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => ::tiff::encoder::Compression::Deflate(::tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => ::tiff::encoder::Compression::Deflate(::tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = ::tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                HORIZONTAL_PREDICTOR => ::tiff::tags::Predictor::Horizontal,
                _ => ::tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder.write_image::<::tiff::encoder::colortype::RGB8>(
            width,
            height,
            &image.to_rgb_bytes(),
        ).map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!(bytes = buffer.len(), "TIFF encoding complete");
        Ok(())
    }
}
