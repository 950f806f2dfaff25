use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::conversions::ConversionConfig;
use crate::image_pipeline::pixel::PixelGrid;

pub trait TiffWriter {
    fn write_tiff(&self, image: &PixelGrid, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
