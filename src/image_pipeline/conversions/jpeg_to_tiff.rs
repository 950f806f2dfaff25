use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    comparison,
    conversion::{self, ConversionMethod},
    conversions::ConversionConfig,
    jpeg::{ImageReader, JpegReader},
    pixel::PixelGrid,
    tiff::{StandardTiffWriter, TiffWriter},
};

pub struct GrayscalePipeline<R: ImageReader, W: TiffWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl GrayscalePipeline<JpegReader, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: JpegReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: TiffWriter> GrayscalePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    fn decode(&self, input_data: &[u8]) -> Result<PixelGrid> {
        let image = {
            let _span = tracing::info_span!("decode_jpeg").entered();
            self.reader.read_image(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        Ok(image)
    }

    fn encode(&self, image: &PixelGrid, output: &mut dyn Write) -> Result<()> {
        let _span = tracing::info_span!("encode_tiff").entered();
        self.writer.write_tiff(image, output, &self.config)
    }

    /// Converts a decoded grid with the configured execution strategy.
    pub fn convert_grid(&self, image: &PixelGrid, method: ConversionMethod) -> PixelGrid {
        let _span = tracing::info_span!("convert_grayscale", %method).entered();
        if self.config.parallel {
            conversion::convert_grid_parallel(image, method)
        } else {
            conversion::convert_grid(image, method)
        }
    }

    /// Converts `image` with both methods and marks their equivalent pixels.
    pub fn compare_grid(
        &self,
        image: &PixelGrid,
        method_a: ConversionMethod,
        method_b: ConversionMethod,
    ) -> Result<PixelGrid> {
        let gray_a = self.convert_grid(image, method_a);
        let gray_b = self.convert_grid(image, method_b);

        let _span = tracing::info_span!("compare_methods", %method_a, %method_b).entered();
        let equivalent = comparison::count_equivalent(&gray_a, &gray_b)?;
        let marked = comparison::compare(&gray_a, &gray_b)?;
        info!(
            equivalent,
            total = image.pixels().len(),
            "Equivalent pixels in the two images are marked red"
        );
        Ok(marked)
    }

    /// Decodes `input_data`, converts it and writes a TIFF to `output`.
    ///
    /// When `compare_with` is configured the written image is the comparison
    /// of the configured method against it.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        if let Some(other) = self.config.compare_with {
            return self.compare(input_data, output, self.config.method, other);
        }

        info!(method = %self.config.method, "Starting grayscale conversion");

        let image = self.decode(input_data)?;
        let converted = self.convert_grid(&image, self.config.method);
        self.encode(&converted, output)?;

        info!(
            width = converted.width(),
            height = converted.height(),
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn compare(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
        method_a: ConversionMethod,
        method_b: ConversionMethod,
    ) -> Result<()> {
        info!(%method_a, %method_b, "Starting grayscale method comparison");

        let image = self.decode(input_data)?;
        let marked = self.compare_grid(&image, method_a, method_b)?;
        self.encode(&marked, output)?;

        info!(
            width = marked.width(),
            height = marked.height(),
            "Comparison complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = Self::read_input(input_path)?;
        let mut encoded = Vec::new();
        self.convert(&input_data, &mut encoded)?;
        Self::write_output(output_path, &encoded)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        method_a: ConversionMethod,
        method_b: ConversionMethod,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Comparing methods on file"
        );

        let input_data = Self::read_input(input_path)?;
        let mut encoded = Vec::new();
        self.compare(&input_data, &mut encoded, method_a, method_b)?;
        Self::write_output(output_path, &encoded)
    }

    fn read_input(input_path: &Path) -> Result<Vec<u8>> {
        let _span = tracing::info_span!("read_input_file").entered();
        std::fs::read(input_path).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
        })
    }

    // Only ever called with a fully encoded image.
    fn write_output(output_path: &Path, encoded: &[u8]) -> Result<()> {
        let _span = tracing::info_span!("write_output_file", bytes = encoded.len()).entered();
        std::fs::write(output_path, encoded).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
