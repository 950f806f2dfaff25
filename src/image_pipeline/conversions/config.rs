//! Grayscale pipeline configuration types

use crate::image_pipeline::conversion::ConversionMethod;
use crate::image_pipeline::tiff::TiffCompression;

/// Configuration for JPEG to grayscale TIFF conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Grayscale method applied to every pixel
    pub method: ConversionMethod,
    /// When set, the output marks pixels where `method` and this method agree
    pub compare_with: Option<ConversionMethod>,
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether to reject empty images before conversion
    pub validate_dimensions: bool,
    /// Whether to convert pixels on the rayon thread pool
    pub parallel: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            method: ConversionMethod::Average,
            compare_with: None,
            compression: TiffCompression::None,
            predictor: None,
            validate_dimensions: true,
            parallel: false,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    method: Option<ConversionMethod>,
    compare_with: Option<Option<ConversionMethod>>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    parallel: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn method(mut self, method: ConversionMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn compare_with(mut self, method: Option<ConversionMethod>) -> Self {
        self.compare_with = Some(method);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            method: self.method.unwrap_or(default.method),
            compare_with: self.compare_with.unwrap_or(default.compare_with),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            parallel: self.parallel.unwrap_or(default.parallel),
        }
    }
}
