//! Image processing pipeline module
//!
//! This module provides a structured approach to grayscale conversion,
//! with separate modules for the pixel types, the conversion engine, the
//! method comparator, JPEG reading, TIFF writing, and orchestration.

pub mod pixel;
pub mod conversion;
pub mod comparison;
pub mod jpeg;
pub mod tiff;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use pixel::{
    PixelGrid,
    RgbColor,
};

pub use conversion::ConversionMethod;

pub use jpeg::{
    ImageReader,
    JpegReader,
};

pub use self::tiff::{
    TiffCompression,
    TiffWriter,
    StandardTiffWriter,
};

pub use conversions::{
    ConversionConfig,
    ConversionConfigBuilder,
    GrayscalePipeline,
};
