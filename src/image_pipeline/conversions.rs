//! Pipeline conversions module
//!
//! This module contains the orchestration logic that ties the JPEG reader,
//! the grayscale engine and the TIFF writer together.

mod config;
mod jpeg_to_tiff;


pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use jpeg_to_tiff::GrayscalePipeline;
