//! JPEG image reading module
//!
//! This module decodes source images into pixel grids for the conversion
//! engine.

mod reader;
mod jpeg_reader;

pub use reader::ImageReader;
pub use jpeg_reader::JpegReader;
