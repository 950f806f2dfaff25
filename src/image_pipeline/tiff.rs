//! TIFF writing module
//!
//! This module encodes converted pixel grids as 8-bit RGB TIFF files with
//! various compression options.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::TiffWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::TiffCompression;
