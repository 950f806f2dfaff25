//! Grayscale conversion engine
//!
//! This module maps RGB pixels to grayscale under one of the selectable
//! conversion methods, one pixel, a slice or a whole grid at a time.

mod converter;
pub mod method;

pub use converter::{
    convert, convert_grid, convert_grid_parallel, convert_indexed, convert_pixels, shades_of_gray,
};
pub use method::ConversionMethod;
