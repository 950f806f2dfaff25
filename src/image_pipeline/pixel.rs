//! Pixel data types
//!
//! This module holds the value types exchanged between the image host and
//! the grayscale conversion engine.

pub mod types;

pub use types::{PixelGrid, RgbColor};
