//! Shared pipeline definitions
//!
//! The error type is shared by the conversion engine and the image host.

pub mod error;

pub use error::{ConversionError, Result};
