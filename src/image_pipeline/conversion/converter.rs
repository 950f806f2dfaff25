//! Per-pixel grayscale conversion.
//!
//! Every function here is pure: the same pixel and method always produce the
//! same gray triplet, and nothing is retained between calls.

use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversion::method::ConversionMethod;
use crate::image_pipeline::pixel::{PixelGrid, RgbColor};

const BT709_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];
const BT601_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

const MIN_SHADES: u16 = 2;
const MAX_SHADES: u16 = 256;

/// Converts a single pixel to grayscale.
pub fn convert(pixel: RgbColor, method: ConversionMethod) -> RgbColor {
    let gray = match method {
        ConversionMethod::Average => average(pixel),
        ConversionMethod::LuminanceBt709 => weighted_luminance(pixel, BT709_WEIGHTS),
        ConversionMethod::LuminanceBt601 => weighted_luminance(pixel, BT601_WEIGHTS),
        ConversionMethod::Desaturation => {
            ((pixel.max_channel() as u16 + pixel.min_channel() as u16) / 2) as u8
        }
        ConversionMethod::DecompositionMax => pixel.max_channel(),
        ConversionMethod::DecompositionMin => pixel.min_channel(),
        ConversionMethod::FullRed => pixel.r,
        ConversionMethod::FullGreen => pixel.g,
        ConversionMethod::FullBlue => pixel.b,
        ConversionMethod::Shades4 => quantize(pixel, 4),
        ConversionMethod::Shades16 => quantize(pixel, 16),
        ConversionMethod::Shades32 => quantize(pixel, 32),
        ConversionMethod::Shades64 => quantize(pixel, 64),
    };
    RgbColor::gray(gray)
}

/// Converts a pixel using a raw selector index instead of a typed method.
pub fn convert_indexed(pixel: RgbColor, method_index: usize) -> Result<RgbColor> {
    Ok(convert(pixel, ConversionMethod::from_index(method_index)?))
}

/// Batch form of [`convert`]; order and length are preserved.
pub fn convert_pixels(pixels: &[RgbColor], method: ConversionMethod) -> Vec<RgbColor> {
    pixels.iter().map(|&pixel| convert(pixel, method)).collect()
}

pub fn convert_grid(grid: &PixelGrid, method: ConversionMethod) -> PixelGrid {
    debug!(
        width = grid.width(),
        height = grid.height(),
        %method,
        "Converting grid"
    );
    let mut converted = grid.clone();
    converted
        .pixels_mut()
        .iter_mut()
        .for_each(|pixel| *pixel = convert(*pixel, method));
    converted
}

/// Same result as [`convert_grid`], with pixels spread over the rayon pool.
pub fn convert_grid_parallel(grid: &PixelGrid, method: ConversionMethod) -> PixelGrid {
    debug!(
        width = grid.width(),
        height = grid.height(),
        %method,
        "Converting grid in parallel"
    );
    let mut converted = grid.clone();
    converted
        .pixels_mut()
        .par_iter_mut()
        .for_each(|pixel| *pixel = convert(*pixel, method));
    converted
}

/// Quantizes a pixel to `number_of_shades` evenly spaced gray levels.
///
/// 2 shades gives black and white, 4 adds a dark and a light gray, and so on
/// up to 256.
pub fn shades_of_gray(pixel: RgbColor, number_of_shades: u16) -> Result<RgbColor> {
    if !(MIN_SHADES..=MAX_SHADES).contains(&number_of_shades) {
        return Err(ConversionError::InvalidMethod(format!(
            "number of shades must be between {} and {}, got {}",
            MIN_SHADES, MAX_SHADES, number_of_shades
        )));
    }
    Ok(RgbColor::gray(quantize(pixel, number_of_shades)))
}

fn average(pixel: RgbColor) -> u8 {
    (pixel.channel_sum() / 3) as u8
}

// Clamp then truncate; no rounding.
fn weighted_luminance(pixel: RgbColor, [wr, wg, wb]: [f64; 3]) -> u8 {
    let sum = wr * pixel.r as f64 + wg * pixel.g as f64 + wb * pixel.b as f64;
    sum.clamp(0.0, 255.0) as u8
}

// Caller guarantees 2 <= number_of_shades <= 256, so step is never zero.
fn quantize(pixel: RgbColor, number_of_shades: u16) -> u8 {
    let step = 255 / (number_of_shades as u32 - 1);
    let avg = average(pixel) as u32;
    let level = (avg as f64 / step as f64 + 0.5).floor() as u32;
    (level * step).min(255) as u8
}
