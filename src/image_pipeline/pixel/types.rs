//! RGB pixel and pixel grid types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// An 8-bit RGB triplet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
    /// Marker colour used by the comparator for equivalent pixels.
    pub const RED: RgbColor = RgbColor::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a grayscale colour with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    pub fn max_channel(&self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    pub fn min_channel(&self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// Sum of the three channels, wide enough to never overflow.
    pub fn channel_sum(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(color: RgbColor) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<image::Rgb<u8>> for RgbColor {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::from(pixel.0)
    }
}

/// Rectangular grid of pixels addressed by `(x, y)`.
///
/// Pixels are stored row-major: the pixel at `(x, y)` lives at index
/// `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<RgbColor>,
}

impl PixelGrid {
    /// Creates a grid filled with the default (black) colour.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![RgbColor::default(); width * height],
        }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<RgbColor>) -> Result<Self> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a grid from interleaved `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, data: &[u8]) -> Result<Self> {
        if width.checked_mul(height).and_then(|n| n.checked_mul(3)) != Some(data.len()) {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        let pixels = data
            .chunks_exact(3)
            .map(|c| RgbColor::new(c[0], c[1], c[2]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn same_dimensions(&self, other: &PixelGrid) -> bool {
        self.dimensions() == other.dimensions()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<RgbColor> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrites the pixel at `(x, y)`. Returns `false` when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, color: RgbColor) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn pixels(&self) -> &[RgbColor] {
        &self.pixels
    }

    /// Mutable access to the pixels; the grid's dimensions cannot change.
    pub fn pixels_mut(&mut self) -> &mut [RgbColor] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<RgbColor> {
        self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[RgbColor]> {
        self.pixels.chunks_exact(self.width.max(1))
    }

    pub fn is_grayscale(&self) -> bool {
        self.pixels.iter().all(RgbColor::is_gray)
    }

    /// Interleaved `[R, G, B, ...]` bytes, ready for an 8-bit RGB encoder.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&p| <[u8; 3]>::from(p))
            .collect()
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}
