use std::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use clap::builder::PossibleValue;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Grayscale conversion methods, in selector order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConversionMethod {
    /// Integer mean of the three channels
    #[default]
    Average,
    /// ITU-R BT.709 weighted luminance
    LuminanceBt709,
    /// ITU-R BT.601 weighted luminance
    LuminanceBt601,
    /// Lightness of the HSL triplet, `(max + min) / 2`
    Desaturation,
    /// Brightest channel
    DecompositionMax,
    /// Darkest channel
    DecompositionMin,
    FullRed,
    FullGreen,
    FullBlue,
    /// Black, dark gray, light gray and white
    Shades4,
    Shades16,
    Shades32,
    Shades64,
}

impl ConversionMethod {
    pub const ALL: [ConversionMethod; 13] = [
        Self::Average,
        Self::LuminanceBt709,
        Self::LuminanceBt601,
        Self::Desaturation,
        Self::DecompositionMax,
        Self::DecompositionMin,
        Self::FullRed,
        Self::FullGreen,
        Self::FullBlue,
        Self::Shades4,
        Self::Shades16,
        Self::Shades32,
        Self::Shades64,
    ];

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            ConversionError::InvalidMethod(format!(
                "method index {} is out of range 0..{}",
                index,
                Self::ALL.len()
            ))
        })
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Average => "AVERAGE",
            Self::LuminanceBt709 => "LUMINANCE_BT_709",
            Self::LuminanceBt601 => "LUMINANCE_BT_601",
            Self::Desaturation => "DESATURATION",
            Self::DecompositionMax => "DECOMPOSITION_MAX",
            Self::DecompositionMin => "DECOMPOSITION_MIN",
            Self::FullRed => "FULL_RED",
            Self::FullGreen => "FULL_GREEN",
            Self::FullBlue => "FULL_BLUE",
            Self::Shades4 => "SHADES_4",
            Self::Shades16 => "SHADES_16",
            Self::Shades32 => "SHADES_32",
            Self::Shades64 => "SHADES_64",
        }
    }

    /// Number of gray levels for the quantizing methods.
    pub fn shade_count(&self) -> Option<u16> {
        match self {
            Self::Shades4 => Some(4),
            Self::Shades16 => Some(16),
            Self::Shades32 => Some(32),
            Self::Shades64 => Some(64),
            _ => None,
        }
    }
}

impl Display for ConversionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for ConversionMethod {
    type Error = ConversionError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_index(value as usize)
    }
}

impl FromStr for ConversionMethod {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|method| method.name() == normalized)
            .ok_or_else(|| ConversionError::InvalidMethod(s.to_owned()))
    }
}

impl ValueEnum for ConversionMethod {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()).alias(self.name().to_ascii_lowercase()))
    }
}
