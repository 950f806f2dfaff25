//! TIFF output configuration types

use clap::ValueEnum;
use clap::builder::PossibleValue;

/// TIFF compression methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

impl ValueEnum for TiffCompression {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::None,
            Self::Lzw,
            Self::DeflateFast,
            Self::DeflateBalanced,
            Self::DeflateBest,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::None => Some(PossibleValue::new("none")),
            Self::Lzw => Some(PossibleValue::new("lzw")),
            Self::DeflateFast => Some(PossibleValue::new("deflate-fast")),
            Self::DeflateBalanced => Some(PossibleValue::new("deflate-balanced")),
            Self::DeflateBest => Some(PossibleValue::new("deflate-best")),
        }
    }
}
