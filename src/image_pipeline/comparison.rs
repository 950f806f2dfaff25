//! Comparison of two converted images
//!
//! Pixels considered equivalent between the two grids are painted pure red
//! on a copy of the first grid. A pixel is equivalent as soon as any single
//! channel matches, not only when the whole triplet is equal.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::pixel::{PixelGrid, RgbColor};

/// Returns `true` when at least one channel is equal between `a` and `b`.
pub fn is_equivalent(a: RgbColor, b: RgbColor) -> bool {
    a.r == b.r || a.g == b.g || a.b == b.b
}

/// Marks equivalent pixels of `grid_a` and `grid_b` in red.
///
/// Non-equivalent pixels keep `grid_a`'s value. Neither input is modified.
pub fn compare(grid_a: &PixelGrid, grid_b: &PixelGrid) -> Result<PixelGrid> {
    ensure_same_dimensions(grid_a, grid_b)?;

    let mut marked = grid_a.clone();
    for (pixel, &other) in marked.pixels_mut().iter_mut().zip(grid_b.pixels()) {
        if is_equivalent(*pixel, other) {
            *pixel = RgbColor::RED;
        }
    }
    Ok(marked)
}

/// Number of pixels [`compare`] would paint red.
pub fn count_equivalent(grid_a: &PixelGrid, grid_b: &PixelGrid) -> Result<usize> {
    ensure_same_dimensions(grid_a, grid_b)?;

    let count = grid_a
        .pixels()
        .iter()
        .zip(grid_b.pixels())
        .filter(|&(&a, &b)| is_equivalent(a, b))
        .count();
    debug!(count, total = grid_a.pixels().len(), "Counted equivalent pixels");
    Ok(count)
}

fn ensure_same_dimensions(grid_a: &PixelGrid, grid_b: &PixelGrid) -> Result<()> {
    if grid_a.same_dimensions(grid_b) {
        return Ok(());
    }
    Err(ConversionError::DimensionMismatch {
        left_width: grid_a.width(),
        left_height: grid_a.height(),
        right_width: grid_b.width(),
        right_height: grid_b.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::conversion::{ConversionMethod, convert_grid};

    fn gradient(width: usize, height: usize) -> PixelGrid {
        let pixels = (0..width * height)
            .map(|i| RgbColor::new((i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8))
            .collect();
        PixelGrid::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_identical_grids_are_all_red() {
        let grid = convert_grid(&gradient(8, 4), ConversionMethod::Average);
        let result = compare(&grid, &grid).unwrap();
        assert!(result.pixels().iter().all(|&p| p == RgbColor::RED));
        assert_eq!(count_equivalent(&grid, &grid).unwrap(), 32);
    }

    #[test]
    fn test_single_matching_channel_marks_pixel() {
        let a = PixelGrid::from_pixels(2, 1, vec![RgbColor::new(1, 2, 3), RgbColor::new(1, 2, 3)])
            .unwrap();
        let b = PixelGrid::from_pixels(2, 1, vec![RgbColor::new(9, 9, 3), RgbColor::new(4, 5, 6)])
            .unwrap();

        let result = compare(&a, &b).unwrap();

        assert_eq!(result.get(0, 0), Some(RgbColor::RED));
        assert_eq!(result.get(1, 0), Some(RgbColor::new(1, 2, 3)));
        assert_eq!(count_equivalent(&a, &b).unwrap(), 1);
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let a = convert_grid(&gradient(3, 3), ConversionMethod::FullRed);
        let b = convert_grid(&gradient(3, 3), ConversionMethod::FullGreen);
        let a_before = a.clone();
        let b_before = b.clone();

        let result = compare(&a, &b).unwrap();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
        assert_eq!(result.dimensions(), a.dimensions());
    }

    #[test]
    fn test_differing_gray_pixels_keep_first_grid_value() {
        let a = PixelGrid::from_pixels(1, 1, vec![RgbColor::gray(10)]).unwrap();
        let b = PixelGrid::from_pixels(1, 1, vec![RgbColor::gray(11)]).unwrap();
        assert_eq!(compare(&a, &b).unwrap().get(0, 0), Some(RgbColor::gray(10)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = PixelGrid::new(4, 3);
        let b = PixelGrid::new(3, 4);
        let result = compare(&a, &b);
        assert!(matches!(
            result,
            Err(ConversionError::DimensionMismatch {
                left_width: 4,
                left_height: 3,
                right_width: 3,
                right_height: 4,
            })
        ));
        assert!(count_equivalent(&a, &PixelGrid::new(4, 2)).is_err());
    }

    #[test]
    fn test_empty_grids() {
        let empty = PixelGrid::new(0, 0);
        assert!(compare(&empty, &empty).unwrap().is_empty());
    }
}
