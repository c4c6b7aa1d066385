//! Internal utility functions for imageops-chroma.
//!
//! This module contains common functionality used across different image operations.

use image::Rgb;

/// Sum of absolute per-channel differences between two colors.
///
/// The result is at most `3 * 255`, so it always fits in a `u32`.
#[inline]
pub fn manhattan_distance(a: Rgb<u8>, b: Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| u32::from(x.abs_diff(y)))
        .sum()
}

/// Scales `(width, height)` so the longer side equals `max_dimension`.
///
/// The aspect ratio is preserved with rounding, and the shorter side never
/// collapses below one pixel. Callers must pass non-zero dimensions.
pub fn fit_within(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let scale_side = |short: u32, long: u32| -> u32 {
        let (short, long, max) = (
            u64::from(short),
            u64::from(long),
            u64::from(max_dimension),
        );
        ((short * max + long / 2) / long).max(1) as u32
    };

    if width >= height {
        (max_dimension, scale_side(height, width))
    } else {
        (scale_side(width, height), max_dimension)
    }
}

/// Validates that an image has non-zero dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
/// * `context` - A description of the context for error messages
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise an error
pub fn validate_non_empty_image(width: u32, height: u32, context: &str) -> Result<(), String> {
    if width == 0 || height == 0 {
        Err(format!("{}: Image dimensions must be non-zero", context))
    } else {
        Ok(())
    }
}
