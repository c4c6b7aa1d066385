//! Test utilities for imageops-chroma
//!
//! This module provides common fixtures for testing background removal.
//! It is only compiled when running tests.

use image::Rgba;
use imageproc::definitions::Image;

/// Pure red, the background color of [`create_red_border_image`].
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Creates a 4x4 image whose 12 border pixels all have distinct colors.
///
/// Every pixel is `[x * 60, y * 60, 10, 255]`, so the most frequent border
/// color occurs once and the confidence is 1/12.
pub fn create_distinct_border_image() -> Image<Rgba<u8>> {
    Image::from_fn(4, 4, |x, y| Rgba([(x * 60) as u8, (y * 60) as u8, 10, 255]))
}

/// Creates a 4x4 image where 5 of the 12 border pixels are pure red.
///
/// Layout (`R` = red, digits = distinct non-red border colors):
/// ```text
/// R R R R
/// 4 a b 6
/// 5 c d 7
/// R 1 2 3
/// ```
/// Interior pixels:
/// - a `[250, 3, 2, 255]`  distance 10 from red
/// - b `[0, 255, 0, 255]`  distance 510
/// - c `[255, 0, 0, 128]`  red, half transparent
/// - d `[240, 20, 20, 255]` distance 55
///
/// With the default options this makes exactly 7 pixels transparent.
pub fn create_red_border_image() -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::from_pixel(4, 4, RED);

    image.put_pixel(1, 3, Rgba([0, 0, 255, 255]));
    image.put_pixel(2, 3, Rgba([0, 255, 255, 255]));
    image.put_pixel(3, 3, Rgba([255, 255, 0, 255]));
    image.put_pixel(0, 1, Rgba([128, 0, 128, 255]));
    image.put_pixel(0, 2, Rgba([0, 128, 0, 255]));
    image.put_pixel(3, 1, Rgba([255, 255, 255, 255]));
    image.put_pixel(3, 2, Rgba([0, 0, 0, 255]));

    image.put_pixel(1, 1, Rgba([250, 3, 2, 255]));
    image.put_pixel(2, 1, Rgba([0, 255, 0, 255]));
    image.put_pixel(1, 2, Rgba([255, 0, 0, 128]));
    image.put_pixel(2, 2, Rgba([240, 20, 20, 255]));

    image
}

/// `true` when both images have equal dimensions and equal RGB channels.
pub fn rgb_channels_equal(expected: &Image<Rgba<u8>>, actual: &Image<Rgba<u8>>) -> bool {
    expected.dimensions() == actual.dimensions()
        && expected
            .pixels()
            .zip(actual.pixels())
            .all(|(e, a)| e.0[..3] == a.0[..3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SampleEdgesExt;

    #[test]
    fn create_distinct_border_image_has_unique_border_colors() {
        let mut colors = create_distinct_border_image().sample_edges().colors().to_vec();
        assert_eq!(colors.len(), 12);
        colors.sort_unstable_by_key(|color| color.0);
        colors.dedup();
        assert_eq!(colors.len(), 12);
    }

    #[test]
    fn create_red_border_image_has_five_red_border_pixels() {
        let sample = create_red_border_image().sample_edges();
        let red = sample
            .colors()
            .iter()
            .filter(|color| color.0 == [255, 0, 0])
            .count();
        assert_eq!((red, sample.len()), (5, 12));
    }

    #[test]
    fn rgb_channels_equal_ignores_alpha() {
        let image = create_red_border_image();
        let mut changed = image.clone();
        changed.get_pixel_mut(0, 0).0[3] = 0;
        assert!(rgb_channels_equal(&image, &changed));

        changed.get_pixel_mut(0, 0).0[0] = 1;
        assert!(!rgb_channels_equal(&image, &changed));
    }
}
