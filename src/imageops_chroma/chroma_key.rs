use image::{Rgb, Rgba};
use imageproc::definitions::Image;

use crate::utils::manhattan_distance;

/// Per-channel color tolerance; a pixel matches when its Manhattan distance
/// to the key color is below three times this value.
pub const DEFAULT_COLOR_THRESHOLD: u32 = 15;

/// Trait for making every pixel close to a key color fully transparent.
///
/// Only the alpha channel of matching pixels is written. Their color
/// channels are kept as they were, so a transparent pixel does not
/// necessarily carry black. Non-matching pixels are left untouched,
/// including any alpha they already had.
pub trait ChromaKeyExt {
    /// Applies the chroma key and returns the image with the number of
    /// pixels whose alpha went from non-zero to zero.
    ///
    /// This consumes the original image.
    ///
    /// # Examples
    /// ```
    /// use image::{Rgb, Rgba};
    /// use imageops_chroma::{ChromaKeyExt, Image, DEFAULT_COLOR_THRESHOLD};
    ///
    /// let mut image: Image<Rgba<u8>> = Image::from_pixel(2, 1, Rgba([250, 3, 2, 255]));
    /// image.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
    ///
    /// let (keyed, changed) = image.chroma_key(Rgb([255, 0, 0]), DEFAULT_COLOR_THRESHOLD);
    /// assert_eq!(changed, 1);
    /// assert_eq!(keyed.get_pixel(0, 0), &Rgba([250, 3, 2, 0]));
    /// assert_eq!(keyed.get_pixel(1, 0), &Rgba([0, 255, 0, 255]));
    /// ```
    fn chroma_key(self, key: Rgb<u8>, threshold: u32) -> (Self, usize)
    where
        Self: Sized;

    /// Applies the chroma key in-place.
    ///
    /// # Returns
    /// The number of pixels whose alpha went from non-zero to zero. Pixels
    /// that matched but were already transparent are not counted.
    fn chroma_key_mut(&mut self, key: Rgb<u8>, threshold: u32) -> usize;
}

impl ChromaKeyExt for Image<Rgba<u8>> {
    fn chroma_key(mut self, key: Rgb<u8>, threshold: u32) -> (Self, usize) {
        let changed = self.chroma_key_mut(key, threshold);
        (self, changed)
    }

    #[cfg(not(feature = "rayon"))]
    fn chroma_key_mut(&mut self, key: Rgb<u8>, threshold: u32) -> usize {
        let limit = threshold.saturating_mul(3);
        self.pixels_mut()
            .map(|pixel| key_pixel(pixel, key, limit))
            .filter(|&changed| changed)
            .count()
    }

    #[cfg(feature = "rayon")]
    fn chroma_key_mut(&mut self, key: Rgb<u8>, threshold: u32) -> usize {
        use image::Pixel;
        use rayon::prelude::*;

        let limit = threshold.saturating_mul(3);
        let channels: &mut [u8] = self;
        channels
            .par_chunks_exact_mut(usize::from(<Rgba<u8> as Pixel>::CHANNEL_COUNT))
            .map(|chunk| key_pixel(<Rgba<u8> as Pixel>::from_slice_mut(chunk), key, limit))
            .filter(|&changed| changed)
            .count()
    }
}

/// `true` when `pixel` is within `limit` of `key` (strictly below).
#[inline]
pub fn matches_key(pixel: Rgb<u8>, key: Rgb<u8>, limit: u32) -> bool {
    manhattan_distance(pixel, key) < limit
}

/// Clears the alpha of a matching pixel; `true` if alpha actually changed.
#[inline]
fn key_pixel(pixel: &mut Rgba<u8>, key: Rgb<u8>, limit: u32) -> bool {
    let Rgba([red, green, blue, alpha]) = *pixel;
    if !matches_key(Rgb([red, green, blue]), key, limit) {
        return false;
    }
    pixel.0[3] = 0;
    alpha != 0
}
