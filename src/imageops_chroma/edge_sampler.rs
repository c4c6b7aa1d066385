use image::{Rgb, Rgba};
use imageproc::definitions::Image;
use itertools::chain;

/// Colors collected from the border of an image, in scan order.
///
/// Scan order is the top row left to right, the bottom row left to right,
/// then the left and right columns top to bottom without their corners.
/// Fully transparent border pixels are not part of the sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSample {
    colors: Vec<Rgb<u8>>,
}

impl EdgeSample {
    /// Wraps an already ordered list of border colors.
    pub const fn new(colors: Vec<Rgb<u8>>) -> Self {
        Self { colors }
    }

    /// The sampled colors in scan order.
    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Number of sampled border pixels.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` when no border pixel carried color information.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl From<Vec<Rgb<u8>>> for EdgeSample {
    fn from(colors: Vec<Rgb<u8>>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<Rgb<u8>> for EdgeSample {
    fn from_iter<I: IntoIterator<Item = Rgb<u8>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Trait for collecting the border colors of an RGBA image.
pub trait SampleEdgesExt {
    /// Collects the RGB color of every border pixel whose alpha is non-zero.
    ///
    /// Each border pixel is visited exactly once, even when the image is a
    /// single row or column. A zero-area image yields an empty sample.
    ///
    /// # Examples
    /// ```
    /// use image::{Rgb, Rgba};
    /// use imageops_chroma::{Image, SampleEdgesExt};
    ///
    /// let mut image: Image<Rgba<u8>> = Image::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
    /// image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    ///
    /// let sample = image.sample_edges();
    /// assert_eq!(sample.len(), 7);
    /// assert!(sample.colors().iter().all(|&color| color == Rgb([255, 255, 255])));
    /// ```
    fn sample_edges(&self) -> EdgeSample;
}

impl SampleEdgesExt for Image<Rgba<u8>> {
    fn sample_edges(&self) -> EdgeSample {
        border_coordinates(self.width(), self.height())
            .map(|(x, y)| *self.get_pixel(x, y))
            .filter(|Rgba([_, _, _, alpha])| *alpha != 0)
            .map(|Rgba([red, green, blue, _])| Rgb([red, green, blue]))
            .collect()
    }
}

/// Border coordinates of a `width` x `height` grid in scan order.
fn border_coordinates(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let (width, height) = if width == 0 || height == 0 {
        (0, 0)
    } else {
        (width, height)
    };
    let last_x = width.saturating_sub(1);
    let last_y = height.saturating_sub(1);

    let top = (0..width).map(|x| (x, 0));
    let bottom = (0..if height > 1 { width } else { 0 }).map(move |x| (x, last_y));
    let left = (1..last_y).map(|y| (0, y));
    let right = (1..if width > 1 { last_y } else { 1 }).map(move |y| (last_x, y));

    chain!(top, bottom, left, right)
}
