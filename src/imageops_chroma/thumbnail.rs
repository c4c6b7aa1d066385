use image::imageops::{self, FilterType};
use image::Pixel;
use imageproc::definitions::Image;

use crate::error::ThumbnailError;
use crate::utils::{fit_within, validate_non_empty_image};

/// Trait for aspect-preserving resizing to a maximum side length.
pub trait ThumbnailExt<P: Pixel> {
    /// Resizes so that the longer side equals `max_dimension`.
    ///
    /// The aspect ratio is preserved and Lanczos3 resampling is used. Images
    /// smaller than the target are scaled up. The alpha channel is resampled
    /// like any other channel, so background removal must happen before.
    ///
    /// # Errors
    /// * `ThumbnailError::EmptyImage` - When the image has zero width or height
    /// * `ThumbnailError::InvalidTargetDimension` - When `max_dimension` is zero
    ///
    /// # Examples
    /// ```
    /// use image::Rgba;
    /// use imageops_chroma::{Image, ThumbnailExt};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let logo: Image<Rgba<u8>> = Image::new(1024, 512);
    /// let thumbnail = logo.thumbnail_to(256)?;
    /// assert_eq!(thumbnail.dimensions(), (256, 128));
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn thumbnail_to(&self, max_dimension: u32) -> Result<Image<P>, ThumbnailError>;

    /// Shrinks so that neither side exceeds `max_dimension`.
    ///
    /// Images already within the bound are returned unchanged; larger ones
    /// are resized exactly like [`ThumbnailExt::thumbnail_to`].
    ///
    /// # Errors
    /// Same as [`ThumbnailExt::thumbnail_to`].
    fn shrink_to_fit(&self, max_dimension: u32) -> Result<Image<P>, ThumbnailError>;
}

impl<P> ThumbnailExt<P> for Image<P>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    fn thumbnail_to(&self, max_dimension: u32) -> Result<Image<P>, ThumbnailError> {
        let (width, height) = self.dimensions();
        validate_non_empty_image(width, height, "Thumbnail")
            .map_err(|_| ThumbnailError::EmptyImage { width, height })?;
        if max_dimension == 0 {
            return Err(ThumbnailError::InvalidTargetDimension(max_dimension));
        }

        let (new_width, new_height) = fit_within(width, height, max_dimension);
        if (new_width, new_height) == (width, height) {
            return Ok(self.clone());
        }

        Ok(imageops::resize(
            self,
            new_width,
            new_height,
            FilterType::Lanczos3,
        ))
    }

    fn shrink_to_fit(&self, max_dimension: u32) -> Result<Image<P>, ThumbnailError> {
        let (width, height) = self.dimensions();
        if max_dimension > 0 && width.max(height) <= max_dimension {
            validate_non_empty_image(width, height, "Thumbnail")
                .map_err(|_| ThumbnailError::EmptyImage { width, height })?;
            return Ok(self.clone());
        }
        self.thumbnail_to(max_dimension)
    }
}
