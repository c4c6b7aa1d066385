use image::{Rgb, Rgba};
use imageproc::definitions::Image;

use super::background::{BackgroundEstimate, DEFAULT_CONFIDENCE_THRESHOLD};
use super::chroma_key::{ChromaKeyExt, DEFAULT_COLOR_THRESHOLD};
use super::edge_sampler::SampleEdgesExt;
use crate::error::KeyOptionsError;

/// Tuning knobs for background removal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyOptions {
    confidence_threshold: f64,
    color_threshold: u32,
}

impl KeyOptions {
    /// Creates validated options.
    ///
    /// # Arguments
    /// * `confidence_threshold` - Ratio of edge samples the dominant color must
    ///   strictly exceed, in `[0, 1)`
    /// * `color_threshold` - Per-channel tolerance; the keyed distance is
    ///   `color_threshold * 3`
    ///
    /// # Errors
    /// * `KeyOptionsError::ConfidenceOutOfRange` - When the ratio is not finite or outside `[0, 1)`
    /// * `KeyOptionsError::ColorThresholdTooLarge` - When the tolerance exceeds 255
    pub fn new(confidence_threshold: f64, color_threshold: u32) -> Result<Self, KeyOptionsError> {
        if !(0.0..1.0).contains(&confidence_threshold) {
            return Err(KeyOptionsError::ConfidenceOutOfRange(confidence_threshold));
        }
        if color_threshold > u32::from(u8::MAX) {
            return Err(KeyOptionsError::ColorThresholdTooLarge(color_threshold));
        }
        Ok(Self {
            confidence_threshold,
            color_threshold,
        })
    }

    /// Share of edge samples the dominant color must strictly exceed.
    pub const fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Per-channel tolerance; the key radius is three times this value.
    pub const fn color_threshold(&self) -> u32 {
        self.color_threshold
    }
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            color_threshold: DEFAULT_COLOR_THRESHOLD,
        }
    }
}

/// Why background removal left the image untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Every border pixel was fully transparent (or the image is empty)
    EmptyEdgeSample,
    /// The dominant border color did not exceed the confidence threshold
    LowConfidence(BackgroundEstimate),
}

/// Outcome of a background-removal pass.
///
/// Skipping is a normal result, not an error: the image is left exactly as
/// it was when no background could be inferred with confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundRemoval {
    /// No pixel was modified
    Skipped(SkipReason),
    /// The chroma key ran against the estimated background
    Applied {
        /// The accepted background estimate
        background: BackgroundEstimate,
        /// Pixels whose alpha went from non-zero to zero
        pixels_made_transparent: usize,
    },
}

impl BackgroundRemoval {
    /// `true` when the chroma key ran, even if it changed no pixel.
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Pixels made transparent by this pass, zero when skipped.
    pub const fn pixels_made_transparent(&self) -> usize {
        match self {
            Self::Applied {
                pixels_made_transparent,
                ..
            } => *pixels_made_transparent,
            Self::Skipped(_) => 0,
        }
    }

    /// The background color that was keyed out, if any.
    pub const fn background_color(&self) -> Option<Rgb<u8>> {
        match self {
            Self::Applied { background, .. } => Some(background.color),
            Self::Skipped(_) => None,
        }
    }
}

/// Trait for detecting a uniform border background and keying it out.
///
/// The pass samples the border, estimates the dominant color, and only
/// if that color is confident enough makes every similar pixel in the
/// whole image fully transparent.
pub trait RemoveBackgroundExt {
    /// Removes the detected background.
    ///
    /// This consumes the original image.
    ///
    /// # Examples
    /// ```
    /// use image::Rgba;
    /// use imageops_chroma::{Image, KeyOptions, RemoveBackgroundExt};
    ///
    /// let mut logo: Image<Rgba<u8>> = Image::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
    /// logo.put_pixel(4, 4, Rgba([20, 40, 200, 255]));
    ///
    /// let (logo, removal) = logo.remove_background(&KeyOptions::default());
    /// assert!(removal.is_applied());
    /// assert_eq!(removal.pixels_made_transparent(), 63);
    /// assert_eq!(logo.get_pixel(4, 4), &Rgba([20, 40, 200, 255]));
    /// ```
    fn remove_background(self, options: &KeyOptions) -> (Self, BackgroundRemoval)
    where
        Self: Sized;

    /// Removes the detected background in-place.
    fn remove_background_mut(&mut self, options: &KeyOptions) -> BackgroundRemoval;
}

impl RemoveBackgroundExt for Image<Rgba<u8>> {
    fn remove_background(mut self, options: &KeyOptions) -> (Self, BackgroundRemoval) {
        let removal = self.remove_background_mut(options);
        (self, removal)
    }

    fn remove_background_mut(&mut self, options: &KeyOptions) -> BackgroundRemoval {
        let sample = self.sample_edges();
        tracing::debug!(samples = sample.len(), "Sampled image border");

        let Some(estimate) = sample.estimate_background() else {
            tracing::debug!("No opaque border pixels, skipping background removal");
            return BackgroundRemoval::Skipped(SkipReason::EmptyEdgeSample);
        };

        if !estimate.is_confident(options.confidence_threshold) {
            tracing::debug!(
                color = ?estimate.color.0,
                count = estimate.count,
                total = estimate.total,
                "Background color is ambiguous, skipping"
            );
            return BackgroundRemoval::Skipped(SkipReason::LowConfidence(estimate));
        }

        tracing::info!(
            color = ?estimate.color.0,
            count = estimate.count,
            total = estimate.total,
            "Detected background color"
        );

        let pixels_made_transparent = self.chroma_key_mut(estimate.color, options.color_threshold);
        tracing::info!(pixels = pixels_made_transparent, "Made background transparent");

        BackgroundRemoval::Applied {
            background: estimate,
            pixels_made_transparent,
        }
    }
}
