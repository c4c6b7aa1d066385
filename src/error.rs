#[cfg(feature = "icons")]
use std::path::PathBuf;

use thiserror::Error;

/// Error type for background-removal option validation
///
/// Background removal itself never fails; a grid without a confident
/// background is reported as a skipped outcome. Only invalid tuning
/// parameters are rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyOptionsError {
    /// Confidence threshold is not a finite value in `[0, 1)`
    ///
    /// A threshold of 1.0 or more can never be exceeded by a ratio, which
    /// would silently disable the filter.
    #[error("Confidence threshold {0} must be a finite value in [0, 1)")]
    ConfidenceOutOfRange(f64),

    /// Color threshold is too large for an 8-bit channel tolerance
    #[error("Color threshold {0} must not exceed 255")]
    ColorThresholdTooLarge(u32),
}

/// Error type for thumbnail operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThumbnailError {
    /// The source image has zero width or height
    #[error("Cannot thumbnail an empty image ({width}x{height})")]
    EmptyImage {
        /// Source width
        width: u32,
        /// Source height
        height: u32,
    },

    /// The requested maximum dimension is zero
    #[error("Invalid target dimension: {0}")]
    InvalidTargetDimension(u32),
}

/// Error type for logo and favicon file generation
///
/// These operations touch the filesystem and the image codecs, so unlike
/// the pixel operations they carry the underlying I/O and codec errors.
#[cfg(feature = "icons")]
#[derive(Debug, Error)]
pub enum IconError {
    /// The input image path does not exist
    #[error("Input image not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Reading or writing a file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Decoding or encoding an image failed
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// Resizing the logo failed
    #[error(transparent)]
    Thumbnail(#[from] ThumbnailError),
}
