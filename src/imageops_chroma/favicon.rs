//! Logo preparation and favicon export.
//!
//! These helpers wrap the pixel operations with the file handling needed to
//! turn a source logo into web icon assets: PNG thumbnails, a set of fixed
//! favicon sizes, and a multi-frame ICO.

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, Rgba};
use imageproc::definitions::Image;

use super::remove_background::{BackgroundRemoval, KeyOptions, RemoveBackgroundExt};
use super::thumbnail::ThumbnailExt;
use crate::error::{IconError, ThumbnailError};
use crate::utils::validate_non_empty_image;

/// Longest side of a prepared logo.
pub const DEFAULT_LOGO_DIMENSION: u32 = 256;

/// File name of a prepared logo.
pub const DEFAULT_LOGO_FILE_NAME: &str = "logo.png";

/// File name of the multi-frame icon.
pub const ICO_FILE_NAME: &str = "favicon.ico";

/// Frame sizes embedded in the ICO file.
pub const ICO_SIZES: [u32; 2] = [16, 32];

/// A square PNG icon written as part of the favicon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    /// Side length in pixels
    pub size: u32,
    /// Output file name
    pub file_name: &'static str,
}

/// PNG icons written by [`write_favicon_set`].
pub const FAVICON_SIZES: [IconSize; 4] = [
    IconSize {
        size: 16,
        file_name: "favicon-16x16.png",
    },
    IconSize {
        size: 32,
        file_name: "favicon-32x32.png",
    },
    IconSize {
        size: 48,
        file_name: "favicon-48x48.png",
    },
    IconSize {
        size: 180,
        file_name: "apple-touch-icon.png",
    },
];

/// Result of [`prepare_logo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedLogo {
    /// Path of the written PNG
    pub path: PathBuf,
    /// Dimensions after resizing
    pub dimensions: (u32, u32),
    /// What background removal did before resizing
    pub removal: BackgroundRemoval,
}

/// Opens an image file and converts it to RGBA8.
///
/// # Errors
/// * `IconError::InputNotFound` - When `path` does not exist
/// * `IconError::Image` - When the file cannot be decoded
pub fn load_rgba(path: &Path) -> Result<Image<Rgba<u8>>, IconError> {
    if !path.exists() {
        return Err(IconError::InputNotFound(path.to_path_buf()));
    }
    Ok(image::open(path)?.into_rgba8())
}

/// Encodes an RGBA image as PNG with maximum compression.
pub fn encode_png(image: &Image<Rgba<u8>>) -> Result<Vec<u8>, IconError> {
    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buffer)
}

/// Encodes a multi-frame ICO with one square PNG frame per entry of `sizes`.
///
/// Each frame is resized from `image` directly, ignoring its aspect ratio.
/// ICO frames cannot exceed 256 pixels.
///
/// # Errors
/// * `IconError::Thumbnail` - When `image` is empty or a size is zero
/// * `IconError::Image` - When a frame cannot be encoded
pub fn encode_ico(image: &Image<Rgba<u8>>, sizes: &[u32]) -> Result<Vec<u8>, IconError> {
    let frames = sizes
        .iter()
        .map(|&size| {
            let resized = resize_square(image, size)?;
            Ok(IcoFrame::as_png(
                resized.as_raw(),
                size,
                size,
                ExtendedColorType::Rgba8,
            )?)
        })
        .collect::<Result<Vec<_>, IconError>>()?;

    let mut buffer = Vec::new();
    IcoEncoder::new(&mut buffer).encode_images(&frames)?;
    Ok(buffer)
}

/// Writes the favicon PNGs and `favicon.ico` into `output_dir`.
///
/// The directory is created if it does not exist. The source image is
/// used as-is; run background removal first if the icons should be
/// transparent.
///
/// # Returns
/// The written paths, PNG icons first and the ICO last.
pub fn write_favicon_set(
    image: &Image<Rgba<u8>>,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, IconError> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(FAVICON_SIZES.len() + 1);
    for icon in FAVICON_SIZES {
        let resized = resize_square(image, icon.size)?;
        let path = output_dir.join(icon.file_name);
        fs::write(&path, encode_png(&resized)?)?;
        tracing::info!(path = %path.display(), size = icon.size, "Wrote favicon");
        written.push(path);
    }

    let path = output_dir.join(ICO_FILE_NAME);
    fs::write(&path, encode_ico(image, &ICO_SIZES)?)?;
    tracing::info!(path = %path.display(), sizes = ?ICO_SIZES, "Wrote icon");
    written.push(path);

    Ok(written)
}

/// Removes the logo background, resizes it and writes it as PNG.
///
/// # Arguments
/// * `input` - Source image path
/// * `output_dir` - Directory for the PNG, created if missing
/// * `max_dimension` - Upper bound on the longest side; smaller logos keep their size
/// * `options` - Background-removal tuning
///
/// # Errors
/// * `IconError::InputNotFound` - When `input` does not exist
/// * `IconError::Thumbnail` - When the source is empty or `max_dimension` is zero
/// * `IconError::Io` / `IconError::Image` - When reading, decoding or writing fails
pub fn prepare_logo(
    input: &Path,
    output_dir: &Path,
    max_dimension: u32,
    options: &KeyOptions,
) -> Result<PreparedLogo, IconError> {
    let logo = load_rgba(input)?;
    fs::create_dir_all(output_dir)?;

    let (logo, removal) = logo.remove_background(options);
    if !removal.is_applied() {
        tracing::info!(input = %input.display(), "Background is ambiguous, keeping it");
    }

    let thumbnail = logo.shrink_to_fit(max_dimension)?;
    let path = output_dir.join(DEFAULT_LOGO_FILE_NAME);
    fs::write(&path, encode_png(&thumbnail)?)?;
    tracing::info!(
        path = %path.display(),
        width = thumbnail.width(),
        height = thumbnail.height(),
        "Wrote logo"
    );

    Ok(PreparedLogo {
        path,
        dimensions: thumbnail.dimensions(),
        removal,
    })
}

/// Resizes to an exact `size` x `size` square with Lanczos3.
fn resize_square(image: &Image<Rgba<u8>>, size: u32) -> Result<Image<Rgba<u8>>, ThumbnailError> {
    let (width, height) = image.dimensions();
    validate_non_empty_image(width, height, "Favicon")
        .map_err(|_| ThumbnailError::EmptyImage { width, height })?;
    if size == 0 {
        return Err(ThumbnailError::InvalidTargetDimension(size));
    }
    Ok(imageops::resize(image, size, size, FilterType::Lanczos3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn create_logo() -> Image<Rgba<u8>> {
        Image::from_fn(64, 64, |x, y| {
            if (16..48).contains(&x) && (16..48).contains(&y) {
                Rgba([20, 40, 200, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
    }

    #[test]
    fn test_encode_png_round_trip_dimensions() {
        let bytes = encode_png(&create_logo()).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .unwrap()
            .into_rgba8();
        assert_eq!(decoded, create_logo());
    }

    #[test]
    fn test_encode_ico_header() {
        let bytes = encode_ico(&create_logo(), &ICO_SIZES).unwrap();

        // Reserved, type 1 (icon), two images
        assert_eq!(&bytes[..6], &[0, 0, 1, 0, 2, 0]);
        // First directory entry is 16x16, second is 32x32
        assert_eq!((bytes[6], bytes[7]), (16, 16));
        assert_eq!((bytes[22], bytes[23]), (32, 32));
    }

    #[test]
    fn test_encode_ico_rejects_empty_image() {
        let empty: Image<Rgba<u8>> = Image::new(0, 0);
        assert!(matches!(
            encode_ico(&empty, &ICO_SIZES),
            Err(IconError::Thumbnail(ThumbnailError::EmptyImage { .. }))
        ));
    }

    #[test]
    fn test_resize_square_ignores_aspect() {
        let image: Image<Rgba<u8>> = Image::new(100, 20);
        assert_eq!(resize_square(&image, 48).unwrap().dimensions(), (48, 48));
        assert_eq!(
            resize_square(&image, 0),
            Err(ThumbnailError::InvalidTargetDimension(0))
        );
    }

    #[test]
    fn test_load_rgba_missing_file() {
        let missing = Path::new("definitely/not/here.png");
        assert!(matches!(
            load_rgba(missing),
            Err(IconError::InputNotFound(path)) if path == missing
        ));
    }
}
