mod error;
mod imageops_chroma;
mod utils;

#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Pixel};

#[cfg(feature = "icons")]
pub use error::IconError;
pub use error::{KeyOptionsError, ThumbnailError};
pub use imageops_chroma::background::{BackgroundEstimate, DEFAULT_CONFIDENCE_THRESHOLD};
pub use imageops_chroma::chroma_key::{matches_key, ChromaKeyExt, DEFAULT_COLOR_THRESHOLD};
pub use imageops_chroma::edge_sampler::{EdgeSample, SampleEdgesExt};
#[cfg(feature = "icons")]
pub use imageops_chroma::favicon::{
    encode_ico, encode_png, load_rgba, prepare_logo, write_favicon_set, IconSize, PreparedLogo,
    DEFAULT_LOGO_DIMENSION, DEFAULT_LOGO_FILE_NAME, FAVICON_SIZES, ICO_FILE_NAME, ICO_SIZES,
};
pub use imageops_chroma::remove_background::{
    BackgroundRemoval, KeyOptions, RemoveBackgroundExt, SkipReason,
};
pub use imageops_chroma::thumbnail::ThumbnailExt;
pub use utils::manhattan_distance;

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
