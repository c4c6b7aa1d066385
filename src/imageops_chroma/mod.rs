pub mod background;
pub mod chroma_key;
pub mod edge_sampler;
pub mod remove_background;
pub mod thumbnail;

#[cfg(feature = "icons")]
pub mod favicon;
