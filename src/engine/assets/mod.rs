// Asset management system
//
// Decodes numbered frame files, keeps them in one store and hands out typed
// handles. Nothing else in the game touches image data.

mod handle;
mod loader;
mod manager;

pub use handle::{AssetHandle, AssetId, FrameAsset, FrameHandle};
pub use loader::{AssetLoader, FrameSequence};
pub use manager::{AssetManager, AssetStats};

/// Environment variable overriding the asset root
pub const ASSET_ROOT_ENV: &str = "FLAT_WORLD_ASSETS";

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
