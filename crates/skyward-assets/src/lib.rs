//! Skyward Assets - Sprite sheet loading and management
//!
//! Loads image files into memory once and hands out cheap copyable handles
//! that gameplay code stores instead of the pixel data.

mod error;
mod handle;
mod sheet;
mod server;

pub use error::AssetError;
pub use handle::{AssetId, ImageHandle};
pub use sheet::{load_image, ImageAsset};
pub use server::AssetServer;
