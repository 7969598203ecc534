use std::path::Path;

use crate::error::AssetError;

/// A decoded sprite sheet with RGBA8 pixel data.
///
/// Sheets are laid out as a single horizontal strip of equally sized frames.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ImageAsset {
    /// Build an image from raw RGBA8 pixels.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Width of one frame when the sheet holds `frame_count` frames.
    pub fn frame_width(&self, frame_count: u32) -> u32 {
        if frame_count == 0 {
            return self.width;
        }
        self.width / frame_count
    }
}

/// Load an image file and return it as an RGBA8 ImageAsset.
pub fn load_image(path: &Path) -> Result<ImageAsset, AssetError> {
    let img = image::open(path)
        .map_err(|e| AssetError::ImageLoadFailed(path.to_path_buf(), e.to_string()))?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::EmptyImage(path.to_path_buf()));
    }

    Ok(ImageAsset::from_rgba(width, height, rgba.into_raw()))
}
