use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::AssetError;
use crate::handle::{AssetId, ImageHandle};
use crate::sheet::{self, ImageAsset};

/// Central image registry. Loads, caches, and provides access to sprite sheets.
pub struct AssetServer {
    base_path: PathBuf,
    images: HashMap<AssetId, ImageAsset>,
    path_to_image: HashMap<PathBuf, ImageHandle>,
    next_id: AssetId,
}

impl AssetServer {
    /// Create a new AssetServer rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let base_path = base_path.into();
        info!("AssetServer created with base path: {}", base_path.display());
        Self {
            base_path,
            images: HashMap::new(),
            path_to_image: HashMap::new(),
            next_id: 1,
        }
    }

    /// Resolve a relative asset path against the base path.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    fn allocate(&mut self, full_path: PathBuf, asset: ImageAsset) -> ImageHandle {
        let handle = ImageHandle::new(self.next_id);
        self.next_id += 1;
        self.images.insert(handle.id(), asset);
        self.path_to_image.insert(full_path, handle);
        handle
    }

    /// Load an image file (PNG, JPEG, etc.) as a sprite sheet.
    /// Subsequent loads of the same path return the cached handle.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<ImageHandle, AssetError> {
        let full_path = self.resolve(path.as_ref());

        if let Some(&handle) = self.path_to_image.get(&full_path) {
            return Ok(handle);
        }

        if !full_path.exists() {
            return Err(AssetError::NotFound(full_path));
        }

        let asset = sheet::load_image(&full_path)?;
        debug!(
            "Loaded {} ({}x{})",
            full_path.display(),
            asset.width,
            asset.height
        );
        Ok(self.allocate(full_path, asset))
    }

    /// Register an already decoded image under `path`.
    ///
    /// Later `load_image` calls for the same path return this handle without
    /// touching the filesystem. Used for generated placeholder sheets and for
    /// running without an asset directory.
    pub fn insert_image(&mut self, path: impl AsRef<Path>, asset: ImageAsset) -> ImageHandle {
        let full_path = self.resolve(path.as_ref());
        if let Some(&handle) = self.path_to_image.get(&full_path) {
            self.images.insert(handle.id(), asset);
            return handle;
        }
        self.allocate(full_path, asset)
    }

    /// Get a reference to a loaded image by its handle.
    pub fn get_image(&self, handle: ImageHandle) -> Option<&ImageAsset> {
        self.images.get(&handle.id())
    }

    /// Check if a handle refers to a loaded image.
    pub fn is_loaded(&self, handle: ImageHandle) -> bool {
        self.images.contains_key(&handle.id())
    }

    /// Number of images currently held.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The base path this server resolves relative paths against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
