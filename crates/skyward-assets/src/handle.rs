use std::fmt;

/// Unique identifier for a loaded asset.
pub type AssetId = u64;

/// Handle to an image held by an [`AssetServer`](crate::AssetServer).
///
/// Handles are only minted by the server, so a handle always refers to an
/// image that was successfully loaded at some point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(AssetId);

impl ImageHandle {
    pub(crate) fn new(id: AssetId) -> Self {
        Self(id)
    }

    /// The unique ID of this image.
    pub fn id(&self) -> AssetId {
        self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image#{}", self.0)
    }
}
