use skyward_assets::ImageHandle;

use crate::animation::AnimationClip;

/// A collectible that changes how the player looks.
///
/// Only presentation is modelled: the icon shown while it is active and,
/// optionally, the attack animation it replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    pub name: String,
    pub image: ImageHandle,
    pub attack_clip: Option<AnimationClip>,
}

impl PowerUp {
    pub fn new(name: impl Into<String>, image: ImageHandle) -> Self {
        Self {
            name: name.into(),
            image,
            attack_clip: None,
        }
    }

    pub fn with_attack_clip(mut self, clip: AnimationClip) -> Self {
        self.attack_clip = Some(clip);
        self
    }
}
