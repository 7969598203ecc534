//! Player sprite strips and their frame tables

use skyward_assets::{AssetError, AssetServer, ImageHandle};
use tracing::info;

use super::{PlayerState, SpritePaths};
use crate::animation::AnimationClip;

/// Frame layout of one state's strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipSpec {
    pub frame_count: u32,
    pub frame_duration: f32,
    pub looping: bool,
    pub start_frame: u32,
    pub end_frame: Option<u32>,
}

impl ClipSpec {
    const fn looping(frame_count: u32, frame_duration: f32) -> Self {
        Self {
            frame_count,
            frame_duration,
            looping: true,
            start_frame: 0,
            end_frame: None,
        }
    }

    const fn once(frame_count: u32, frame_duration: f32) -> Self {
        Self {
            looping: false,
            ..Self::looping(frame_count, frame_duration)
        }
    }

    /// Frame table for a state
    pub const fn for_state(state: PlayerState) -> Self {
        match state {
            PlayerState::Idle => Self::looping(12, 0.055),
            PlayerState::Run => Self::looping(8, 0.075),
            PlayerState::Jump => Self::once(4, 0.15),
            PlayerState::Fall => Self::looping(4, 0.1),
            PlayerState::Hit => Self::once(4, 0.1),
            PlayerState::Attack => Self::once(6, 0.05),
            PlayerState::Dash => Self {
                end_frame: Some(5),
                ..Self::once(10, 0.25)
            },
            PlayerState::Death => Self::once(10, 0.055),
        }
    }

    pub fn clip(&self, image: ImageHandle) -> AnimationClip {
        AnimationClip {
            frame_count: self.frame_count,
            frame_duration: self.frame_duration,
            image,
            looping: self.looping,
            start_frame: self.start_frame,
            end_frame: self.end_frame,
        }
    }
}

/// Loaded strip for every player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSprites {
    pub idle: ImageHandle,
    pub run: ImageHandle,
    pub jump: ImageHandle,
    pub fall: ImageHandle,
    pub hit: ImageHandle,
    pub attack: ImageHandle,
    pub dash: ImageHandle,
    pub death: ImageHandle,
}

impl PlayerSprites {
    /// Load every strip. Any missing or unreadable file fails the whole load.
    pub fn load(assets: &mut AssetServer, paths: &SpritePaths) -> Result<Self, AssetError> {
        let sprites = Self {
            idle: assets.load_image(&paths.idle)?,
            run: assets.load_image(&paths.run)?,
            jump: assets.load_image(&paths.jump)?,
            fall: assets.load_image(&paths.fall)?,
            hit: assets.load_image(&paths.hit)?,
            attack: assets.load_image(&paths.attack)?,
            dash: assets.load_image(&paths.dash)?,
            death: assets.load_image(&paths.death)?,
        };
        info!("Loaded player sprites from {}", assets.base_path().display());
        Ok(sprites)
    }

    pub fn image(&self, state: PlayerState) -> ImageHandle {
        match state {
            PlayerState::Idle => self.idle,
            PlayerState::Run => self.run,
            PlayerState::Jump => self.jump,
            PlayerState::Fall => self.fall,
            PlayerState::Hit => self.hit,
            PlayerState::Attack => self.attack,
            PlayerState::Dash => self.dash,
            PlayerState::Death => self.death,
        }
    }

    /// Clip played when entering `state`
    pub fn clip(&self, state: PlayerState) -> AnimationClip {
        ClipSpec::for_state(state).clip(self.image(state))
    }
}

#[cfg(test)]
mod tests {
    use skyward_assets::ImageAsset;

    use super::*;

    #[test]
    fn test_one_shot_table_matches_states() {
        for state in PlayerState::ALL {
            assert_eq!(ClipSpec::for_state(state).looping, !state.is_one_shot());
        }
    }

    #[test]
    fn test_dash_plays_half_the_strip() {
        let spec = ClipSpec::for_state(PlayerState::Dash);
        assert_eq!(spec.frame_count, 10);
        assert_eq!(spec.end_frame, Some(5));
    }

    #[test]
    fn test_load_fails_on_first_missing_strip() {
        let mut assets = AssetServer::new("/nonexistent");
        let paths = SpritePaths::default();
        assets.insert_image(&paths.idle, ImageAsset::from_rgba(1, 1, vec![0; 4]));

        match PlayerSprites::load(&mut assets, &paths) {
            Err(AssetError::NotFound(path)) => assert!(path.ends_with("Player/Run.png")),
            other => panic!("expected NotFound, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_resolves_every_state() {
        let mut assets = AssetServer::new("/nonexistent");
        let paths = SpritePaths::default();
        for state in PlayerState::ALL {
            assets.insert_image(paths.path(state), ImageAsset::from_rgba(1, 1, vec![0; 4]));
        }

        let sprites = PlayerSprites::load(&mut assets, &paths).unwrap();
        assert_ne!(sprites.idle, sprites.death);
        assert_eq!(sprites.clip(PlayerState::Run).image, sprites.run);
        assert_eq!(sprites.clip(PlayerState::Run).frame_count, 8);
    }
}
