//! Player tuning and sprite locations

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::PlayerState;

/// Player tuning.
///
/// Motion values are per tick, not per second: `speed` pixels of lateral
/// movement per tick, `gravity` added to vertical velocity per tick.
/// Screen space: `y` grows downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Lateral movement per tick while a move key is held
    pub speed: f32,
    /// Initial upward velocity of a jump
    pub jump_force: f32,
    /// Added to vertical velocity every airborne tick
    pub gravity: f32,
    /// `y` of the floor
    pub ground_level: f32,
    /// `x` the player spawns at (on the floor)
    pub spawn_x: f32,
    pub max_health: u32,
    pub attack_power: u32,
    /// Seconds between attacks
    pub attack_cooldown: f32,
    /// Distance covered by a full dash animation
    pub dash_distance: f32,
    /// Frames in the dash animation; one dash press covers one frame's share
    pub dash_frames: u32,
    /// Scene object the player attacks
    pub target_name: String,
    pub sprites: SpritePaths,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            jump_force: 20.0,
            gravity: 1.5,
            ground_level: 500.0,
            spawn_x: 50.0,
            max_health: 10,
            attack_power: 10,
            attack_cooldown: 0.3,
            dash_distance: 200.0,
            dash_frames: 10,
            target_name: "Enemy".to_string(),
            sprites: SpritePaths::default(),
        }
    }
}

impl PlayerConfig {
    /// Horizontal distance moved by one dash press
    pub fn dash_step(&self) -> f32 {
        self.dash_distance / self.dash_frames.max(1) as f32
    }

    pub fn spawn_position(&self) -> Vec2 {
        Vec2::new(self.spawn_x, self.ground_level)
    }
}

/// Sprite strip for every player state, relative to the asset root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpritePaths {
    pub idle: PathBuf,
    pub run: PathBuf,
    pub jump: PathBuf,
    pub fall: PathBuf,
    pub hit: PathBuf,
    pub attack: PathBuf,
    pub dash: PathBuf,
    pub death: PathBuf,
}

impl Default for SpritePaths {
    fn default() -> Self {
        Self {
            idle: "Player/Idle.png".into(),
            run: "Player/Run.png".into(),
            jump: "Player/Jump.png".into(),
            fall: "Player/Fall.png".into(),
            hit: "Player/Hit.png".into(),
            attack: "Player/Attack.png".into(),
            dash: "Player/Dash.png".into(),
            death: "Player/Death_Test.png".into(),
        }
    }
}

impl SpritePaths {
    pub fn path(&self, state: PlayerState) -> &Path {
        match state {
            PlayerState::Idle => &self.idle,
            PlayerState::Run => &self.run,
            PlayerState::Jump => &self.jump,
            PlayerState::Fall => &self.fall,
            PlayerState::Hit => &self.hit,
            PlayerState::Attack => &self.attack,
            PlayerState::Dash => &self.dash,
            PlayerState::Death => &self.death,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_step_divides_distance() {
        let config = PlayerConfig::default();
        assert_eq!(config.dash_step(), 20.0);

        let degenerate = PlayerConfig {
            dash_frames: 0,
            ..PlayerConfig::default()
        };
        assert_eq!(degenerate.dash_step(), 200.0);
    }

    #[test]
    fn test_spawn_is_on_the_floor() {
        let config = PlayerConfig::default();
        assert_eq!(config.spawn_position(), Vec2::new(50.0, 500.0));
    }

    #[test]
    fn test_every_state_has_a_sprite() {
        let paths = SpritePaths::default();
        for state in PlayerState::ALL {
            assert!(paths.path(state).to_str().unwrap().ends_with(".png"));
        }
        assert_eq!(paths.path(PlayerState::Death), Path::new("Player/Death_Test.png"));
    }
}
