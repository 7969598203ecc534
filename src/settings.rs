//! Game settings with persistence
//!
//! Settings are saved to `~/.config/skyward/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skyward_core::TimeConfig;
use skyward_game::PlayerConfig;
use tracing::{info, warn};

/// Errors reading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{0}': {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to parse settings file '{0}': {1}")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("time_scale must be a positive finite number, got {0}")]
    InvalidTimeScale(f32),
}

/// All game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub player: PlayerConfig,
    pub time: TimeSettings,
    pub assets: AssetSettings,
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("skyward"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the user config directory, or return defaults if
    /// not found or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file. Missing fields take defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content =
            fs::read_to_string(path).map_err(|e| SettingsError::Read(path.to_path_buf(), e))?;
        let settings: Self =
            toml::from_str(&content).map_err(|e| SettingsError::Parse(path.to_path_buf(), e))?;
        settings.time.validate()?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to the user config directory
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        self.save_to(&dir.join("settings.toml"))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Tick timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSettings {
    /// Gameplay ticks per second
    pub tick_rate: u32,
    /// Time scale multiplier (affects gameplay speed)
    pub time_scale: f32,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            time_scale: 1.0,
        }
    }
}

impl TimeSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.time_scale.is_finite() && self.time_scale > 0.0 {
            Ok(())
        } else {
            Err(SettingsError::InvalidTimeScale(self.time_scale))
        }
    }

    pub fn to_time_config(&self) -> Result<TimeConfig, SettingsError> {
        self.validate()?;
        Ok(TimeConfig {
            time_scale: self.time_scale,
            fixed_timestep: 1.0 / self.tick_rate.max(1) as f32,
            ..TimeConfig::default()
        })
    }
}

/// Where sprite strips come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Root that sprite paths are resolved against
    pub base_path: PathBuf,
    /// Generate flat-colour strips instead of reading files
    pub placeholders: bool,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("assets"),
            placeholders: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: GameSettings = toml::from_str(
            r#"
            [player]
            speed = 7.5
            target_name = "Boss"

            [time]
            tick_rate = 120
            "#,
        )
        .unwrap();

        assert_eq!(settings.player.speed, 7.5);
        assert_eq!(settings.player.target_name, "Boss");
        assert_eq!(settings.player.jump_force, 20.0);
        assert_eq!(settings.time.tick_rate, 120);
        assert_eq!(settings.assets, AssetSettings::default());
        assert_eq!(
            settings.time.to_time_config().unwrap().fixed_timestep,
            1.0 / 120.0
        );
    }

    #[test]
    fn test_round_trips_through_disk() {
        let path = std::env::temp_dir().join("skyward_settings_round_trip.toml");
        let mut settings = GameSettings::default();
        settings.player.max_health = 3;
        settings.assets.placeholders = true;

        settings.save_to(&path).unwrap();
        let loaded = GameSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let missing = Path::new("/nonexistent/skyward/settings.toml");
        assert!(matches!(
            GameSettings::load_from(missing),
            Err(SettingsError::Read(_, _))
        ));

        let path = std::env::temp_dir().join("skyward_settings_garbage.toml");
        fs::write(&path, "player = 3").unwrap();
        assert!(matches!(
            GameSettings::load_from(&path),
            Err(SettingsError::Parse(_, _))
        ));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_time_scale_must_be_positive_and_finite() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let time = TimeSettings {
                time_scale: scale,
                ..TimeSettings::default()
            };
            assert!(matches!(
                time.to_time_config(),
                Err(SettingsError::InvalidTimeScale(_))
            ));
        }
        assert!(TimeSettings::default().to_time_config().is_ok());
    }

    #[test]
    fn test_non_finite_time_scale_in_file_is_rejected() {
        for (name, value) in [("inf", "inf"), ("nan", "nan"), ("zero", "0.0")] {
            let path = std::env::temp_dir().join(format!("skyward_settings_scale_{name}.toml"));
            fs::write(&path, format!("[time]\ntime_scale = {value}\n")).unwrap();
            assert!(matches!(
                GameSettings::load_from(&path),
                Err(SettingsError::InvalidTimeScale(_))
            ));
            fs::remove_file(&path).ok();
        }
    }
}
