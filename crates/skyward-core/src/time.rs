//! Fixed-step game clock
//!
//! Gameplay runs at a fixed tick rate. Real frame deltas are accumulated and
//! converted into a whole number of fixed steps per frame.

use serde::{Deserialize, Serialize};

/// Upper bound on fixed steps run for a single frame
pub const MAX_STEPS_PER_FRAME: u32 = 240;

/// Configuration for game time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many in-game seconds pass per real second
    pub time_scale: f32,
    /// Fixed timestep for gameplay ticks (in seconds)
    pub fixed_timestep: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_timestep: 1.0 / 60.0,
            max_delta_time: 0.25,
        }
    }
}

impl TimeConfig {
    /// Ticks per second implied by the fixed timestep
    pub fn tick_rate(&self) -> f32 {
        1.0 / self.fixed_timestep
    }
}

/// Game time tracking
#[derive(Debug, Clone, Default)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Time since game start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Fixed ticks handed out so far
    pub tick_count: u64,
    /// Whether the game is paused
    pub paused: bool,
    fixed_accumulator: f32,
}

impl GameTime {
    /// Create a new game time with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Update the game time with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        let clamped = if raw_delta.is_finite() {
            raw_delta.max(0.0).min(self.config.max_delta_time)
        } else {
            0.0
        };
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return;
        }

        // non-finite scales freeze time
        let scale = if self.config.time_scale.is_finite() {
            self.config.time_scale.max(0.0)
        } else {
            0.0
        };
        self.delta_time = clamped * scale;
        self.total_time += self.delta_time as f64;
        self.fixed_accumulator += self.delta_time;
    }

    /// Get the number of fixed timesteps to process this frame
    pub fn fixed_steps(&mut self) -> u32 {
        let step = self.config.fixed_timestep;
        if !step.is_finite() || step <= 0.0 || !self.fixed_accumulator.is_finite() {
            self.fixed_accumulator = 0.0;
            return 0;
        }

        let mut steps = 0;
        while self.fixed_accumulator >= self.config.fixed_timestep {
            if steps == MAX_STEPS_PER_FRAME {
                // too far behind to catch up; drop the backlog
                self.fixed_accumulator = 0.0;
                break;
            }
            self.fixed_accumulator -= self.config.fixed_timestep;
            steps += 1;
        }
        self.tick_count += steps as u64;
        steps
    }

    /// Length of one fixed step in seconds
    pub fn fixed_dt(&self) -> f32 {
        self.config.fixed_timestep
    }

    /// Get the interpolation factor for rendering between ticks
    pub fn fixed_interpolation(&self) -> f32 {
        self.fixed_accumulator / self.config.fixed_timestep
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal, 2.0 = double speed).
    /// Non-finite scales are ignored.
    pub fn set_time_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.config.time_scale = scale.max(0.0);
        }
    }
}
