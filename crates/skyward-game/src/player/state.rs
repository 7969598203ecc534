//! Player action states

use serde::{Deserialize, Serialize};

/// The action/animation state the player is in. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    Idle,
    Run,
    Jump,
    /// Landing; shown for the tick the player touches down
    Fall,
    Hit,
    Attack,
    Dash,
    /// Terminal. Nothing leaves this state.
    Death,
}

impl PlayerState {
    pub const ALL: [PlayerState; 8] = [
        Self::Idle,
        Self::Run,
        Self::Jump,
        Self::Fall,
        Self::Hit,
        Self::Attack,
        Self::Dash,
        Self::Death,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Run => "Run",
            Self::Jump => "Jump",
            Self::Fall => "Fall",
            Self::Hit => "Hit",
            Self::Attack => "Attack",
            Self::Dash => "Dash",
            Self::Death => "Death",
        }
    }

    /// States whose animation plays once instead of looping
    pub fn is_one_shot(self) -> bool {
        matches!(
            self,
            Self::Jump | Self::Hit | Self::Attack | Self::Dash | Self::Death
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Death)
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
