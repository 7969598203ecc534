//! Player entity
//!
//! Side-on platformer movement with a discrete action state machine.

mod config;
mod controller;
mod power_up;
mod sprites;
mod state;

pub use config::{PlayerConfig, SpritePaths};
pub use controller::{PlayerAction, PlayerController};
pub use power_up::PowerUp;
pub use sprites::{ClipSpec, PlayerSprites};
pub use state::PlayerState;
