//! Skyward Game - Game logic and systems
//!
//! Provides the player controller, input mapping, sprite animation, the
//! combat seam and scene composition.

pub mod animation;
pub mod combat;
pub mod input;
pub mod player;
pub mod scene;

pub use animation::{Animation, AnimationClip, SpriteDraw};
pub use combat::{
    Attacker, CombatContext, CombatResolver, Combatant, DirectHit, TargetLookup, TrainingDummy,
};
pub use input::{InputAction, InputBindings, InputHandler, InputState, PlayerIntent};
pub use player::{
    ClipSpec, PlayerAction, PlayerConfig, PlayerController, PlayerSprites, PlayerState, PowerUp,
    SpritePaths,
};
pub use scene::{Behavior, GameObject, Lifecycle, Scene};
