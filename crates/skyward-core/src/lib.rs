//! Skyward Core - Core types and utilities shared by every Skyward crate
//!
//! This crate provides the foundational types used throughout the game:
//! - 2D math primitives (re-exported from glam)
//! - Entity identifiers, facing and the 2D transform
//! - Fixed-step game clock

pub mod time;
pub mod types;

pub use glam::Vec2;
pub use time::{GameTime, TimeConfig, MAX_STEPS_PER_FRAME};
pub use types::{EntityId, Facing, Transform2D};
