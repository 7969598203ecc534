//! Stationary target used for attack practice and headless runs

use std::any::Any;

use skyward_core::EntityId;
use tracing::info;

use super::{CombatContext, Combatant};
use crate::input::InputState;
use crate::scene::{Behavior, Lifecycle};

/// A target that only takes hits. Leaves the scene once destroyed.
#[derive(Debug, Clone)]
pub struct TrainingDummy {
    id: EntityId,
    name: String,
    health: u32,
    max_health: u32,
    hits_taken: u32,
}

impl TrainingDummy {
    pub fn new(name: impl Into<String>, health: u32) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            health,
            max_health: health,
            hits_taken: 0,
        }
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn hits_taken(&self) -> u32 {
        self.hits_taken
    }
}

impl Combatant for TrainingDummy {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn take_damage(&mut self, amount: u32) {
        if self.health == 0 {
            return;
        }
        self.hits_taken += 1;
        self.health = self.health.saturating_sub(amount);
    }
}

impl Behavior for TrainingDummy {
    fn update(&mut self, _input: &InputState, _combat: &mut CombatContext<'_>) -> Lifecycle {
        if self.health == 0 {
            info!("{} destroyed after {} hits", self.name, self.hits_taken);
            return Lifecycle::Destroy;
        }
        Lifecycle::Active
    }

    fn as_combatant_mut(&mut self) -> Option<&mut dyn Combatant> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
