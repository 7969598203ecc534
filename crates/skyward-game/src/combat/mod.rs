//! Combat seam
//!
//! The player never applies damage itself. An attack looks up a target by
//! name through [`TargetLookup`] and hands attacker and target to a
//! [`CombatResolver`].

pub mod dummy;

use skyward_core::EntityId;
use tracing::debug;

pub use dummy::TrainingDummy;

/// Anything that can be hit
pub trait Combatant {
    fn id(&self) -> EntityId;
    fn name(&self) -> &str;
    fn health(&self) -> u32;
    fn take_damage(&mut self, amount: u32);

    fn is_dead(&self) -> bool {
        self.health() == 0
    }
}

/// Snapshot of the attacking side passed to the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attacker {
    pub id: EntityId,
    pub name: String,
    pub attack_power: u32,
}

/// Decides what an attack does to its target
pub trait CombatResolver {
    fn perform_attack(&mut self, attacker: &Attacker, target: &mut dyn Combatant);
}

/// Finds combat targets by name
pub trait TargetLookup {
    fn find_target(&mut self, name: &str) -> Option<&mut dyn Combatant>;
}

impl<C: Combatant> TargetLookup for Vec<C> {
    fn find_target(&mut self, name: &str) -> Option<&mut dyn Combatant> {
        self.iter_mut()
            .find(|c| c.name() == name)
            .map(|c| c as &mut dyn Combatant)
    }
}

/// Collaborators an entity may call into during its tick
pub struct CombatContext<'a> {
    pub targets: &'a mut dyn TargetLookup,
    pub resolver: &'a mut dyn CombatResolver,
}

impl<'a> CombatContext<'a> {
    pub fn new(targets: &'a mut dyn TargetLookup, resolver: &'a mut dyn CombatResolver) -> Self {
        Self { targets, resolver }
    }
}

/// Applies the attacker's power to the target unchanged
#[derive(Debug, Default)]
pub struct DirectHit {
    resolved: u64,
}

impl DirectHit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attacks resolved so far
    pub fn resolved(&self) -> u64 {
        self.resolved
    }
}

impl CombatResolver for DirectHit {
    fn perform_attack(&mut self, attacker: &Attacker, target: &mut dyn Combatant) {
        if target.is_dead() {
            return;
        }
        self.resolved += 1;
        debug!(
            "{} hits {} for {}",
            attacker.name,
            target.name(),
            attacker.attack_power
        );
        target.take_damage(attacker.attack_power);
    }
}
