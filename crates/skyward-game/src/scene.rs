//! Scene objects and the per-tick update loop
//!
//! A scene object is plain data (id, name) wrapped around a boxed
//! [`Behavior`]. While one object updates, every other object is reachable as
//! a combat target by name.

use std::any::Any;

use skyward_core::EntityId;
use tracing::{info, trace};

use crate::animation::SpriteDraw;
use crate::combat::{CombatContext, CombatResolver, Combatant, TargetLookup};
use crate::input::InputState;

/// Returned from an update to keep or remove the object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    Destroy,
}

/// Per-tick logic of a scene object
pub trait Behavior {
    fn update(&mut self, input: &InputState, combat: &mut CombatContext<'_>) -> Lifecycle;

    fn draw(&self) -> Option<SpriteDraw> {
        None
    }

    /// Objects that can be attacked expose themselves here
    fn as_combatant_mut(&mut self) -> Option<&mut dyn Combatant> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

pub struct GameObject {
    id: EntityId,
    name: String,
    behavior: Box<dyn Behavior>,
}

impl GameObject {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn behavior(&self) -> &dyn Behavior {
        self.behavior.as_ref()
    }

    /// Borrow the behavior as its concrete type
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.behavior.as_any().downcast_ref::<T>()
    }
}

/// Every object except the one currently updating
struct OtherObjects<'a> {
    objects: &'a mut [Option<GameObject>],
}

impl TargetLookup for OtherObjects<'_> {
    fn find_target(&mut self, name: &str) -> Option<&mut dyn Combatant> {
        self.objects
            .iter_mut()
            .flatten()
            .filter(|object| object.name == name)
            .find_map(|object| object.behavior.as_combatant_mut())
    }
}

/// Owns the objects of one level and ticks them in spawn order
pub struct Scene {
    objects: Vec<Option<GameObject>>,
    resolver: Box<dyn CombatResolver>,
    tick_count: u64,
}

impl Scene {
    pub fn new(resolver: Box<dyn CombatResolver>) -> Self {
        Self {
            objects: Vec::new(),
            resolver,
            tick_count: 0,
        }
    }

    /// Add an object; it is updated from the next tick on
    pub fn spawn(&mut self, name: impl Into<String>, behavior: impl Behavior + 'static) -> EntityId {
        let id = EntityId::new();
        let name = name.into();
        info!("Spawned '{}' ({})", name, id);
        self.objects.push(Some(GameObject {
            id,
            name,
            behavior: Box::new(behavior),
        }));
        id
    }

    pub fn find_by_name(&self, name: &str) -> Option<&GameObject> {
        self.objects.iter().flatten().find(|object| object.name == name)
    }

    pub fn get(&self, id: EntityId) -> Option<&GameObject> {
        self.objects.iter().flatten().find(|object| object.id == id)
    }

    /// Reach an object's combat side from outside the tick (scripted damage)
    pub fn combatant_mut(&mut self, name: &str) -> Option<&mut dyn Combatant> {
        self.objects
            .iter_mut()
            .flatten()
            .filter(|object| object.name == name)
            .find_map(|object| object.behavior.as_combatant_mut())
    }

    pub fn len(&self) -> usize {
        self.objects.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Update every object once. Objects that ask to be destroyed are
    /// dropped, releasing whatever they own. Returns the removed ids.
    pub fn tick(&mut self, input: &InputState) -> Vec<EntityId> {
        self.tick_count += 1;
        trace!("Scene tick {} ({} objects)", self.tick_count, self.len());

        let mut destroyed = Vec::new();
        for index in 0..self.objects.len() {
            let Some(mut object) = self.objects[index].take() else {
                continue;
            };

            let lifecycle = {
                let mut others = OtherObjects {
                    objects: &mut self.objects,
                };
                let mut combat = CombatContext::new(&mut others, self.resolver.as_mut());
                object.behavior.update(input, &mut combat)
            };

            match lifecycle {
                Lifecycle::Active => self.objects[index] = Some(object),
                Lifecycle::Destroy => {
                    info!("Removed '{}' ({}) on tick {}", object.name, object.id, self.tick_count);
                    destroyed.push(object.id);
                }
            }
        }

        self.objects.retain(Option::is_some);
        destroyed
    }

    /// Draw commands for every visible object, in spawn order
    pub fn draw(&self) -> Vec<SpriteDraw> {
        self.objects
            .iter()
            .flatten()
            .filter_map(|object| object.behavior.draw())
            .collect()
    }
}
