//! Per-tick input resources.
//!
//! The host does the real keyboard polling. Each tick it hands the core
//! either a ready-made [`Intents`] map (one [`Intent`] per controllable
//! entity) or the set of [`PressedInputs`], which is translated through each
//! entity's [`ControlBinding`](crate::components::controlbinding::ControlBinding).
use bevy_ecs::prelude::*;
use glam::Vec2;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::components::identity::EntityId;

/// Directions requested for one entity during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
}

impl Intent {
    /// Velocity for this intent at `speed` units per tick.
    ///
    /// Checks up before down and left before right; the first asserted
    /// direction of a pair wins. Nothing asserted on an axis gives zero.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let vy = if self.up {
            -speed
        } else if self.down {
            speed
        } else {
            0.0
        };
        let vx = if self.left {
            -speed
        } else if self.right {
            speed
        } else {
            0.0
        };
        Vec2::new(vx, vy)
    }

    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Intents for the current tick, keyed by entity.
///
/// Entities with a binding but no entry here stop moving.
#[derive(Resource, Debug, Clone, Default)]
pub struct Intents(pub FxHashMap<EntityId, Intent>);

impl Intents {
    pub fn set(&mut self, id: EntityId, intent: Intent) {
        self.0.insert(id, intent);
    }

    pub fn get(&self, id: EntityId) -> Intent {
        self.0.get(&id).copied().unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(EntityId, Intent)> for Intents {
    fn from_iter<T: IntoIterator<Item = (EntityId, Intent)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Host input identifiers held down this tick (e.g. `"W"`, `"Left"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressedInputs(pub FxHashSet<String>);

impl PressedInputs {
    pub fn is_pressed(&self, input: &str) -> bool {
        self.0.contains(input)
    }
}

impl<S: Into<String>> FromIterator<S> for PressedInputs {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
