use std::fmt;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Stable id handed to the host, assigned in spawn order.
///
/// Iteration over movers and obstacles follows this order, which keeps
/// multi-obstacle resolution deterministic.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique human-readable name, used by scene files and intent scripts.
#[derive(Component, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(pub String);
