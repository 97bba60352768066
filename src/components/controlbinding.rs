//! Input-driven movement capability.
//!
//! An entity is controllable when it carries a [`ControlBinding`]: one host
//! input identifier per direction plus the speed those inputs produce. The
//! [`control`](crate::systems::control) system reads the per-tick
//! [`Intents`](crate::resources::input::Intents) and rewrites the entity's
//! [`Velocity`](super::velocity::Velocity) from them.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::resources::input::{Intent, PressedInputs};

/// Input identifiers for the four directions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlKeys {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl ControlKeys {
    pub fn new(
        up: impl Into<String>,
        down: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// W/S/A/D.
    pub fn wasd() -> Self {
        Self::new("W", "S", "A", "D")
    }

    /// Arrow keys.
    pub fn arrows() -> Self {
        Self::new("Up", "Down", "Left", "Right")
    }
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct ControlBinding {
    pub keys: ControlKeys,
    /// Per-tick speed on each axis while a direction is held.
    pub speed: f32,
}

impl ControlBinding {
    pub fn new(keys: ControlKeys, speed: f32) -> Self {
        Self { keys, speed }
    }

    /// Translate the host's pressed inputs through this binding table.
    pub fn intent_from_pressed(&self, pressed: &PressedInputs) -> Intent {
        Intent {
            up: pressed.is_pressed(&self.keys.up),
            down: pressed.is_pressed(&self.keys.down),
            left: pressed.is_pressed(&self.keys.left),
            right: pressed.is_pressed(&self.keys.right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_table_selects_own_keys() {
        let p1 = ControlBinding::new(ControlKeys::wasd(), 5.0);
        let p2 = ControlBinding::new(ControlKeys::arrows(), 5.0);
        let pressed = PressedInputs::from_iter(["W", "Right"]);

        assert_eq!(
            p1.intent_from_pressed(&pressed),
            Intent {
                up: true,
                ..Intent::default()
            }
        );
        assert_eq!(
            p2.intent_from_pressed(&pressed),
            Intent {
                right: true,
                ..Intent::default()
            }
        );
    }
}
