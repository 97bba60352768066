//! JSON scene layouts.
//!
//! A scene lists the entities to spawn at setup. Group membership, obstacle
//! group and controls are all declared here; nothing is added or removed
//! once the simulation runs.
//!
//! ```json
//! {
//!   "entities": [
//!     {
//!       "label": "p1",
//!       "size": [100, 100],
//!       "location": [200, 200],
//!       "hitbox_size": [80, 80],
//!       "hitbox_anchor": "midbottom",
//!       "groups": ["controllable", "all"],
//!       "collides_with": "all",
//!       "controls": { "up": "W", "down": "S", "left": "A", "right": "D" }
//!     },
//!     { "label": "b1", "size": [100, 100], "location": [200, 400], "groups": ["obstacle", "all"] }
//!   ]
//! }
//! ```
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::components::controlbinding::ControlKeys;
use crate::error::SimError;

/// Everything needed to spawn one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDef {
    pub label: String,
    /// Display box size (sprite dimensions).
    pub size: [f32; 2],
    /// Initial hit box center.
    pub location: [f32; 2],
    /// Independent hit box size; omitted means the hit box is the display box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hitbox_size: Option<[f32; 2]>,
    /// Anchor name, `"center"` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hitbox_anchor: Option<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    /// Obstacle group this entity is resolved against when it moves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collides_with: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<ControlKeys>,
    /// Starting velocity; makes the entity a mover even without controls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<[f32; 2]>,
}

impl EntityDef {
    /// Static entity with a display-sized hit box.
    pub fn new(label: impl Into<String>, size: [f32; 2], location: [f32; 2]) -> Self {
        Self {
            label: label.into(),
            size,
            location,
            hitbox_size: None,
            hitbox_anchor: None,
            groups: Vec::new(),
            collides_with: None,
            controls: None,
            velocity: None,
        }
    }

    pub fn with_hitbox(mut self, size: [f32; 2], anchor: impl Into<String>) -> Self {
        self.hitbox_size = Some(size);
        self.hitbox_anchor = Some(anchor.into());
        self
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn colliding_with(mut self, group: impl Into<String>) -> Self {
        self.collides_with = Some(group.into());
        self
    }

    pub fn with_controls(mut self, keys: ControlKeys) -> Self {
        self.controls = Some(keys);
        self
    }

    pub fn with_velocity(mut self, velocity: [f32; 2]) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn is_mover(&self) -> bool {
        self.controls.is_some() || self.velocity.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub entities: Vec<EntityDef>,
}

impl SceneLayout {
    pub fn from_json_str(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let scene = Self::from_json_str(&text)?;
        info!(
            "Loaded scene {:?} with {} entities",
            path,
            scene.entities.len()
        );
        Ok(scene)
    }

    pub fn to_json_string(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Two players with custom hit boxes and two blocks.
    ///
    /// Player one (WASD) keeps its display box on its hit box's bottom edge,
    /// player two (arrows) is centered; one block uses the full sprite as its
    /// hit box, the other a smaller box pinned to its left side.
    pub fn demo() -> Self {
        let players = ["controllable", "all"];
        let blocks = ["obstacle", "all"];
        Self {
            entities: vec![
                EntityDef::new("p1", [100.0, 100.0], [200.0, 200.0])
                    .with_hitbox([80.0, 80.0], "midbottom")
                    .with_groups(players)
                    .colliding_with("all")
                    .with_controls(ControlKeys::wasd()),
                EntityDef::new("p2", [100.0, 100.0], [400.0, 400.0])
                    .with_hitbox([80.0, 80.0], "center")
                    .with_groups(players)
                    .colliding_with("all")
                    .with_controls(ControlKeys::arrows()),
                EntityDef::new("b1", [100.0, 100.0], [200.0, 400.0]).with_groups(blocks),
                EntityDef::new("b2", [100.0, 100.0], [400.0, 200.0])
                    .with_hitbox([80.0, 80.0], "left")
                    .with_groups(blocks),
            ],
        }
    }
}
