//! Error type shared by the simulation core, scene loading and configuration.
//!
//! Construction problems (bad anchor names, negative box sizes, duplicated
//! labels) are configuration bugs: they abort the spawn or scene load that
//! triggered them instead of being patched up. Overlaps and skipped
//! resolutions are regular control flow and never show up here.

use thiserror::Error;

use crate::components::identity::EntityId;

/// Errors raised while building or driving a [`Simulation`](crate::simulation::Simulation).
#[derive(Debug, Error)]
pub enum SimError {
    /// The given text does not name any known anchor.
    #[error("invalid anchor name: {0:?}")]
    InvalidAnchor(String),

    /// A hitbox was given a negative or non-finite size.
    #[error("invalid hitbox size: {width}x{height}")]
    InvalidHitboxSize { width: f32, height: f32 },

    /// A display box was given a negative or non-finite size.
    #[error("invalid display box size: {width}x{height}")]
    InvalidDisplaySize { width: f32, height: f32 },

    /// A velocity component is NaN or infinite.
    #[error("invalid velocity: ({x}, {y})")]
    InvalidVelocity { x: f32, y: f32 },

    /// Two entities were spawned with the same label.
    #[error("label already in use: {0:?}")]
    DuplicateLabel(String),

    /// No entity carries the given label.
    #[error("unknown entity label: {0:?}")]
    UnknownLabel(String),

    /// No entity carries the given id.
    #[error("unknown entity id: {0}")]
    UnknownEntity(EntityId),

    /// The INI configuration could not be read or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// A scene or intent script is not valid JSON for the expected shape.
    #[error("scene parse error: {0}")]
    Scene(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
