//! Per-tick displacement component.
//!
//! Entities with a [`Velocity`] are *movers*: the movement system translates
//! their hit box by this amount every tick, one axis at a time. Velocity is
//! written by the control system for entities with a
//! [`ControlBinding`](super::controlbinding::ControlBinding), or directly by
//! the host for scripted movers.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    /// Displacement in world units per tick.
    pub value: Vec2,
}

impl Velocity {
    pub fn new(vx: f32, vy: f32) -> Self {
        Self {
            value: Vec2::new(vx, vy),
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}
