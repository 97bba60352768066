//! Intent-to-velocity controller.
//!
//! Reads the per-tick [`Intents`] resource and rewrites the [`Velocity`] of
//! every entity carrying a [`ControlBinding`]. Entities do not coast: a
//! missing or idle intent zeroes the velocity.
use bevy_ecs::prelude::*;

use crate::components::controlbinding::ControlBinding;
use crate::components::identity::EntityId;
use crate::components::velocity::Velocity;
use crate::resources::input::Intents;

pub fn control(
    mut query: Query<(&EntityId, &ControlBinding, &mut Velocity)>,
    intents: Res<Intents>,
) {
    for (id, binding, mut velocity) in query.iter_mut() {
        velocity.value = intents.get(*id).velocity(binding.speed);
    }
}
