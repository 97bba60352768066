//! Per-tick axis-separated movement.
//!
//! Movers (entities with a [`Velocity`]) are processed one at a time in
//! [`EntityId`] order. For each mover:
//! 1. move along X, resolve X against its obstacle group;
//! 2. move along Y, resolve Y against the same group;
//! 3. clamp to the world bounds when enabled.
//!
//! The obstacle hit boxes are re-read for every mover, so a mover sees the
//! positions earlier movers reached during this same tick. Each snap raises
//! a [`ContactEvent`].
use bevy_ecs::prelude::*;

use crate::components::body::{Axis, Body};
use crate::components::group::{CollidesWith, Groups};
use crate::components::identity::EntityId;
use crate::components::velocity::Velocity;
use crate::events::contact::ContactEvent;
use crate::resources::gameconfig::GameConfig;
use crate::systems::collision::{Obstacle, clamp_to_bounds, resolve_axis};

pub fn movement(
    mut bodies: Query<(&EntityId, &mut Body, Option<&Groups>)>,
    movers: Query<(Entity, &EntityId, &Velocity, Option<&CollidesWith>)>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    let mut order: Vec<_> = movers.iter().collect();
    order.sort_by_key(|(_, id, _, _)| **id);

    let bounds = config.world_bounds();

    for (entity, id, velocity, collides_with) in order {
        let obstacles: Vec<Obstacle> = match collides_with {
            Some(group) => {
                let mut obstacles: Vec<Obstacle> = bodies
                    .iter()
                    .filter(|(_, _, groups)| groups.is_some_and(|g| g.contains(group.name())))
                    .map(|(obstacle_id, body, _)| Obstacle {
                        id: *obstacle_id,
                        hit_box: body.hit_box(),
                    })
                    .collect();
                obstacles.sort_by_key(|o| o.id);
                obstacles
            }
            None => Vec::new(),
        };

        let Ok((_, mut body, _)) = bodies.get_mut(entity) else {
            continue;
        };
        let velocity = velocity.value;

        for axis in [Axis::X, Axis::Y] {
            body.move_axis(axis, velocity);
            for obstacle in resolve_axis(*id, &mut body, velocity, &obstacles, axis) {
                commands.trigger(ContactEvent {
                    mover: *id,
                    obstacle,
                    axis,
                });
            }
        }

        if config.clamp_to_bounds {
            clamp_to_bounds(&mut body, bounds);
        }
    }
}
