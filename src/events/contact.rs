//! Contact events raised by collision resolution.
//!
//! Every time a mover's hit box is snapped against an obstacle, the movement
//! system triggers a [`ContactEvent`]. The [`record_contact`] observer keeps
//! them in the [`Contacts`] resource so the host can read what touched what
//! during the last step (for sounds, effects, scoring...).
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::body::Axis;
use crate::components::identity::EntityId;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    /// The entity that moved and got snapped.
    pub mover: EntityId,
    /// The obstacle it was snapped against.
    pub obstacle: EntityId,
    pub axis: Axis,
}

/// Contacts raised during the most recent step, in resolution order.
#[derive(Resource, Debug, Clone, Default)]
pub struct Contacts(pub Vec<ContactEvent>);

impl Contacts {
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

pub fn record_contact(trigger: On<ContactEvent>, mut contacts: ResMut<Contacts>) {
    let event = *trigger.event();
    debug!(
        "contact: {} against {} on {:?}",
        event.mover, event.obstacle, event.axis
    );
    contacts.0.push(event);
}
