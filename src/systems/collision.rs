//! Axis-separated collision resolution.
//!
//! Resolution is discrete and happens after each single-axis move: whatever
//! the mover now overlaps gets pushed out along that axis only, by snapping
//! the leading hit box edge onto the obstacle's facing edge. Which edge
//! leads is decided by the sign of the mover's velocity on that axis; a mover
//! that is not moving on the axis is left where it is.
//!
//! With several simultaneous overlaps the obstacles are processed in the
//! order given and each snap overrides the previous one. Fast movers can
//! tunnel through thin obstacles; that is accepted.

use glam::Vec2;
use smallvec::SmallVec;

use crate::components::body::{Axis, Body, Edge};
use crate::components::identity::EntityId;
use crate::components::rect::Rect;

/// Hit box of a potential obstacle, captured before resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: EntityId,
    pub hit_box: Rect,
}

/// Obstacles a mover was snapped against, in resolution order.
pub type ContactList = SmallVec<[EntityId; 4]>;

/// Push `body` out of every obstacle it overlaps, along `axis` only.
///
/// The obstacle carrying `own` is skipped, so an entity can be resolved
/// against a group it belongs to. Overlaps are gathered once up front; the
/// display box is re-aligned after every individual snap.
pub fn resolve_axis(
    own: EntityId,
    body: &mut Body,
    velocity: Vec2,
    obstacles: &[Obstacle],
    axis: Axis,
) -> ContactList {
    let mut contacts = ContactList::new();

    let speed = axis.of(velocity);
    if speed == 0.0 {
        return contacts;
    }

    let hit_box = body.hit_box();
    let hits: SmallVec<[&Obstacle; 4]> = obstacles
        .iter()
        .filter(|o| o.id != own && hit_box.overlaps(&o.hit_box))
        .collect();

    for hit in hits {
        match (axis, speed < 0.0) {
            (Axis::X, true) => body.set_edge(Edge::Left, hit.hit_box.right()),
            (Axis::X, false) => body.set_edge(Edge::Right, hit.hit_box.left()),
            (Axis::Y, true) => body.set_edge(Edge::Top, hit.hit_box.bottom()),
            (Axis::Y, false) => body.set_edge(Edge::Bottom, hit.hit_box.top()),
        }
        contacts.push(hit.id);
    }

    contacts
}

/// Keep the hit box inside `bounds`, each axis independently.
///
/// Returns true if the body was moved.
pub fn clamp_to_bounds(body: &mut Body, bounds: Rect) -> bool {
    let hit_box = body.hit_box();
    let mut moved = false;

    if hit_box.left() < bounds.left() {
        body.set_edge(Edge::Left, bounds.left());
        moved = true;
    } else if hit_box.right() > bounds.right() {
        body.set_edge(Edge::Right, bounds.right());
        moved = true;
    }

    if hit_box.top() < bounds.top() {
        body.set_edge(Edge::Top, bounds.top());
        moved = true;
    } else if hit_box.bottom() > bounds.bottom() {
        body.set_edge(Edge::Bottom, bounds.bottom());
        moved = true;
    }

    moved
}
