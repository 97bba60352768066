//! Display box / hitbox pair for a simulated entity.
//!
//! A [`Body`] owns two rectangles:
//! - the *display box*, sized like the entity's sprite, which is what a
//!   renderer draws;
//! - the *hit box*, which is what collision tests use and what movement
//!   actually moves.
//!
//! The display box follows the hit box through a single anchor point
//! ([`Body::hitbox_anchor`]): after every hit box mutation that anchor point
//! of the display box is copied from the hit box. Both rectangles are
//! private and every mutating method re-aligns before returning, so no
//! caller can observe a stale display box.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::rect::{Anchor, Rect};
use crate::error::SimError;

/// Movement / resolution axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component of `v` along this axis.
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// Hit box edge that can be snapped or clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Body {
    display_box: Rect,
    hit_box: Rect,
    hitbox_anchor: Anchor,
    shared_box: bool,
}

fn valid_size(size: Vec2) -> bool {
    size.is_finite() && size.x >= 0.0 && size.y >= 0.0
}

impl Body {
    /// Build a body whose hit box is centered on `location`.
    ///
    /// Without `hitbox_size` the hit box is the display box itself
    /// (`shared_box`), and the anchor is irrelevant. Single-axis anchors are
    /// stored in canonical form.
    pub fn new(
        display_size: Vec2,
        location: Vec2,
        hitbox_size: Option<Vec2>,
        hitbox_anchor: Anchor,
    ) -> Result<Self, SimError> {
        if !valid_size(display_size) {
            return Err(SimError::InvalidDisplaySize {
                width: display_size.x,
                height: display_size.y,
            });
        }
        if let Some(size) = hitbox_size {
            if !valid_size(size) {
                return Err(SimError::InvalidHitboxSize {
                    width: size.x,
                    height: size.y,
                });
            }
        }

        let display_box = Rect::from_size(display_size);
        let hit_box = hitbox_size.map_or(display_box, Rect::from_size);
        let mut body = Self {
            display_box,
            hit_box,
            hitbox_anchor: hitbox_anchor.canonical(),
            shared_box: hitbox_size.is_none(),
        };
        body.hit_box.set_center(location);
        body.align_display_to_hitbox();
        Ok(body)
    }

    /// Convenience for bodies whose hit box is the display box.
    pub fn shared(display_size: Vec2, location: Vec2) -> Result<Self, SimError> {
        Self::new(display_size, location, None, Anchor::Center)
    }

    pub fn display_box(&self) -> Rect {
        self.display_box
    }

    pub fn hit_box(&self) -> Rect {
        self.hit_box
    }

    /// Canonical (two-axis) anchor binding both boxes.
    pub fn hitbox_anchor(&self) -> Anchor {
        self.hitbox_anchor
    }

    pub fn shared_box(&self) -> bool {
        self.shared_box
    }

    /// Copy the anchor point from the hit box to the display box.
    pub fn align_display_to_hitbox(&mut self) {
        if self.shared_box {
            self.display_box = self.hit_box;
        } else {
            let point = self.hit_box.anchor(self.hitbox_anchor);
            self.display_box.set_anchor(self.hitbox_anchor, point);
        }
    }

    /// Shift the hit box along one axis by that axis' velocity component.
    pub fn move_axis(&mut self, axis: Axis, velocity: Vec2) {
        match axis {
            Axis::X => self.hit_box.x += velocity.x,
            Axis::Y => self.hit_box.y += velocity.y,
        }
        self.align_display_to_hitbox();
    }

    /// Put one hit box edge at `value`, keeping its size.
    pub fn set_edge(&mut self, edge: Edge, value: f32) {
        match edge {
            Edge::Left => self.hit_box.set_left(value),
            Edge::Right => self.hit_box.set_right(value),
            Edge::Top => self.hit_box.set_top(value),
            Edge::Bottom => self.hit_box.set_bottom(value),
        }
        self.align_display_to_hitbox();
    }

    /// Teleport the hit box center.
    pub fn set_location(&mut self, location: Vec2) {
        self.hit_box.set_center(location);
        self.align_display_to_hitbox();
    }

    /// True if the display box sits where the anchor rule puts it.
    pub fn is_aligned(&self) -> bool {
        if self.shared_box {
            self.display_box == self.hit_box
        } else {
            self.display_box.anchor(self.hitbox_anchor) == self.hit_box.anchor(self.hitbox_anchor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_hitbox_is_centered_and_anchored() {
        let body = Body::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(150.0, 150.0),
            Some(Vec2::new(80.0, 80.0)),
            Anchor::MidBottom,
        )
        .unwrap();

        assert_eq!(body.hit_box().center(), Vec2::new(150.0, 150.0));
        assert_eq!(body.hit_box().size(), Vec2::new(80.0, 80.0));
        assert_eq!(body.display_box().size(), Vec2::new(100.0, 100.0));
        assert_eq!(
            body.display_box().anchor(Anchor::MidBottom),
            body.hit_box().anchor(Anchor::MidBottom)
        );
        assert_eq!(body.display_box(), Rect::new(100.0, 90.0, 100.0, 100.0));
        assert!(!body.shared_box());
    }

    #[test]
    fn shared_box_tracks_hitbox_exactly() {
        let mut body = Body::shared(Vec2::new(100.0, 100.0), Vec2::new(200.0, 400.0)).unwrap();
        assert!(body.shared_box());
        assert_eq!(body.hit_box(), Rect::new(150.0, 350.0, 100.0, 100.0));
        assert_eq!(body.display_box(), body.hit_box());

        body.move_axis(Axis::X, Vec2::new(7.0, 3.0));
        assert_eq!(body.hit_box().x, 157.0);
        assert_eq!(body.hit_box().y, 350.0);
        assert_eq!(body.display_box(), body.hit_box());
    }

    #[test]
    fn single_axis_anchor_is_canonicalized() {
        let body = Body::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(400.0, 200.0),
            Some(Vec2::new(80.0, 80.0)),
            Anchor::Left,
        )
        .unwrap();
        assert_eq!(body.hitbox_anchor(), Anchor::MidLeft);
        assert_eq!(body.display_box().left(), body.hit_box().left());
        assert_eq!(body.display_box().centery(), body.hit_box().centery());
    }

    #[test]
    fn every_mutation_keeps_alignment() {
        let mut body = Body::new(
            Vec2::new(64.0, 48.0),
            Vec2::new(10.0, 10.0),
            Some(Vec2::new(20.0, 30.0)),
            Anchor::TopRight,
        )
        .unwrap();
        assert!(body.is_aligned());
        body.move_axis(Axis::X, Vec2::new(-5.0, 0.0));
        assert!(body.is_aligned());
        body.move_axis(Axis::Y, Vec2::new(0.0, 12.0));
        assert!(body.is_aligned());
        body.set_edge(Edge::Bottom, 300.0);
        assert!(body.is_aligned());
        assert_eq!(body.hit_box().bottom(), 300.0);
        body.set_location(Vec2::new(-40.0, 0.0));
        assert!(body.is_aligned());
        assert_eq!(body.hit_box().size(), Vec2::new(20.0, 30.0));
    }

    #[test]
    fn move_axis_only_touches_one_axis() {
        let mut body = Body::shared(Vec2::new(10.0, 10.0), Vec2::new(0.0, 0.0)).unwrap();
        body.move_axis(Axis::Y, Vec2::new(5.0, -5.0));
        assert_eq!(body.hit_box().x, -5.0);
        assert_eq!(body.hit_box().y, -10.0);
    }

    #[test]
    fn negative_sizes_are_rejected() {
        let err = Body::new(
            Vec2::new(10.0, 10.0),
            Vec2::ZERO,
            Some(Vec2::new(-1.0, 5.0)),
            Anchor::Center,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidHitboxSize { .. }));

        let err = Body::shared(Vec2::new(10.0, f32::NAN), Vec2::ZERO).unwrap_err();
        assert!(matches!(err, SimError::InvalidDisplaySize { .. }));
    }
}
