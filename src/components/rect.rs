//! Axis-aligned rectangle with named anchor points.
//!
//! [`Rect`] is the geometric primitive for both the display box and the
//! hitbox of a [`Body`](super::body::Body). Anchors are a closed set
//! ([`Anchor`]); reading or writing one never changes the rectangle's size.
//!
//! Coordinates follow screen conventions: `y` grows downwards, so `top` is
//! the smaller `y` edge.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Named reference point (or edge) of a rectangle.
///
/// The scalar variants (`Left`, `Top`, `CenterX`, ...) only fix one axis.
/// [`Anchor::canonical`] maps them to the nearest two-axis point so that
/// aligning two boxes is always a single point copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    MidTop,
    MidBottom,
    MidLeft,
    MidRight,
    #[default]
    Center,
    X,
    Y,
    Top,
    Bottom,
    Left,
    Right,
    CenterX,
    CenterY,
}

impl Anchor {
    /// Every anchor, in declaration order.
    pub const ALL: [Anchor; 17] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
        Anchor::MidTop,
        Anchor::MidBottom,
        Anchor::MidLeft,
        Anchor::MidRight,
        Anchor::Center,
        Anchor::X,
        Anchor::Y,
        Anchor::Top,
        Anchor::Bottom,
        Anchor::Left,
        Anchor::Right,
        Anchor::CenterX,
        Anchor::CenterY,
    ];

    /// Map single-axis anchors to their two-axis counterpart.
    ///
    /// Point anchors are returned unchanged.
    pub fn canonical(self) -> Anchor {
        match self {
            Anchor::X | Anchor::Left => Anchor::MidLeft,
            Anchor::Y | Anchor::Top => Anchor::MidTop,
            Anchor::Bottom => Anchor::MidBottom,
            Anchor::Right => Anchor::MidRight,
            Anchor::CenterX | Anchor::CenterY => Anchor::Center,
            Anchor::TopLeft
            | Anchor::TopRight
            | Anchor::BottomLeft
            | Anchor::BottomRight
            | Anchor::MidTop
            | Anchor::MidBottom
            | Anchor::MidLeft
            | Anchor::MidRight
            | Anchor::Center => self,
        }
    }

    /// Lowercase name as used in scene files.
    pub fn name(self) -> &'static str {
        match self {
            Anchor::TopLeft => "topleft",
            Anchor::TopRight => "topright",
            Anchor::BottomLeft => "bottomleft",
            Anchor::BottomRight => "bottomright",
            Anchor::MidTop => "midtop",
            Anchor::MidBottom => "midbottom",
            Anchor::MidLeft => "midleft",
            Anchor::MidRight => "midright",
            Anchor::Center => "center",
            Anchor::X => "x",
            Anchor::Y => "y",
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
            Anchor::Left => "left",
            Anchor::Right => "right",
            Anchor::CenterX => "centerx",
            Anchor::CenterY => "centery",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.name() == wanted)
            .ok_or_else(|| SimError::InvalidAnchor(s.to_string()))
    }
}

/// Axis-aligned box. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size with its top-left corner at the origin.
    pub fn from_size(size: Vec2) -> Self {
        Self::new(0.0, 0.0, size.x, size.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn centerx(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn centery(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn set_left(&mut self, value: f32) {
        self.x = value;
    }

    pub fn set_right(&mut self, value: f32) {
        self.x = value - self.w;
    }

    pub fn set_top(&mut self, value: f32) {
        self.y = value;
    }

    pub fn set_bottom(&mut self, value: f32) {
        self.y = value - self.h;
    }

    pub fn set_centerx(&mut self, value: f32) {
        self.x = value - self.w / 2.0;
    }

    pub fn set_centery(&mut self, value: f32) {
        self.y = value - self.h / 2.0;
    }

    pub fn center(&self) -> Vec2 {
        self.anchor(Anchor::Center)
    }

    pub fn set_center(&mut self, point: Vec2) {
        self.set_anchor(Anchor::Center, point);
    }

    /// Point for the canonical form of `anchor`.
    pub fn anchor(&self, anchor: Anchor) -> Vec2 {
        let (x, y) = match anchor {
            Anchor::TopLeft => (self.left(), self.top()),
            Anchor::TopRight => (self.right(), self.top()),
            Anchor::BottomLeft => (self.left(), self.bottom()),
            Anchor::BottomRight => (self.right(), self.bottom()),
            Anchor::MidTop | Anchor::Y | Anchor::Top => (self.centerx(), self.top()),
            Anchor::MidBottom | Anchor::Bottom => (self.centerx(), self.bottom()),
            Anchor::MidLeft | Anchor::X | Anchor::Left => (self.left(), self.centery()),
            Anchor::MidRight | Anchor::Right => (self.right(), self.centery()),
            Anchor::Center | Anchor::CenterX | Anchor::CenterY => {
                (self.centerx(), self.centery())
            }
        };
        Vec2::new(x, y)
    }

    /// Move the rectangle so the canonical form of `anchor` sits on `point`.
    pub fn set_anchor(&mut self, anchor: Anchor, point: Vec2) {
        match anchor {
            Anchor::TopLeft => {
                self.set_left(point.x);
                self.set_top(point.y);
            }
            Anchor::TopRight => {
                self.set_right(point.x);
                self.set_top(point.y);
            }
            Anchor::BottomLeft => {
                self.set_left(point.x);
                self.set_bottom(point.y);
            }
            Anchor::BottomRight => {
                self.set_right(point.x);
                self.set_bottom(point.y);
            }
            Anchor::MidTop | Anchor::Y | Anchor::Top => {
                self.set_centerx(point.x);
                self.set_top(point.y);
            }
            Anchor::MidBottom | Anchor::Bottom => {
                self.set_centerx(point.x);
                self.set_bottom(point.y);
            }
            Anchor::MidLeft | Anchor::X | Anchor::Left => {
                self.set_left(point.x);
                self.set_centery(point.y);
            }
            Anchor::MidRight | Anchor::Right => {
                self.set_right(point.x);
                self.set_centery(point.y);
            }
            Anchor::Center | Anchor::CenterX | Anchor::CenterY => {
                self.set_centerx(point.x);
                self.set_centery(point.y);
            }
        }
    }

    /// Strict AABB overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}x{}]", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict_and_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn corner_touching_does_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn set_anchor_preserves_size() {
        let mut r = Rect::new(3.0, 4.0, 80.0, 60.0);
        for anchor in Anchor::ALL {
            r.set_anchor(anchor, Vec2::new(150.0, 150.0));
            assert_eq!(r.size(), Vec2::new(80.0, 60.0));
            assert_eq!(r.anchor(anchor), Vec2::new(150.0, 150.0));
        }
    }

    #[test]
    fn anchor_points() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.anchor(Anchor::TopLeft), Vec2::new(10.0, 20.0));
        assert_eq!(r.anchor(Anchor::BottomRight), Vec2::new(110.0, 70.0));
        assert_eq!(r.anchor(Anchor::MidBottom), Vec2::new(60.0, 70.0));
        assert_eq!(r.anchor(Anchor::MidLeft), Vec2::new(10.0, 45.0));
        assert_eq!(r.center(), Vec2::new(60.0, 45.0));
    }

    #[test]
    fn canonical_anchor_table() {
        assert_eq!(Anchor::X.canonical(), Anchor::MidLeft);
        assert_eq!(Anchor::Left.canonical(), Anchor::MidLeft);
        assert_eq!(Anchor::Y.canonical(), Anchor::MidTop);
        assert_eq!(Anchor::Top.canonical(), Anchor::MidTop);
        assert_eq!(Anchor::Bottom.canonical(), Anchor::MidBottom);
        assert_eq!(Anchor::Right.canonical(), Anchor::MidRight);
        assert_eq!(Anchor::CenterX.canonical(), Anchor::Center);
        assert_eq!(Anchor::CenterY.canonical(), Anchor::Center);
        assert_eq!(Anchor::TopRight.canonical(), Anchor::TopRight);
        assert_eq!(Anchor::Center.canonical(), Anchor::Center);
    }

    #[test]
    fn edge_anchors_act_as_their_canonical_point() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        for anchor in Anchor::ALL {
            assert_eq!(r.anchor(anchor), r.anchor(anchor.canonical()), "{anchor}");

            let mut moved = r;
            let mut expected = r;
            moved.set_anchor(anchor, Vec2::new(-7.0, 33.0));
            expected.set_anchor(anchor.canonical(), Vec2::new(-7.0, 33.0));
            assert_eq!(moved, expected, "{anchor}");
        }
    }

    #[test]
    fn parse_anchor_names() {
        assert_eq!("midbottom".parse::<Anchor>().unwrap(), Anchor::MidBottom);
        assert_eq!(" CenterX ".parse::<Anchor>().unwrap(), Anchor::CenterX);
        for anchor in Anchor::ALL {
            assert_eq!(anchor.name().parse::<Anchor>().unwrap(), anchor);
        }
        let err = "middle".parse::<Anchor>().unwrap_err();
        assert!(matches!(err, SimError::InvalidAnchor(name) if name == "middle"));
    }

    #[test]
    fn edge_setters() {
        let mut r = Rect::new(0.0, 0.0, 20.0, 10.0);
        r.set_right(100.0);
        assert_eq!(r.left(), 80.0);
        r.set_bottom(50.0);
        assert_eq!(r.top(), 40.0);
        assert_eq!(r.size(), Vec2::new(20.0, 10.0));
    }
}
