use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Axis-aligned rectangle: top-left corner plus size (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    #[inline]
    pub fn left(&self) -> f32 { self.position.x }

    #[inline]
    pub fn top(&self) -> f32 { self.position.y }

    #[inline]
    pub fn right(&self) -> f32 { self.position.x + self.size.x }

    #[inline]
    pub fn bottom(&self) -> f32 { self.position.y + self.size.y }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    /// A rect with a non-positive side takes no part in collision.
    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Strict overlap: touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.left()
            || self.left() >= other.right()
            || self.bottom() <= other.top()
            || self.top() >= other.bottom())
    }

    /// Closest point of the rect to `point`.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.position, self.position + self.size)
    }

    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            position: self.position + delta,
            size: self.size,
        }
    }
}
