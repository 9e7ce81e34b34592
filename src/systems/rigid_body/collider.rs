use serde::{Deserialize, Serialize};

use crate::core::math::{Rect, Vec2};
use crate::domain::alignment::Alignment;

use super::transform::Transform2D;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColliderShape {
    Box { size: Vec2 },
    Circle { radius: f32 },
}

impl ColliderShape {
    /// Size of the axis-aligned box enclosing the shape (unscaled).
    pub fn bounding_size(&self) -> Vec2 {
        match *self {
            ColliderShape::Box { size } => size,
            ColliderShape::Circle { radius } => Vec2::splat(radius * 2.0),
        }
    }
}

/// Collision shape attached to a body
#[derive(Clone, Debug)]
pub struct Collider {
    shape: ColliderShape,
    /// Cached from `shape`; refreshed by every shape mutation
    aabb_size: Vec2,
    /// Offset of the box's top-left from the transform origin
    offset: Vec2,
    alignment: Alignment,
    is_trigger: bool,
    is_active: bool,
}

impl Collider {
    pub fn new(shape: ColliderShape) -> Self {
        let shape = sanitize_shape(shape);
        Self {
            shape,
            aabb_size: shape.bounding_size(),
            offset: Vec2::ZERO,
            alignment: Alignment::None,
            is_trigger: false,
            is_active: true,
        }
    }

    pub fn new_box(size: Vec2) -> Self {
        Self::new(ColliderShape::Box { size })
    }

    pub fn new_circle(radius: f32) -> Self {
        Self::new(ColliderShape::Circle { radius })
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.set_offset(offset);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_trigger(mut self, is_trigger: bool) -> Self {
        self.is_trigger = is_trigger;
        self
    }

    #[inline]
    pub fn shape(&self) -> ColliderShape { self.shape }

    /// Cached bounding-box size, unscaled.
    #[inline]
    pub fn size(&self) -> Vec2 { self.aabb_size }

    pub fn set_shape(&mut self, shape: ColliderShape) {
        self.shape = sanitize_shape(shape);
        self.aabb_size = self.shape.bounding_size();
    }

    /// Resize a box collider. No-op on a circle.
    pub fn set_box_size(&mut self, size: Vec2) {
        if let ColliderShape::Box { .. } = self.shape {
            self.set_shape(ColliderShape::Box { size });
        }
    }

    /// Change a circle's radius. No-op on a box.
    pub fn set_radius(&mut self, radius: f32) {
        if let ColliderShape::Circle { .. } = self.shape {
            self.set_shape(ColliderShape::Circle { radius });
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 { self.offset }

    /// Set a manual offset; clears any alignment anchor.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
        self.alignment = Alignment::None;
    }

    #[inline]
    pub fn alignment(&self) -> Alignment { self.alignment }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    #[inline]
    pub fn is_trigger(&self) -> bool { self.is_trigger }

    pub fn set_trigger(&mut self, is_trigger: bool) {
        self.is_trigger = is_trigger;
    }

    #[inline]
    pub fn is_active(&self) -> bool { self.is_active }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// Offset in effect for the given scale: the anchor's offset when aligned,
    /// otherwise the manual one.
    pub fn effective_offset(&self, scale: Vec2) -> Vec2 {
        self.alignment
            .offset_for(self.aabb_size, scale)
            .unwrap_or(self.offset)
    }

    /// World-space box: transform position plus offset, size scaled.
    pub fn world_aabb(&self, transform: &dyn Transform2D) -> Rect {
        let scale = transform.scale();
        Rect::from_position_size(
            transform.position() + self.effective_offset(scale),
            self.aabb_size.mul_elem(scale),
        )
    }
}

fn sanitize_shape(shape: ColliderShape) -> ColliderShape {
    match shape {
        ColliderShape::Box { size } if size.x < 0.0 || size.y < 0.0 || !size.is_finite() => {
            log::warn!("invalid box collider size ({}, {}), using 0x0", size.x, size.y);
            ColliderShape::Box { size: Vec2::ZERO }
        }
        ColliderShape::Circle { radius } if radius < 0.0 || !radius.is_finite() => {
            log::warn!("invalid circle collider radius {}, using 0", radius);
            ColliderShape::Circle { radius: 0.0 }
        }
        other => other,
    }
}
