use serde::{Deserialize, Serialize};

use crate::core::math::Vec2;

/// Placement capability the engine consumes.
///
/// Positions are only ever moved by a delta, never set absolutely, so a
/// collider offset from the origin survives resolution.
pub trait Transform2D {
    fn position(&self) -> Vec2;
    fn scale(&self) -> Vec2;
    fn translate(&mut self, delta: Vec2);
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub scale: Vec2,
    /// Radians. Carried for collaborators; physics ignores it.
    pub rotation: f32,
}

impl Transform {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl Transform2D for Transform {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn scale(&self) -> Vec2 {
        self.scale
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
