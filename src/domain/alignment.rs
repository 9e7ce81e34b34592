//! Collider anchor relative to the owning transform's origin.

use serde::{Deserialize, Serialize};

use crate::core::math::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Offset is set by hand and never recomputed.
    #[default]
    None,
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    /// Offset of the box's top-left corner from the transform origin so that
    /// the anchor point lands on the origin. `None` for manual offsets.
    pub fn offset_for(self, size: Vec2, scale: Vec2) -> Option<Vec2> {
        let (fx, fy) = match self {
            Alignment::None => return None,
            Alignment::TopLeft => (0.0, 0.0),
            Alignment::TopCenter => (-0.5, 0.0),
            Alignment::TopRight => (-1.0, 0.0),
            Alignment::CenterLeft => (0.0, -0.5),
            Alignment::Center => (-0.5, -0.5),
            Alignment::CenterRight => (-1.0, -0.5),
            Alignment::BottomLeft => (0.0, -1.0),
            Alignment::BottomCenter => (-0.5, -1.0),
            Alignment::BottomRight => (-1.0, -1.0),
        };
        if size.x <= 0.0 || size.y <= 0.0 {
            return Some(Vec2::zero());
        }
        Some(Vec2::new(size.x * fx, size.y * fy).mul_elem(scale))
    }
}
