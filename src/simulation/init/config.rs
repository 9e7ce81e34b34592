use serde::{Deserialize, Serialize};

use crate::core::math::{Rect, Vec2};

pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 980.0);
pub const DEFAULT_MAX_SPEED: f32 = 500.0;

/// Engine settings. Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// px/s^2
    pub gravity: Vec2,
    /// Per-axis velocity limit, px/s
    pub max_speed: f32,
    /// Left/top/right limits; the bottom is never enforced
    pub world_bounds: Option<Rect>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            max_speed: DEFAULT_MAX_SPEED,
            world_bounds: None,
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: PhysicsConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid physics config: {}", e))?;
        Ok(config.sanitized())
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    /// Replace every invalid value with its default, logging a warning.
    pub fn sanitized(self) -> Self {
        Self {
            gravity: sanitize_gravity(self.gravity),
            max_speed: sanitize_max_speed(self.max_speed),
            world_bounds: sanitize_world_bounds(self.world_bounds),
        }
    }
}

pub(crate) fn sanitize_gravity(gravity: Vec2) -> Vec2 {
    if gravity.is_finite() {
        return gravity;
    }
    log::warn!("non-finite gravity, using ({}, {})", DEFAULT_GRAVITY.x, DEFAULT_GRAVITY.y);
    DEFAULT_GRAVITY
}

pub(crate) fn sanitize_max_speed(max_speed: f32) -> f32 {
    if max_speed > 0.0 && max_speed.is_finite() {
        return max_speed;
    }
    log::warn!("invalid max speed {}, using {}", max_speed, DEFAULT_MAX_SPEED);
    DEFAULT_MAX_SPEED
}

pub(crate) fn sanitize_world_bounds(bounds: Option<Rect>) -> Option<Rect> {
    let rect = bounds?;
    if rect.position.is_finite() && rect.size.is_finite() && !rect.is_degenerate() {
        return Some(rect);
    }
    log::warn!("ignoring degenerate world bounds {:?}", rect);
    None
}
