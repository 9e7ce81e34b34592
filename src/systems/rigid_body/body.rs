use serde::{Deserialize, Serialize};

use crate::core::math::Vec2;

/// Mass used when a non-positive or non-finite mass is supplied.
pub const DEFAULT_MASS: f32 = 1.0;

/// Contacts found during the current frame. All cleared at the start of
/// every update, before any resolution runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFlags {
    pub below: bool,
    pub above: bool,
    pub left: bool,
    pub right: bool,
    /// Overlapping any ladder cell.
    pub ladder: bool,
    /// Standing on the topmost ladder cell.
    pub ladder_top: bool,
}

impl CollisionFlags {
    pub const BELOW: u32 = 1 << 0;
    pub const ABOVE: u32 = 1 << 1;
    pub const LEFT: u32 = 1 << 2;
    pub const RIGHT: u32 = 1 << 3;
    pub const LADDER: u32 = 1 << 4;
    pub const LADDER_TOP: u32 = 1 << 5;

    /// Packed form for the JS boundary.
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.below { bits |= Self::BELOW; }
        if self.above { bits |= Self::ABOVE; }
        if self.left { bits |= Self::LEFT; }
        if self.right { bits |= Self::RIGHT; }
        if self.ladder { bits |= Self::LADDER; }
        if self.ladder_top { bits |= Self::LADDER_TOP; }
        bits
    }

    pub fn any(&self) -> bool {
        self.bits() != 0
    }
}

/// Body - mass, velocity and accumulated force of one entity
#[derive(Clone, Debug)]
pub struct Body {
    /// Mass in kg, always > 0
    mass: f32,
    /// Velocity in px/s
    velocity: Vec2,
    /// Force accumulated since the last update, in N
    force: Vec2,
    use_gravity: bool,
    enabled: bool,
    flags: CollisionFlags,
}

impl Body {
    pub fn new(mass: f32) -> Self {
        Self {
            mass: sanitize_mass(mass),
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            use_gravity: true,
            enabled: true,
            flags: CollisionFlags::default(),
        }
    }

    #[inline]
    pub fn mass(&self) -> f32 { self.mass }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = sanitize_mass(mass);
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 { self.velocity }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn force(&self) -> Vec2 { self.force }

    /// Accumulate a force for the next update. Ignored while disabled.
    pub fn add_force(&mut self, force: Vec2) {
        if self.enabled {
            self.force += force;
        }
    }

    pub fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }

    #[inline]
    pub fn use_gravity(&self) -> bool { self.use_gravity }

    pub fn set_use_gravity(&mut self, use_gravity: bool) {
        self.use_gravity = use_gravity;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool { self.enabled }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // === Collision flags (written by the engine only) ===

    pub fn flags(&self) -> CollisionFlags { self.flags }

    pub fn collided_below(&self) -> bool { self.flags.below }

    pub fn collided_above(&self) -> bool { self.flags.above }

    pub fn collided_left(&self) -> bool { self.flags.left }

    pub fn collided_right(&self) -> bool { self.flags.right }

    pub fn collided_ladder(&self) -> bool { self.flags.ladder }

    pub fn collided_ladder_top(&self) -> bool { self.flags.ladder_top }

    pub(crate) fn flags_mut(&mut self) -> &mut CollisionFlags {
        &mut self.flags
    }

    pub(crate) fn reset_flags(&mut self) {
        self.flags = CollisionFlags::default();
    }

    /// Clamp each velocity component to `[-max_speed, max_speed]`.
    pub(crate) fn clamp_velocity(&mut self, max_speed: f32) {
        let limit = Vec2::splat(max_speed);
        self.velocity = self.velocity.clamp(-limit, limit);
    }

    pub(crate) fn zero_velocity_x(&mut self) {
        self.velocity.x = 0.0;
    }

    pub(crate) fn zero_velocity_y(&mut self) {
        self.velocity.y = 0.0;
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(DEFAULT_MASS)
    }
}

fn sanitize_mass(mass: f32) -> f32 {
    if mass > 0.0 && mass.is_finite() {
        return mass;
    }
    log::warn!("invalid body mass {}, using {}", mass, DEFAULT_MASS);
    DEFAULT_MASS
}
