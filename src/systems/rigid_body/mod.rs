//! RigidBody - per-entity physical state, collision shape and placement
//!
//! A registered object is a loose bag of these three capabilities. The
//! engine reads the transform, integrates the body, and tests the collider's
//! world-space box; none of them knows about the others.

mod body;
mod collider;
mod transform;

pub use body::{Body, CollisionFlags, DEFAULT_MASS};
pub use collider::{Collider, ColliderShape};
pub use transform::{Transform, Transform2D};
