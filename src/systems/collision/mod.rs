//! Collision - body-vs-body overlap tests and static push-out
//!
//! Brute-force O(n^2); there is no broad phase beyond the per-pair box test.

mod pairs;
mod pushout;
mod shapes;

pub use pairs::{resolution_for, BodyClass, PairResolution};
pub use pushout::{push_out, PUSH_OUT_EPSILON};
pub use shapes::shapes_overlap;
