//! TileCollision - axis-separated sweep of a body's box against tile grids
//!
//! X is resolved first against the box's current rows, then Y against the
//! box's current columns, so a blocked axis never vetoes the other one.
//! Each grid refines the same target; the caller applies the net delta once.

mod resolve;
mod slope;
mod triggers;

pub use resolve::TileSweep;
pub use slope::slope_height;
pub use triggers::{scan_tile_contacts, TileContacts};

/// Pixels pulled in from the far edge of a box when sampling cells, so a box
/// resting exactly on a row boundary does not read the next row.
pub const EDGE_TOLERANCE: f32 = 1.0;
