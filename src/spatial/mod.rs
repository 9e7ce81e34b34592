//! Spatial - stable storage for registered objects and the tile grid.

pub mod arena;
pub mod grid;
