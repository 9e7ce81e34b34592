use crate::core::math::{clamp, Vec2};
use crate::domain::tiles::TileType;

/// Floor height (measured up from the tile's bottom edge) of a slope tile at
/// `width` pixels into the tile from its left edge. Zero for non-slopes.
///
/// `height = (hL + relX * (hR - hL)) * tileHeight`, `relX` clamped to [0, 1].
pub fn slope_height(tile: TileType, width: f32, tile_size: Vec2) -> f32 {
    let Some((left, right)) = tile.slope_edges() else {
        return 0.0;
    };
    let rel_x = clamp(width / tile_size.x, 0.0, 1.0);
    (left + rel_x * (right - left)) * tile_size.y
}
