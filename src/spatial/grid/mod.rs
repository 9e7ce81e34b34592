//! Tile Grid - row-major cells of `TileType` with a fixed cell size
//!
//! A grid is immutable once built. Every lookup outside the grid answers
//! `TileType::Empty`.

use crate::core::math::{world_to_cell, Vec2};
use crate::domain::tiles::TileType;

mod indexing;

use indexing::cell_count;

/// Capability the engine needs from a collision layer.
pub trait TileSource {
    /// Cell size in pixels.
    fn tile_size(&self) -> Vec2;

    /// Tile at an integer cell coordinate; `Empty` outside the layer.
    fn tile_type_at(&self, x: i32, y: i32) -> TileType;

    /// Tile under a world-space point.
    fn tile_type_at_world(&self, pos: Vec2) -> TileType {
        let size = self.tile_size();
        self.tile_type_at(world_to_cell(pos.x, size.x), world_to_cell(pos.y, size.y))
    }
}

pub struct TileGrid {
    width: u32,
    height: u32,
    tile_size: Vec2,
    tiles: Vec<TileType>,
}

impl TileGrid {
    /// An all-`Empty` grid.
    pub fn new(width: u32, height: u32, tile_size: Vec2) -> Self {
        Self::from_fn(width, height, tile_size, |_, _| TileType::Empty)
    }

    pub fn from_fn<F>(width: u32, height: u32, tile_size: Vec2, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> TileType,
    {
        let mut tiles = Vec::with_capacity(cell_count(width, height));
        for y in 0..height {
            for x in 0..width {
                tiles.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            tile_size: sanitize_tile_size(tile_size),
            tiles,
        }
    }

    /// Build from a row-major cell list; `tiles.len()` must equal `width * height`.
    pub fn from_tiles(
        width: u32,
        height: u32,
        tile_size: Vec2,
        tiles: Vec<TileType>,
    ) -> Result<Self, String> {
        let expected = cell_count(width, height);
        if tiles.len() != expected {
            return Err(format!(
                "tile count {} does not match {}x{} grid ({} cells)",
                tiles.len(),
                width,
                height,
                expected
            ));
        }
        Ok(Self {
            width,
            height,
            tile_size: sanitize_tile_size(tile_size),
            tiles,
        })
    }

    /// Build from text rows, one glyph per cell (see `TileType::from_glyph`).
    ///
    /// ```
    /// use tilebound_engine::{TileGrid, TileType, Vec2};
    ///
    /// let grid = TileGrid::from_ascii(Vec2::new(16.0, 16.0), &[
    ///     "..H.",
    ///     "..H.",
    ///     "####",
    /// ]).unwrap();
    /// assert_eq!(grid.tile(2, 0), TileType::Ladder);
    /// assert_eq!(grid.tile(0, 2), TileType::Solid);
    /// ```
    pub fn from_ascii(tile_size: Vec2, rows: &[&str]) -> Result<Self, String> {
        let height = rows.len() as u32;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u32;
        let mut tiles = Vec::with_capacity(cell_count(width, height));

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as u32 != width {
                return Err(format!("row {} has {} cells, expected {}", y, row.chars().count(), width));
            }
            for (x, c) in row.chars().enumerate() {
                let t = TileType::from_glyph(c)
                    .ok_or_else(|| format!("unknown tile glyph '{}' at ({}, {})", c, x, y))?;
                tiles.push(t);
            }
        }

        Self::from_tiles(width, height, tile_size, tiles)
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    /// Tile at a cell coordinate; `Empty` when out of range.
    #[inline]
    pub fn tile(&self, x: i32, y: i32) -> TileType {
        if !self.in_bounds(x, y) {
            return TileType::Empty;
        }
        *fast!(self.tiles, [self.index(x as u32, y as u32)])
    }

    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }
}

impl TileSource for TileGrid {
    fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    fn tile_type_at(&self, x: i32, y: i32) -> TileType {
        self.tile(x, y)
    }
}

fn sanitize_tile_size(size: Vec2) -> Vec2 {
    if size.x > 0.0 && size.y > 0.0 && size.is_finite() {
        return size;
    }
    log::warn!("invalid tile size ({}, {}), using 16x16", size.x, size.y);
    Vec2::new(16.0, 16.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TileGrid {
        TileGrid::from_ascii(Vec2::new(16.0, 16.0), &["#..", ".^.", "..H"]).unwrap()
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let g = grid();
        assert_eq!(g.tile(-1, 0), TileType::Empty);
        assert_eq!(g.tile(0, -1), TileType::Empty);
        assert_eq!(g.tile(3, 0), TileType::Empty);
        assert_eq!(g.tile(0, 3), TileType::Empty);
        assert_eq!(g.tile_type_at(100, 100), TileType::Empty);
    }

    #[test]
    fn test_world_lookup_floors() {
        let g = grid();
        assert_eq!(g.tile_type_at_world(Vec2::new(15.9, 15.9)), TileType::Solid);
        assert_eq!(g.tile_type_at_world(Vec2::new(16.0, 16.0)), TileType::Hazard);
        assert_eq!(g.tile_type_at_world(Vec2::new(-0.5, 0.0)), TileType::Empty);
        assert_eq!(g.tile_type_at_world(Vec2::new(40.0, 40.0)), TileType::Ladder);
    }

    #[test]
    fn test_from_tiles_rejects_wrong_length() {
        let err = TileGrid::from_tiles(2, 2, Vec2::splat(8.0), vec![TileType::Solid; 3]);
        assert!(err.is_err());
    }

    #[test]
    fn test_from_ascii_rejects_ragged_rows_and_unknown_glyphs() {
        assert!(TileGrid::from_ascii(Vec2::splat(8.0), &["##", "#"]).is_err());
        assert!(TileGrid::from_ascii(Vec2::splat(8.0), &["#?"]).is_err());
    }

    #[test]
    fn test_invalid_tile_size_falls_back() {
        let g = TileGrid::new(1, 1, Vec2::new(0.0, -3.0));
        assert_eq!(g.tile_size(), Vec2::new(16.0, 16.0));
    }
}
