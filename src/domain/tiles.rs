//! Tile classification for collision grids.
//!
//! Slope variants are named by their left/right edge height in units of
//! {0, 1/2, 1} tile heights: `Slope0_2` rises from 0 on the left edge to half a
//! tile on the right edge.

use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    #[default]
    Empty = 0,
    /// Decoration only, never collides.
    Normal = 1,
    /// Blocks from every direction.
    Solid = 2,
    /// One-way platform: blocks only a body falling onto it.
    UniSolid = 3,
    Slope0_1 = 4,
    Slope1_0 = 5,
    Slope0_2 = 6,
    Slope2_1 = 7,
    Slope1_2 = 8,
    Slope2_0 = 9,
    /// Damage trigger, non-blocking.
    Hazard = 10,
    /// Climbable, non-blocking; the topmost ladder cell acts as a floor.
    Ladder = 11,
}

pub const TILE_TYPE_COUNT: usize = 12;

const ALL_TILES: [TileType; TILE_TYPE_COUNT] = [
    TileType::Empty,
    TileType::Normal,
    TileType::Solid,
    TileType::UniSolid,
    TileType::Slope0_1,
    TileType::Slope1_0,
    TileType::Slope0_2,
    TileType::Slope2_1,
    TileType::Slope1_2,
    TileType::Slope2_0,
    TileType::Hazard,
    TileType::Ladder,
];

impl TileType {
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(id: u8) -> Option<TileType> {
        ALL_TILES.get(id as usize).copied()
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        self == TileType::Solid
    }

    /// Stops a body moving downward onto the tile (floor semantics).
    #[inline]
    pub fn blocks_from_above(self) -> bool {
        matches!(self, TileType::Solid | TileType::UniSolid)
    }

    #[inline]
    pub fn is_slope(self) -> bool {
        self.slope_edges().is_some()
    }

    #[inline]
    pub fn is_ladder(self) -> bool {
        self == TileType::Ladder
    }

    /// Non-blocking tiles that produce a trigger event on contact.
    #[inline]
    pub fn is_trigger(self) -> bool {
        self == TileType::Hazard
    }

    /// Left and right edge heights of a slope, in tile heights.
    pub fn slope_edges(self) -> Option<(f32, f32)> {
        match self {
            TileType::Slope0_1 => Some((0.0, 1.0)),
            TileType::Slope1_0 => Some((1.0, 0.0)),
            TileType::Slope0_2 => Some((0.0, 0.5)),
            TileType::Slope2_1 => Some((0.5, 1.0)),
            TileType::Slope1_2 => Some((1.0, 0.5)),
            TileType::Slope2_0 => Some((0.5, 0.0)),
            _ => None,
        }
    }

    /// Glyph used by `TileGrid::from_ascii`.
    pub fn from_glyph(c: char) -> Option<TileType> {
        let t = match c {
            '.' | ' ' => TileType::Empty,
            '~' => TileType::Normal,
            '#' => TileType::Solid,
            '=' => TileType::UniSolid,
            '/' => TileType::Slope0_1,
            '\\' => TileType::Slope1_0,
            'a' => TileType::Slope0_2,
            'b' => TileType::Slope2_1,
            'c' => TileType::Slope1_2,
            'd' => TileType::Slope2_0,
            '^' => TileType::Hazard,
            'H' => TileType::Ladder,
            _ => return None,
        };
        Some(t)
    }
}

/// Set of tile types, one bit per variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileTypeSet(u16);

impl TileTypeSet {
    pub fn new() -> Self {
        Self(0)
    }

    /// Returns true if the type was not yet present.
    pub fn insert(&mut self, tile: TileType) -> bool {
        let bit = 1u16 << tile.as_u8();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    pub fn contains(&self, tile: TileType) -> bool {
        self.0 & (1u16 << tile.as_u8()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in ascending tile-id order.
    pub fn iter(&self) -> impl Iterator<Item = TileType> + '_ {
        ALL_TILES.iter().copied().filter(move |t| self.contains(*t))
    }
}
