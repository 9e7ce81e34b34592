use crate::core::math::{world_to_cell, Rect};
use crate::domain::tiles::TileTypeSet;
use crate::spatial::grid::TileSource;

use super::EDGE_TOLERANCE;

/// Special tiles a box touched this frame, merged across grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileContacts {
    /// Distinct trigger tile types touched (one entry per type).
    pub triggers: TileTypeSet,
    pub ladder: bool,
}

/// Scan every cell the box covers.
///
/// Covered range is `floor(min / size) ..= floor((max - 1px) / size)` on
/// each axis, so a box flush against a cell boundary does not touch the next
/// cell.
pub fn scan_tile_contacts(aabb: &Rect, grid: &dyn TileSource, contacts: &mut TileContacts) {
    let ts = grid.tile_size();
    let start_x = world_to_cell(aabb.left(), ts.x);
    let end_x = world_to_cell(aabb.right() - EDGE_TOLERANCE, ts.x);
    let start_y = world_to_cell(aabb.top(), ts.y);
    let end_y = world_to_cell(aabb.bottom() - EDGE_TOLERANCE, ts.y);

    for x in start_x..=end_x {
        for y in start_y..=end_y {
            let tile = grid.tile_type_at(x, y);
            if tile.is_trigger() {
                contacts.triggers.insert(tile);
            } else if tile.is_ladder() {
                contacts.ladder = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;
    use crate::domain::tiles::TileType;
    use crate::spatial::grid::TileGrid;

    #[test]
    fn test_four_hazards_count_once() {
        let g = TileGrid::from_ascii(Vec2::splat(16.0), &["^^..", "^^..", "...."]).unwrap();
        let mut contacts = TileContacts::default();
        scan_tile_contacts(&Rect::new(4.0, 4.0, 20.0, 20.0), &g, &mut contacts);

        assert_eq!(contacts.triggers.len(), 1);
        assert!(contacts.triggers.contains(TileType::Hazard));
        assert!(!contacts.ladder);
    }

    #[test]
    fn test_flush_edge_does_not_reach_next_cell() {
        let g = TileGrid::from_ascii(Vec2::splat(16.0), &[".^", "H."]).unwrap();
        let mut contacts = TileContacts::default();
        // Exactly covers cell (0, 0)
        scan_tile_contacts(&Rect::new(0.0, 0.0, 16.0, 16.0), &g, &mut contacts);
        assert!(contacts.triggers.is_empty());
        assert!(!contacts.ladder);
    }

    #[test]
    fn test_one_pixel_overlap_reaches_next_cell() {
        let g = TileGrid::from_ascii(Vec2::splat(16.0), &[".^"]).unwrap();

        let mut contacts = TileContacts::default();
        scan_tile_contacts(&Rect::new(0.0, 0.0, 17.0, 16.0), &g, &mut contacts);
        assert!(contacts.triggers.contains(TileType::Hazard));

        let mut contacts = TileContacts::default();
        scan_tile_contacts(&Rect::new(0.0, 0.0, 16.5, 16.0), &g, &mut contacts);
        assert!(contacts.triggers.is_empty());
    }

    #[test]
    fn test_ladder_contact_is_flagged_not_reported() {
        let g = TileGrid::from_ascii(Vec2::splat(16.0), &[".H"]).unwrap();
        let mut contacts = TileContacts::default();
        scan_tile_contacts(&Rect::new(10.0, 2.0, 10.0, 10.0), &g, &mut contacts);
        assert!(contacts.ladder);
        assert!(contacts.triggers.is_empty());
    }
}
