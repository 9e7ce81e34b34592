use super::*;

/// Cell count of a `width x height` grid, computed in `usize`.
#[inline]
pub(crate) fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl TileGrid {
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_row_major() {
        let g = TileGrid::new(5, 3, Vec2::splat(16.0));
        assert_eq!(g.index(4, 2), 14);
        assert!(g.in_bounds(4, 2));
        assert!(!g.in_bounds(5, 0));
        assert!(!g.in_bounds(0, -1));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_cell_count_does_not_wrap_in_u32() {
        assert_eq!(cell_count(65_536, 65_537), 4_295_032_832);
        assert_eq!(cell_count(0, u32::MAX), 0);
    }
}
