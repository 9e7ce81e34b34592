use crate::core::math::{world_to_cell, Rect, Vec2};
use crate::domain::tiles::TileType;
use crate::spatial::grid::TileSource;
use crate::systems::rigid_body::Body;

use super::slope::slope_height;
use super::EDGE_TOLERANCE;

/// One body's move for one frame, refined grid by grid.
///
/// `origin` is the box before the move; `target` is the desired top-left,
/// pulled back by every blocking tile found.
#[derive(Clone, Copy, Debug)]
pub struct TileSweep {
    origin: Rect,
    ds: Vec2,
    target: Vec2,
}

impl TileSweep {
    pub fn new(origin: Rect, ds: Vec2) -> Self {
        Self {
            origin,
            ds,
            target: origin.position + ds,
        }
    }

    #[inline]
    pub fn target(&self) -> Vec2 { self.target }

    /// Net translation to apply to the owning transform.
    pub fn displacement(&self) -> Vec2 {
        self.target - self.origin.position
    }

    pub fn resolve(&mut self, body: &mut Body, grid: &dyn TileSource) {
        let tile_size = grid.tile_size();
        self.resolve_x(body, grid, tile_size);
        self.resolve_y(body, grid, tile_size);
    }

    fn resolve_x(&mut self, body: &mut Body, grid: &dyn TileSource, ts: Vec2) {
        let size = self.origin.size;
        // Rows come from the box as it was; only X is being tested
        let top_row = world_to_cell(self.origin.top(), ts.y);
        let bottom_row = world_to_cell(self.origin.bottom() - EDGE_TOLERANCE, ts.y);

        if self.ds.x > 0.0 {
            let col = world_to_cell(self.target.x + size.x, ts.x);
            let top = grid.tile_type_at(col, top_row);
            let bottom = grid.tile_type_at(col, bottom_row);

            if top.is_solid() || bottom.is_solid() {
                body.zero_velocity_x();
                self.target.x = col as f32 * ts.x - size.x;
                body.flags_mut().right = true;
            } else {
                let width = self.target.x + size.x - col as f32 * ts.x;
                self.climb_slope(body, bottom, width, bottom_row, ts);
            }
        } else if self.ds.x < 0.0 {
            let col = world_to_cell(self.target.x, ts.x);
            let top = grid.tile_type_at(col, top_row);
            let bottom = grid.tile_type_at(col, bottom_row);

            if top.is_solid() || bottom.is_solid() {
                body.zero_velocity_x();
                self.target.x = (col + 1) as f32 * ts.x;
                body.flags_mut().left = true;
            } else {
                let width = self.target.x - col as f32 * ts.x;
                self.climb_slope(body, bottom, width, bottom_row, ts);
            }
        }
    }

    /// Lift the box onto a slope met while moving sideways. Vertical velocity
    /// is left alone; the Y pass settles it.
    fn climb_slope(&mut self, body: &mut Body, tile: TileType, width: f32, row: i32, ts: Vec2) {
        let height = slope_height(tile, width, ts);
        if height <= 0.0 {
            return;
        }
        let floor_y = (row + 1) as f32 * ts.y - self.origin.size.y - height;
        if floor_y < self.target.y {
            self.target.y = floor_y;
            body.flags_mut().below = true;
        }
    }

    fn resolve_y(&mut self, body: &mut Body, grid: &dyn TileSource, ts: Vec2) {
        let size = self.origin.size;
        // Columns come from the box as it was; only Y is being tested
        let left_col = world_to_cell(self.origin.left(), ts.x);
        let right_col = world_to_cell(self.origin.right() - EDGE_TOLERANCE, ts.x);

        if self.ds.y > 0.0 {
            let row = world_to_cell(self.target.y + size.y, ts.y);
            let left = grid.tile_type_at(left_col, row);
            let right = grid.tile_type_at(right_col, row);

            if left.blocks_from_above() || right.blocks_from_above() {
                self.land(body, row as f32 * ts.y - size.y);
            } else if left.is_ladder() && right.is_ladder() {
                let above_left = grid.tile_type_at(left_col, row - 1);
                let above_right = grid.tile_type_at(right_col, row - 1);
                let at_ladder_top = !above_left.is_ladder() && !above_right.is_ladder();

                // A climbing body has gravity off and passes through
                if at_ladder_top && body.use_gravity() {
                    self.land(body, row as f32 * ts.y - size.y);
                    body.flags_mut().ladder_top = true;
                }
            } else {
                let width_left = self.target.x - left_col as f32 * ts.x;
                let width_right = self.target.x + size.x - right_col as f32 * ts.x;
                let height = slope_height(left, width_left, ts).max(slope_height(right, width_right, ts));
                if height > 0.0 {
                    let floor_y = (row + 1) as f32 * ts.y - size.y - height;
                    if floor_y < self.target.y {
                        self.land(body, floor_y);
                    }
                }
            }
        } else if self.ds.y < 0.0 {
            let row = world_to_cell(self.target.y, ts.y);
            let left = grid.tile_type_at(left_col, row);
            let right = grid.tile_type_at(right_col, row);

            if left.is_solid() || right.is_solid() {
                body.zero_velocity_y();
                self.target.y = (row + 1) as f32 * ts.y;
                body.flags_mut().above = true;
            }
        }
    }

    fn land(&mut self, body: &mut Body, floor_y: f32) {
        body.zero_velocity_y();
        self.target.y = floor_y;
        body.flags_mut().below = true;
    }
}
