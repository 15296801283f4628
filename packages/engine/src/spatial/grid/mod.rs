//! SparseGrid - occupancy set over an unbounded integer grid
//!
//! Placed rectangles never overlap, so a cell is either free or owned by
//! exactly one live rectangle. Only membership is ever asked for, which
//! keeps the store a plain hash set: memory grows with the live footprint,
//! not with how far the view has been dragged.
//!
//! Coordinates:
//!   world (pixels) --floor(/ effective)--> grid cell
//!   grid cell --(* effective + margin)--> world top-left of the cell's content box
//!
//! `effective = cell_size + 2 * margin`, so every cell carries a `margin`
//! gutter on each side.

use std::collections::HashSet;

use crate::domain::config::GridConfig;

mod cell;
mod occupancy;

pub use cell::{Footprint, GridCell};

pub struct SparseGrid {
    margin: f64,
    effective: f64,
    occupied: HashSet<GridCell>,
}

impl SparseGrid {
    /// `cell_size` must be positive and `margin` non-negative
    /// (`GridConfig::validate` enforces both).
    pub fn new(cell_size: f64, margin: f64) -> Self {
        Self {
            margin,
            effective: cell_size + margin * 2.0,
            occupied: HashSet::new(),
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.cell_size, config.cell_margin)
    }

    pub fn effective_cell_size(&self) -> f64 { self.effective }

    /// Floor division of pixel coordinates by the effective cell size.
    pub fn world_to_grid(&self, x: f64, y: f64) -> GridCell {
        GridCell::new(
            (x / self.effective).floor() as i32,
            (y / self.effective).floor() as i32,
        )
    }

    /// Top-left pixel of a cell's content box (inside the margin gutter).
    pub fn grid_to_world(&self, cell: GridCell) -> (f64, f64) {
        (
            cell.x as f64 * self.effective + self.margin,
            cell.y as f64 * self.effective + self.margin,
        )
    }

    /// Pixel size of a block spanning `width` x `height` cells.
    /// Interior gutters are covered; only the outer margin is left free.
    pub fn footprint_extent(&self, width: i32, height: i32) -> (f64, f64) {
        (self.span(width), self.span(height))
    }

    fn span(&self, cells: i32) -> f64 {
        if cells <= 0 {
            return 0.0;
        }
        cells as f64 * self.effective - self.margin * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> SparseGrid {
        SparseGrid::new(80.0, 4.0)
    }

    #[test]
    fn effective_size_folds_margin_on_both_sides() {
        assert_eq!(grid().effective_cell_size(), 88.0);
    }

    #[test]
    fn world_to_grid_floors_negative_coordinates() {
        let g = grid();
        assert_eq!(g.world_to_grid(0.0, 0.0), GridCell::new(0, 0));
        assert_eq!(g.world_to_grid(87.9, 88.0), GridCell::new(0, 1));
        assert_eq!(g.world_to_grid(-0.5, -88.0), GridCell::new(-1, -1));
        assert_eq!(g.world_to_grid(-88.5, 400.0), GridCell::new(-2, 4));
    }

    #[test]
    fn grid_aligned_coordinates_round_trip() {
        let g = grid();
        for &(x, y) in &[(0, 0), (3, -7), (-12, 5), (100, 100)] {
            let cell = GridCell::new(x, y);
            let (wx, wy) = g.grid_to_world(cell);
            assert_eq!(g.world_to_grid(wx, wy), cell);
            assert_eq!(g.grid_to_world(g.world_to_grid(wx, wy)), (wx, wy));
        }
    }

    #[test]
    fn footprint_extent_covers_interior_gutters() {
        let g = grid();
        assert_eq!(g.footprint_extent(1, 1), (80.0, 80.0));
        assert_eq!(g.footprint_extent(3, 2), (256.0, 168.0));
        assert_eq!(g.footprint_extent(0, -1), (0.0, 0.0));
    }

    #[test]
    fn marked_footprint_reports_every_subregion_until_freed() {
        let mut g = grid();
        let area = Footprint::new(2, 3, 3, 4);
        g.mark_area_occupied(&area);

        assert!(g.is_area_occupied(&area));
        assert!(g.is_area_occupied(&Footprint::new(3, 4, 1, 1)));
        assert!(g.is_area_occupied(&Footprint::new(4, 6, 5, 5)));
        assert!(!g.is_area_occupied(&Footprint::new(5, 3, 2, 4)));

        // Partially freeing keeps the rest of the footprint reported.
        g.mark_area_free(&Footprint::new(2, 3, 3, 3));
        assert!(g.is_area_occupied(&area));
        assert!(!g.is_area_occupied(&Footprint::new(2, 3, 3, 3)));

        g.mark_area_free(&area);
        assert!(!g.is_area_occupied(&area));
        assert_eq!(g.occupied_count(), 0);
    }

    #[test]
    fn mark_and_free_are_idempotent() {
        let mut g = grid();
        let area = Footprint::new(-1, -1, 2, 2);
        g.mark_area_occupied(&area);
        g.mark_area_occupied(&area);
        assert_eq!(g.occupied_count(), 4);

        g.mark_area_free(&area);
        g.mark_area_free(&area);
        g.mark_area_free(&Footprint::new(50, 50, 3, 3));
        assert_eq!(g.occupied_count(), 0);
    }

    #[test]
    fn second_unit_footprint_at_origin_is_occupied() {
        let mut g = grid();
        let unit = Footprint::new(0, 0, 1, 1);
        assert!(!g.is_area_occupied(&unit));
        g.mark_area_occupied(&unit);
        assert!(g.is_area_occupied(&unit));
        assert!(g.is_occupied(GridCell::new(0, 0)));
    }

    #[test]
    fn empty_footprint_is_never_occupied() {
        let mut g = grid();
        g.mark_area_occupied(&Footprint::new(0, 0, 4, 4));
        assert!(!g.is_area_occupied(&Footprint::new(1, 1, 0, 3)));
        g.mark_area_occupied(&Footprint::new(9, 9, -2, 2));
        assert_eq!(g.occupied_count(), 16);
    }

    #[test]
    fn footprint_cells_walk_row_major() {
        let cells: Vec<_> = Footprint::new(1, 1, 2, 2).cells().collect();
        assert_eq!(
            cells,
            vec![
                GridCell::new(1, 1),
                GridCell::new(2, 1),
                GridCell::new(1, 2),
                GridCell::new(2, 2),
            ]
        );
        assert!(Footprint::new(1, 1, 2, 2).contains(GridCell::new(2, 2)));
        assert!(!Footprint::new(1, 1, 2, 2).contains(GridCell::new(3, 2)));
    }
}
