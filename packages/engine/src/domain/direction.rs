//! Compass directions around the anchor cell.
//!
//! Offset rules per axis component `d`, for a rectangle `size` cells long:
//! - `0`  -> straddles the anchor: `anchor - floor(size / 2)`
//! - `-1` -> ends just before the anchor: `anchor - size`
//! - `+1` -> starts just after the anchor: `anchor + 1`

use crate::domain::config::AspectRatio;
use crate::domain::random::RandomSource;
use crate::spatial::grid::{Footprint, GridCell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const NEIGHBOURS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(dx, dy)` with y growing downwards.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Center => (0, 0),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Center first, then the eight neighbours in a fresh random order.
    pub fn candidate_order<G: RandomSource>(rng: &mut G) -> [Direction; 9] {
        let mut neighbours = Self::NEIGHBOURS;
        rng.shuffle(&mut neighbours);

        let mut order = [Direction::Center; 9];
        order[1..].copy_from_slice(&neighbours);
        order
    }

    /// Footprint of an `aspect`-shaped rectangle placed in this direction from `anchor`.
    pub fn footprint(self, anchor: GridCell, aspect: AspectRatio) -> Footprint {
        let (dx, dy) = self.offset();
        Footprint::new(
            axis_origin(anchor.x, dx, aspect.width),
            axis_origin(anchor.y, dy, aspect.height),
            aspect.width,
            aspect.height,
        )
    }
}

fn axis_origin(anchor: i32, component: i32, size: i32) -> i32 {
    match component {
        0 => anchor.saturating_sub(size.div_euclid(2)),
        c if c < 0 => anchor.saturating_sub(size),
        _ => anchor.saturating_add(1),
    }
}
