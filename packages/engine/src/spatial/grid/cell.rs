/// Integer cell index on the unbounded placement grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Block of `width` x `height` cells whose top-left cell is `origin`.
///
/// Non-positive extents cover no cells. Cells past the `i32` edge of the
/// grid are clipped, never wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    pub origin: GridCell,
    pub width: i32,
    pub height: i32,
}

impl Footprint {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: GridCell::new(x, y),
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn cell_count(&self) -> usize {
        let (width, height) = self.clipped_extent();
        width as usize * height as usize
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        let dx = (cell.x as i64) - (self.origin.x as i64);
        let dy = (cell.y as i64) - (self.origin.y as i64);
        dx >= 0 && dy >= 0 && dx < self.width as i64 && dy < self.height as i64
    }

    /// Row-major walk over every covered cell.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> {
        let origin = self.origin;
        let (width, height) = self.clipped_extent();
        (0..height).flat_map(move |dy| {
            (0..width).map(move |dx| GridCell::new(origin.x + dx, origin.y + dy))
        })
    }

    /// Extent that still fits below `i32::MAX` from the origin.
    fn clipped_extent(&self) -> (i32, i32) {
        (
            clip(self.origin.x, self.width),
            clip(self.origin.y, self.height),
        )
    }
}

fn clip(origin: i32, size: i32) -> i32 {
    let room = i32::MAX as i64 - origin as i64 + 1;
    (size.max(0) as i64).min(room) as i32
}
