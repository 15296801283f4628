use super::*;

impl SparseGrid {
    pub fn is_occupied(&self, cell: GridCell) -> bool {
        self.occupied.contains(&cell)
    }

    /// True if any cell of `area` is taken. Read-only.
    pub fn is_area_occupied(&self, area: &Footprint) -> bool {
        area.cells().any(|cell| self.occupied.contains(&cell))
    }

    pub fn mark_area_occupied(&mut self, area: &Footprint) {
        self.occupied.extend(area.cells());
    }

    /// Freeing cells that were never marked is a no-op.
    pub fn mark_area_free(&mut self, area: &Footprint) {
        for cell in area.cells() {
            self.occupied.remove(&cell);
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn clear(&mut self) {
        self.occupied.clear();
    }
}
