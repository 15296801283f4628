use wasm_bindgen::prelude::*;

use super::placement::CycleReport;

/// Cumulative placement counters plus a snapshot of the grid after the last cycle.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementStats {
    pub(super) cycles: u32,
    pub(super) attempted: u32,
    pub(super) placed: u32,
    pub(super) skipped: u32,
    pub(super) failed: u32,
    pub(super) evicted: u32,
    pub(super) live_rectangles: u32,
    pub(super) occupied_cells: u32,
    pub(super) last_cycle_ms: f64,
}

impl PlacementStats {
    pub(super) fn record(
        &mut self,
        report: &CycleReport,
        live_rectangles: usize,
        occupied_cells: usize,
        elapsed_ms: f64,
    ) {
        self.cycles = self.cycles.saturating_add(1);
        self.attempted = self.attempted.saturating_add(report.attempted);
        self.placed = self.placed.saturating_add(report.placed);
        self.skipped = self.skipped.saturating_add(report.skipped);
        self.failed = self.failed.saturating_add(report.failed);
        self.evicted = self.evicted.saturating_add(report.evicted);
        self.live_rectangles = saturate(live_rectangles);
        self.occupied_cells = saturate(occupied_cells);
        self.last_cycle_ms = elapsed_ms;
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[wasm_bindgen]
impl PlacementStats {
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> u32 { self.cycles }
    #[wasm_bindgen(getter)]
    pub fn attempted(&self) -> u32 { self.attempted }
    #[wasm_bindgen(getter)]
    pub fn placed(&self) -> u32 { self.placed }
    /// Candidates dropped because their footprint was taken.
    #[wasm_bindgen(getter)]
    pub fn skipped(&self) -> u32 { self.skipped }
    /// Candidates the renderer refused.
    #[wasm_bindgen(getter)]
    pub fn failed(&self) -> u32 { self.failed }
    #[wasm_bindgen(getter)]
    pub fn evicted(&self) -> u32 { self.evicted }
    #[wasm_bindgen(getter)]
    pub fn live_rectangles(&self) -> u32 { self.live_rectangles }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.occupied_cells }
    #[wasm_bindgen(getter)]
    pub fn last_cycle_ms(&self) -> f64 { self.last_cycle_ms }
}
