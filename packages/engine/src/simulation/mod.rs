//! PlacementCore - the panning session and the placement driver
//!
//! Owns everything that changes while the user drags:
//! - session/    - view offset, viewport, drag bookkeeping, throttle clock
//! - placement/  - one placement cycle (anchor, shuffled directions, FIFO eviction)
//! - commands/   - click selection, clear
//! - init/       - construction and runtime settings
//! - perf/       - cycle timing and cumulative counters
//!
//! Rendering goes through the `Renderer` capability and every random draw
//! through `RandomSource`, so the whole driver runs headless under test.

use std::collections::VecDeque;

use crate::domain::config::{ConfigError, GridConfig};
use crate::domain::content::ContentPalette;
use crate::domain::random::RandomSource;
use crate::domain::rectangle::{RectId, Rectangle, RectangleDetails};
use crate::render::Renderer;
use crate::spatial::grid::{GridCell, SparseGrid};

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "session/session.rs"]
mod session;
#[path = "placement/placement.rs"]
mod placement;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::PanningGrid;
pub use perf_stats::PlacementStats;
pub use placement::CycleReport;
pub use session::ViewSession;

pub struct PlacementCore<R: Renderer, G: RandomSource> {
    config: GridConfig,
    palette: ContentPalette,
    grid: SparseGrid,
    /// Oldest first; eviction pops the front.
    rectangles: VecDeque<Rectangle>,
    session: ViewSession,
    renderer: R,
    rng: G,
    next_id: u32,
    stats: PlacementStats,
}

impl<R: Renderer, G: RandomSource> PlacementCore<R, G> {
    /// Validate `config` and start an empty session whose throttle clock
    /// starts at `now_ms`, so the first cycle fires one interval later.
    pub fn new(
        config: GridConfig,
        renderer: R,
        rng: G,
        viewport_width: f64,
        viewport_height: f64,
        now_ms: f64,
    ) -> Result<Self, ConfigError> {
        init::create_placement_core(config, renderer, rng, viewport_width, viewport_height, now_ms)
    }

    pub fn config(&self) -> &GridConfig { &self.config }

    pub fn grid(&self) -> &SparseGrid { &self.grid }

    pub fn session(&self) -> &ViewSession { &self.session }

    pub fn renderer(&self) -> &R { &self.renderer }

    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }

    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> {
        self.rectangles.iter()
    }

    pub fn rectangle(&self, id: RectId) -> Option<&Rectangle> {
        self.rectangles.iter().find(|r| r.id == id)
    }

    pub fn rectangle_count(&self) -> usize { self.rectangles.len() }

    /// Cumulative counters, refreshed after every cycle.
    pub fn stats(&self) -> PlacementStats {
        self.stats.clone()
    }

    /// Grid cell under the viewport centre.
    pub fn anchor_cell(&self) -> GridCell {
        let (cx, cy) = self.session.center_world();
        self.grid.world_to_grid(cx, cy)
    }

    // === POINTER API ===

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.session.press(x, y);
        self.renderer.set_dragging(true);
    }

    /// Pan by the pointer delta, reposition every live rectangle and, once
    /// the throttle interval has passed, run a placement cycle.
    /// Returns the cycle report when one fired.
    pub fn pointer_move(&mut self, x: f64, y: f64, now_ms: f64) -> Option<CycleReport> {
        if !self.session.drag_to(x, y) {
            return None;
        }
        self.reposition_all();

        if !self.session.throttle_elapsed(now_ms) {
            return None;
        }
        let report = self.run_placement_cycle();
        self.session.mark_fired(now_ms);
        Some(report)
    }

    pub fn pointer_up(&mut self) {
        self.session.release();
        self.renderer.set_dragging(false);
    }

    /// Leaving the surface ends the drag like a release.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// One placement cycle around the current anchor cell, unthrottled.
    pub fn run_placement_cycle(&mut self) -> CycleReport {
        placement::run_placement_cycle(self)
    }

    // === SETTINGS ===

    /// Change the throttle interval; returns the interval now in effect.
    pub fn set_interval_ms(&mut self, interval_ms: f64) -> f64 {
        settings::set_interval_ms(self, interval_ms)
    }

    pub fn interval_ms(&self) -> f64 {
        self.session.interval_ms()
    }

    /// New viewport extent; returns where the centre marker now sits.
    pub fn resize(&mut self, width: f64, height: f64) -> (f64, f64) {
        settings::resize(self, width, height)
    }

    // === COMMANDS ===

    /// Details for a clicked rectangle, unless the click ended a real drag.
    pub fn select(&mut self, id: RectId) -> Option<RectangleDetails> {
        commands::select(self, id)
    }

    pub fn selected(&self) -> Option<RectId> {
        self.session.selected()
    }

    pub fn dismiss(&mut self) {
        commands::dismiss(self)
    }

    /// Retire every rectangle and start over with an empty grid.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    fn reposition_all(&mut self) {
        for rect in &self.rectangles {
            let (sx, sy) = self.session.to_screen(rect.x, rect.y);
            self.renderer.position(rect.id, sx, sy);
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
