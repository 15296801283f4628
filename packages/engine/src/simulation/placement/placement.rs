//! One placement cycle.
//!
//! 1. anchor = grid cell under the viewport centre
//! 2. N = 1..=max_batch rectangles to try
//! 3. directions: Center, then the 8 neighbours shuffled
//! 4. per direction: random aspect -> footprint; taken -> skip (no retry);
//!    free -> render, record, mark; over the ceiling -> evict the oldest

use crate::core::utils::clock::PerfTimer;
use crate::domain::direction::Direction;
use crate::domain::random::RandomSource;
use crate::domain::rectangle::{RectId, Rectangle};
use crate::render::{RenderError, Renderer};
use crate::spatial::grid::Footprint;

use super::PlacementCore;

/// What a single cycle did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub attempted: u32,
    pub placed: u32,
    pub skipped: u32,
    pub failed: u32,
    pub evicted: u32,
}

pub(super) fn run_placement_cycle<R: Renderer, G: RandomSource>(
    core: &mut PlacementCore<R, G>,
) -> CycleReport {
    let timer = PerfTimer::start();
    let anchor = core.anchor_cell();
    let batch = 1 + core.rng.below(core.config.max_batch);
    let candidates = Direction::candidate_order(&mut core.rng);

    let mut report = CycleReport::default();
    for direction in candidates.into_iter().take(batch) {
        report.attempted += 1;

        let aspect = core.palette.aspect(&mut core.rng);
        let footprint = direction.footprint(anchor, aspect);
        if core.grid.is_area_occupied(&footprint) {
            report.skipped += 1;
            continue;
        }

        if let Err(err) = place(core, footprint) {
            console_warn!("pangrid: rectangle at {:?} not placed: {}", footprint.origin, err);
            report.failed += 1;
            continue;
        }
        report.placed += 1;

        if core.rectangles.len() > core.config.max_rectangles && evict_oldest(core).is_some() {
            report.evicted += 1;
        }
        core.renderer.set_count(core.rectangles.len());
    }

    core.stats.record(
        &report,
        core.rectangles.len(),
        core.grid.occupied_count(),
        timer.elapsed_ms(),
    );
    report
}

fn place<R: Renderer, G: RandomSource>(
    core: &mut PlacementCore<R, G>,
    footprint: Footprint,
) -> Result<RectId, RenderError> {
    let (x, y) = core.grid.grid_to_world(footprint.origin);
    let (width, height) = core.grid.footprint_extent(footprint.width, footprint.height);
    let color = core.palette.color(&mut core.rng);
    let content = core.palette.content(&mut core.rng);

    let id = RectId::from_raw(core.next_id);
    let rect = Rectangle {
        id,
        x,
        y,
        width,
        height,
        footprint,
        color,
        content,
    };
    core.renderer.create(&rect)?;
    core.next_id = core.next_id.wrapping_add(1);

    let (sx, sy) = core.session.to_screen(x, y);
    core.renderer.position(id, sx, sy);
    core.renderer.show(id);

    core.grid.mark_area_occupied(&footprint);
    core.rectangles.push_back(rect);
    Ok(id)
}

/// Drop the oldest rectangle: free its cells now, fade its visual out.
pub(super) fn evict_oldest<R: Renderer, G: RandomSource>(
    core: &mut PlacementCore<R, G>,
) -> Option<RectId> {
    let oldest = core.rectangles.pop_front()?;
    core.grid.mark_area_free(&oldest.footprint);
    if core.session.selected() == Some(oldest.id) {
        core.session.set_selected(None);
    }
    core.renderer.retire(oldest.id, core.config.fade_out_ms);
    Some(oldest.id)
}
