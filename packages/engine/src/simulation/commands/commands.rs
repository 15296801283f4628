use crate::domain::random::RandomSource;
use crate::domain::rectangle::{RectId, RectangleDetails};
use crate::render::Renderer;

use super::perf_stats::PlacementStats;
use super::PlacementCore;

pub(super) fn select<R: Renderer, G: RandomSource>(
    core: &mut PlacementCore<R, G>,
    id: RectId,
) -> Option<RectangleDetails> {
    // A press that turned into a pan is not a click.
    if core.session.drag_distance() > core.config.click_threshold {
        return None;
    }
    let details = core.rectangle(id)?.details();
    core.session.set_selected(Some(id));
    Some(details)
}

pub(super) fn dismiss<R: Renderer, G: RandomSource>(core: &mut PlacementCore<R, G>) {
    core.session.set_selected(None);
}

pub(super) fn clear<R: Renderer, G: RandomSource>(core: &mut PlacementCore<R, G>) {
    let fade_out_ms = core.config.fade_out_ms;
    for rect in core.rectangles.drain(..) {
        core.renderer.retire(rect.id, fade_out_ms);
    }
    core.grid.clear();
    core.session.set_selected(None);
    core.stats = PlacementStats::default();
    core.renderer.set_count(0);
}
