use crate::domain::random::RandomSource;
use crate::render::Renderer;

use super::PlacementCore;

/// Negative or non-finite intervals are ignored.
pub(super) fn set_interval_ms<R: Renderer, G: RandomSource>(
    core: &mut PlacementCore<R, G>,
    interval_ms: f64,
) -> f64 {
    if interval_ms.is_finite() && interval_ms >= 0.0 {
        core.session.set_interval_ms(interval_ms);
        core.config.interval_ms = interval_ms;
    }
    core.session.interval_ms()
}

pub(super) fn resize<R: Renderer, G: RandomSource>(
    core: &mut PlacementCore<R, G>,
    width: f64,
    height: f64,
) -> (f64, f64) {
    core.session.set_viewport(width.max(0.0), height.max(0.0));
    let (mx, my) = core.session.center_screen();
    core.renderer.place_center_marker(mx, my);
    (mx, my)
}
