use std::collections::VecDeque;

use crate::domain::config::{ConfigError, GridConfig};
use crate::domain::content::ContentPalette;
use crate::domain::random::RandomSource;
use crate::render::Renderer;
use crate::spatial::grid::SparseGrid;

use super::perf_stats::PlacementStats;
use super::session::ViewSession;
use super::PlacementCore;

pub(super) fn create_placement_core<R: Renderer, G: RandomSource>(
    config: GridConfig,
    mut renderer: R,
    rng: G,
    viewport_width: f64,
    viewport_height: f64,
    now_ms: f64,
) -> Result<PlacementCore<R, G>, ConfigError> {
    config.validate()?;

    let session = ViewSession::new(viewport_width, viewport_height, config.interval_ms, now_ms);
    let (mx, my) = session.center_screen();
    renderer.place_center_marker(mx, my);
    renderer.set_count(0);

    Ok(PlacementCore {
        palette: ContentPalette::from_config(&config),
        grid: SparseGrid::from_config(&config),
        rectangles: VecDeque::with_capacity(config.max_rectangles.saturating_add(1).min(1024)),
        session,
        renderer,
        rng,
        next_id: 1,
        stats: PlacementStats::default(),
        config,
    })
}
