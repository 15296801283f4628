use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::core::utils::clock::now_ms;
use crate::domain::config::GridConfig;
use crate::domain::rectangle::RectId;
use crate::render::DomRenderer;

use super::perf_stats::PlacementStats;
use super::PlacementCore;

/// Browser entry point: a placement core rendering into DOM elements.
///
/// The host wires pointer events on the container to `pointer_down`,
/// `pointer_move`, `pointer_up`/`pointer_leave`, the delay slider to
/// `set_interval_ms`, window resize to `resize`, and rectangle clicks
/// (via `data-rect-id`) to `select_json`.
#[wasm_bindgen]
pub struct PanningGrid {
    core: PlacementCore<DomRenderer, SmallRng>,
}

#[wasm_bindgen]
impl PanningGrid {
    /// Default config, sized to the current window.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: &str,
        count_id: Option<String>,
        marker_id: Option<String>,
    ) -> Result<PanningGrid, JsValue> {
        Self::build(container_id, count_id, marker_id, GridConfig::default())
    }

    /// Same as the constructor with a (possibly partial) JSON config.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        container_id: &str,
        count_id: Option<String>,
        marker_id: Option<String>,
        config_json: &str,
    ) -> Result<PanningGrid, JsValue> {
        let config = GridConfig::from_json(config_json).map_err(to_js)?;
        Self::build(container_id, count_id, marker_id, config)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.core.pointer_down(x, y);
    }

    /// Returns true when this move triggered a placement cycle.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.core.pointer_move(x, y, now_ms()).is_some()
    }

    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.core.pointer_leave();
    }

    /// Returns the interval in effect, for the slider's label.
    pub fn set_interval_ms(&mut self, interval_ms: f64) -> f64 {
        self.core.set_interval_ms(interval_ms)
    }

    #[wasm_bindgen(getter)]
    pub fn interval_ms(&self) -> f64 {
        self.core.interval_ms()
    }

    /// Update the viewport and move the centre marker.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.core.resize(width, height);
    }

    /// Details of a clicked rectangle as JSON, or `undefined` when the click
    /// ended a drag or the rectangle is gone.
    pub fn select_json(&mut self, id: u32) -> Option<String> {
        let details = self.core.select(RectId::from_raw(id))?;
        serde_json::to_string(&details).ok()
    }

    pub fn dismiss(&mut self) {
        self.core.dismiss();
    }

    #[wasm_bindgen(getter)]
    pub fn rectangle_count(&self) -> u32 {
        u32::try_from(self.core.rectangle_count()).unwrap_or(u32::MAX)
    }

    pub fn stats(&self) -> PlacementStats {
        self.core.stats()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}

impl PanningGrid {
    fn build(
        container_id: &str,
        count_id: Option<String>,
        marker_id: Option<String>,
        config: GridConfig,
    ) -> Result<PanningGrid, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);

        let renderer = DomRenderer::new(
            container_id,
            count_id.as_deref(),
            marker_id.as_deref(),
            config.fade_in_ms,
        )
        .map_err(to_js)?;

        let now = now_ms();
        let rng = SmallRng::seed_from_u64(now.to_bits());
        let core = PlacementCore::new(config, renderer, rng, width, height, now).map_err(to_js)?;

        console_log!(
            "pangrid: {}x{} viewport, {}px cells, up to {} rectangles",
            width,
            height,
            core.config().effective_cell_size(),
            core.config().max_rectangles
        );
        Ok(PanningGrid { core })
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
