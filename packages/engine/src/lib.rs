//! Pangrid Engine - placement core for the infinite panning canvas in WASM
//!
//! While the user drags the canvas, rectangles of random shape appear
//! around the viewport centre on an unbounded grid, never overlap, and the
//! oldest fades out once the live ceiling is exceeded.
//!
//! Architecture:
//! - core/        - logging macros, wall clock
//! - spatial/     - sparse occupancy grid, world <-> grid coordinates
//! - domain/      - config, palettes, compass directions, rectangle records
//! - render/      - renderer capability (DOM, recording)
//! - simulation/  - session, placement driver, JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod render;
pub mod simulation;

pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("pangrid engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::{AspectRatio, ConfigError, GridConfig};
pub use domain::random::RandomSource;
pub use domain::rectangle::{Content, RectId, Rectangle, RectangleDetails};
pub use render::{DomRenderer, RecordingRenderer, RenderError, RenderOp, Renderer};
pub use simulation::{CycleReport, PanningGrid, PlacementCore, PlacementStats, ViewSession};
pub use spatial::grid::{Footprint, GridCell, SparseGrid};

/// Default live-rectangle ceiling, for hosts that size UI around it.
#[wasm_bindgen]
pub fn default_max_rectangles() -> u32 {
    domain::config::DEFAULT_MAX_RECTANGLES as u32
}
