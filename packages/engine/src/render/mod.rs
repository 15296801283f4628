//! Renderer - the visual side of placement, kept behind a capability trait.
//!
//! The placement driver only speaks in `RectId`s and screen coordinates.
//! `DomRenderer` turns that into absolutely positioned `div`s in the page;
//! `RecordingRenderer` keeps an op log for headless hosts and tests.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::domain::rectangle::{RectId, Rectangle};

mod dom;
mod recording;

pub use dom::DomRenderer;
pub use recording::{RecordingRenderer, RenderOp};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("renderer refused rectangle {0}")]
    Refused(u32),
}

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        RenderError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub trait Renderer {
    /// Build the visual for a new rectangle. On error the rectangle is not placed.
    fn create(&mut self, rect: &Rectangle) -> Result<(), RenderError>;

    /// Move a rectangle's visual to screen coordinates (world minus view offset).
    fn position(&mut self, id: RectId, screen_x: f64, screen_y: f64);

    /// Start the fade-in.
    fn show(&mut self, id: RectId);

    /// Fade out, then drop the visual after `delay_ms`.
    fn retire(&mut self, id: RectId, delay_ms: u32);

    /// Mirror the live rectangle count.
    fn set_count(&mut self, count: usize);

    fn place_center_marker(&mut self, _x: f64, _y: f64) {}

    fn set_dragging(&mut self, _dragging: bool) {}
}
