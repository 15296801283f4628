use std::collections::BTreeMap;

use super::{RenderError, Renderer};
use crate::domain::rectangle::{RectId, Rectangle};

#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Create(RectId),
    Position { id: RectId, x: f64, y: f64 },
    Show(RectId),
    Retire { id: RectId, delay_ms: u32 },
    Count(usize),
    CenterMarker { x: f64, y: f64 },
    Dragging(bool),
}

/// Headless renderer: remembers every call and where each live visual sits.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    ops: Vec<RenderOp>,
    positions: BTreeMap<RectId, (f64, f64)>,
    count: usize,
    refuse_creates: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `create` fail (to exercise the error path).
    pub fn refuse_creates(&mut self, refuse: bool) {
        self.refuse_creates = refuse;
    }

    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<RenderOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn displayed_count(&self) -> usize {
        self.count
    }

    pub fn position_of(&self, id: RectId) -> Option<(f64, f64)> {
        self.positions.get(&id).copied()
    }

    pub fn live_visuals(&self) -> usize {
        self.positions.len()
    }

    pub fn created(&self) -> Vec<RectId> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::Create(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn retired(&self) -> Vec<RectId> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::Retire { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn create(&mut self, rect: &Rectangle) -> Result<(), RenderError> {
        if self.refuse_creates {
            return Err(RenderError::Refused(rect.id.raw()));
        }
        self.ops.push(RenderOp::Create(rect.id));
        self.positions.insert(rect.id, (rect.x, rect.y));
        Ok(())
    }

    fn position(&mut self, id: RectId, screen_x: f64, screen_y: f64) {
        self.ops.push(RenderOp::Position { id, x: screen_x, y: screen_y });
        if let Some(pos) = self.positions.get_mut(&id) {
            *pos = (screen_x, screen_y);
        }
    }

    fn show(&mut self, id: RectId) {
        self.ops.push(RenderOp::Show(id));
    }

    fn retire(&mut self, id: RectId, delay_ms: u32) {
        self.ops.push(RenderOp::Retire { id, delay_ms });
        self.positions.remove(&id);
    }

    fn set_count(&mut self, count: usize) {
        self.ops.push(RenderOp::Count(count));
        self.count = count;
    }

    fn place_center_marker(&mut self, x: f64, y: f64) {
        self.ops.push(RenderOp::CenterMarker { x, y });
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.ops.push(RenderOp::Dragging(dragging));
    }
}
