use crate::domain::rectangle::RectId;

/// View and drag state for one panning surface.
///
/// World coordinates are pixels independent of panning; the screen shows
/// the world shifted by `-view`. Dragging right moves the view left, so
/// content follows the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewSession {
    view_x: f64,
    view_y: f64,
    viewport_width: f64,
    viewport_height: f64,

    dragging: bool,
    last_x: f64,
    last_y: f64,
    // |dx| + |dy| accumulated since the last press
    drag_distance: f64,

    last_fire_ms: f64,
    interval_ms: f64,

    selected: Option<RectId>,
}

impl ViewSession {
    pub fn new(viewport_width: f64, viewport_height: f64, interval_ms: f64, now_ms: f64) -> Self {
        Self {
            view_x: 0.0,
            view_y: 0.0,
            viewport_width,
            viewport_height,
            dragging: false,
            last_x: 0.0,
            last_y: 0.0,
            drag_distance: 0.0,
            last_fire_ms: now_ms,
            interval_ms,
            selected: None,
        }
    }

    pub fn view_offset(&self) -> (f64, f64) {
        (self.view_x, self.view_y)
    }

    /// Viewport centre in screen pixels (where the centre marker sits).
    pub fn center_screen(&self) -> (f64, f64) {
        (self.viewport_width / 2.0, self.viewport_height / 2.0)
    }

    /// Viewport centre in world pixels.
    pub fn center_world(&self) -> (f64, f64) {
        let (cx, cy) = self.center_screen();
        (self.view_x + cx, self.view_y + cy)
    }

    pub fn to_screen(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (world_x - self.view_x, world_y - self.view_y)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_distance(&self) -> f64 {
        self.drag_distance
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn last_fire_ms(&self) -> f64 {
        self.last_fire_ms
    }

    pub fn selected(&self) -> Option<RectId> {
        self.selected
    }

    pub(crate) fn press(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.last_x = x;
        self.last_y = y;
        self.drag_distance = 0.0;
    }

    /// Returns false (and changes nothing) when no drag is in progress.
    pub(crate) fn drag_to(&mut self, x: f64, y: f64) -> bool {
        if !self.dragging {
            return false;
        }
        let dx = x - self.last_x;
        let dy = y - self.last_y;

        self.view_x -= dx;
        self.view_y -= dy;
        self.drag_distance += dx.abs() + dy.abs();

        self.last_x = x;
        self.last_y = y;
        true
    }

    pub(crate) fn release(&mut self) {
        self.dragging = false;
    }

    pub(crate) fn throttle_elapsed(&self, now_ms: f64) -> bool {
        now_ms - self.last_fire_ms >= self.interval_ms
    }

    pub(crate) fn mark_fired(&mut self, now_ms: f64) {
        self.last_fire_ms = now_ms;
    }

    pub(crate) fn set_interval_ms(&mut self, interval_ms: f64) {
        self.interval_ms = interval_ms;
    }

    pub(crate) fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub(crate) fn set_selected(&mut self, selected: Option<RectId>) {
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_moves_the_view_against_the_pointer() {
        let mut s = ViewSession::new(800.0, 600.0, 250.0, 0.0);
        s.press(100.0, 100.0);
        assert!(s.drag_to(130.0, 90.0));
        assert_eq!(s.view_offset(), (-30.0, 10.0));
        assert_eq!(s.drag_distance(), 40.0);
        assert_eq!(s.center_world(), (370.0, 310.0));
        assert_eq!(s.to_screen(0.0, 0.0), (30.0, -10.0));
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let mut s = ViewSession::new(800.0, 600.0, 250.0, 0.0);
        assert!(!s.drag_to(50.0, 50.0));
        assert_eq!(s.view_offset(), (0.0, 0.0));

        s.press(0.0, 0.0);
        s.release();
        assert!(!s.drag_to(50.0, 50.0));
    }

    #[test]
    fn press_resets_drag_distance_but_keeps_the_view() {
        let mut s = ViewSession::new(800.0, 600.0, 250.0, 0.0);
        s.press(0.0, 0.0);
        s.drag_to(-50.0, 0.0);
        s.release();
        s.press(10.0, 10.0);
        assert_eq!(s.drag_distance(), 0.0);
        assert_eq!(s.view_offset(), (50.0, 0.0));
    }

    #[test]
    fn throttle_waits_a_full_interval_from_the_last_fire() {
        let mut s = ViewSession::new(800.0, 600.0, 250.0, 1_000.0);
        assert!(!s.throttle_elapsed(1_249.0));
        assert!(s.throttle_elapsed(1_250.0));
        s.mark_fired(1_250.0);
        assert!(!s.throttle_elapsed(1_400.0));
    }
}
