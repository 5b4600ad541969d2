//! Full-screen viewer zoom/pan state machine.
//!
//! The viewer owns this state only while open; closing discards it, so the
//! next open starts from the defaults (scale 1, centered). Every transition
//! is total: scale is always clamped and the pan offset is forced back to
//! the origin whenever the image fits, so no input sequence can produce an
//! invalid state.

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 5.0;

/// Wheel zoom steps: scroll-up multiplies, scroll-down divides.
pub const WHEEL_ZOOM_IN: f64 = 1.1;
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Keyboard and button zoom step.
pub const STEP_ZOOM: f64 = 1.2;

/// Target scale for double-click zoom from fit.
pub const DOUBLE_CLICK_SCALE: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerState {
    pub scale: f64,
    pub position: (f64, f64),
    pub dragging: bool,
    drag_anchor: (f64, f64),
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            position: (0.0, 0.0),
            dragging: false,
            drag_anchor: (0.0, 0.0),
        }
    }
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp to the scale bounds; at 1x or below the asset is centered, so
    /// the pan offset snaps back to the origin.
    fn apply_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        if self.scale <= 1.0 {
            self.position = (0.0, 0.0);
        }
    }

    /// Wheel step: a positive delta (scroll down) zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else {
            WHEEL_ZOOM_IN
        };
        self.apply_scale(self.scale * factor);
    }

    pub fn zoom_in(&mut self) {
        self.apply_scale(self.scale * STEP_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.apply_scale(self.scale / STEP_ZOOM);
    }

    /// Toggle between fit and 2x. Zooming in by double-click leaves the
    /// pan offset untouched.
    pub fn double_click(&mut self) {
        if self.scale > 1.0 {
            self.reset();
        } else {
            self.scale = DOUBLE_CLICK_SCALE;
        }
    }

    /// Start a drag if zoomed in, recording the offset between the pointer
    /// and the current position. Returns whether a drag began.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        if self.scale > 1.0 {
            self.dragging = true;
            self.drag_anchor = (x - self.position.0, y - self.position.1);
            true
        } else {
            false
        }
    }

    /// Pan while dragging. Panning is unbounded.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.dragging && self.scale > 1.0 {
            self.position = (x - self.drag_anchor.0, y - self.drag_anchor.1);
        }
    }

    /// Pointer released or left the canvas: the drag ends unconditionally.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Jump to a preset scale (fit / 150% / 200%), same clamp-and-reset
    /// rule as every other zoom path.
    pub fn preset(&mut self, scale: f64) {
        self.apply_scale(scale);
    }

    /// Back to the open defaults.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.position = (0.0, 0.0);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < MAX_SCALE
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > MIN_SCALE
    }

    /// Rounded percentage for the scale indicator.
    pub fn scale_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}
