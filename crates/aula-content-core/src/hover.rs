//! Hover preview state: a transient, pointer-driven overlay shown for
//! affordances on hover-capable devices.
//!
//! Hover capability is injected as a plain bool so the controller behaves
//! identically with or without a real display. Touch-only environments
//! never show a preview.

use smol_str::SmolStr;

use crate::placeholder::MediaKind;

/// Vertical gap between an affordance and its preview, in CSS pixels.
pub const ANCHOR_GAP: f64 = 10.0;

/// Viewport-space bounding box of a hovered affordance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Where the preview is anchored: horizontal center of the affordance,
/// just below its bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverAnchor {
    pub x: f64,
    pub y: f64,
}

/// The preview currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverPreview {
    pub url: SmolStr,
    pub kind: MediaKind,
    pub anchor: HoverAnchor,
}

/// At most one preview is visible at a time.
#[derive(Clone, Debug)]
pub struct HoverController {
    supports_hover: bool,
    active: Option<HoverPreview>,
}

impl HoverController {
    pub fn new(supports_hover: bool) -> Self {
        Self {
            supports_hover,
            active: None,
        }
    }

    pub fn supports_hover(&self) -> bool {
        self.supports_hover
    }

    pub fn active(&self) -> Option<&HoverPreview> {
        self.active.as_ref()
    }

    /// Pointer entered an affordance: capture its box and show the preview.
    /// No-op on touch-only devices.
    pub fn pointer_enter(&mut self, rect: BoundingBox, url: SmolStr, kind: MediaKind) {
        if !self.supports_hover {
            return;
        }
        self.active = Some(HoverPreview {
            url,
            kind,
            anchor: HoverAnchor {
                x: rect.center_x(),
                y: rect.bottom() + ANCHOR_GAP,
            },
        });
    }

    /// Pointer left the affordance: clear immediately, no debounce.
    pub fn pointer_leave(&mut self) {
        self.active = None;
    }

    /// Also called when the full-screen viewer opens.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> BoundingBox {
        BoundingBox {
            left: 100.0,
            top: 50.0,
            width: 80.0,
            height: 20.0,
        }
    }

    #[test]
    fn test_anchor_below_center() {
        let mut hover = HoverController::new(true);
        hover.pointer_enter(rect(), SmolStr::new("https://x/a.png"), MediaKind::Image);
        let preview = hover.active().expect("preview shown");
        assert_eq!(preview.anchor.x, 140.0);
        assert_eq!(preview.anchor.y, 80.0);
        assert_eq!(preview.kind, MediaKind::Image);
    }

    #[test]
    fn test_touch_only_never_shows() {
        let mut hover = HoverController::new(false);
        hover.pointer_enter(rect(), SmolStr::new("https://x/a.png"), MediaKind::Image);
        assert!(hover.active().is_none());
    }

    #[test]
    fn test_leave_clears_immediately() {
        let mut hover = HoverController::new(true);
        hover.pointer_enter(rect(), SmolStr::new("https://x/a.png"), MediaKind::Image);
        hover.pointer_leave();
        assert!(hover.active().is_none());
    }

    #[test]
    fn test_single_preview_at_a_time() {
        let mut hover = HoverController::new(true);
        hover.pointer_enter(rect(), SmolStr::new("https://x/a.png"), MediaKind::Image);
        hover.pointer_enter(rect(), SmolStr::new("https://x/b.mp4"), MediaKind::Video);
        let preview = hover.active().expect("preview shown");
        assert_eq!(preview.url, "https://x/b.mp4");
        assert_eq!(preview.kind, MediaKind::Video);
    }
}
