// THEORY:
// The seat map only understands surface-local coordinates. This module holds the
// two small collaborators that turn raw pointer events into such coordinates:
// 1.  **SurfaceViewport**: a surface is often displayed at a different size than
//     its pixel resolution (e.g. a 2x backing store on high-density screens). Page
//     coordinates are shifted by the element's origin and scaled by the ratio of
//     surface pixels to displayed pixels, independently per axis.
// 2.  **TapTracker**: on touch screens a release only counts as a tap when the finger
//     barely moved since the press; larger movements are scrolls or drags.

/// Slop allowed between a touch press and release, in page pixels, per axis.
pub const TAP_SLOP: f64 = 10.0;

/// Which kind of device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Where and how large the surface is displayed on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceViewport {
    /// Page x of the displayed surface's left edge.
    pub left: f64,
    /// Page y of the displayed surface's top edge.
    pub top: f64,
    pub display_width: f64,
    pub display_height: f64,
    pub surface_width: u32,
    pub surface_height: u32,
}

impl SurfaceViewport {
    /// Translates a page point to surface-local pixels. A zero display size yields NaN
    /// coordinates, which the seat map treats as out of bounds.
    pub fn to_surface(&self, page_x: f64, page_y: f64) -> (f64, f64) {
        let ratio_x = self.surface_width as f64 / self.display_width;
        let ratio_y = self.surface_height as f64 / self.display_height;
        ((page_x - self.left) * ratio_x, (page_y - self.top) * ratio_y)
    }
}

/// Distinguishes taps from drags for touch input.
#[derive(Debug, Clone, Default)]
pub struct TapTracker {
    pressed_at: Option<(f64, f64)>,
}

impl TapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where a touch started. Mouse presses are not tracked.
    pub fn press(&mut self, kind: PointerKind, page_x: f64, page_y: f64) {
        if kind == PointerKind::Touch {
            self.pressed_at = Some((page_x, page_y));
        }
    }

    /// Returns whether this release should be handled as a tap, and forgets the press.
    pub fn release(&mut self, kind: PointerKind, page_x: f64, page_y: f64) -> bool {
        let pressed_at = self.pressed_at.take();
        match (kind, pressed_at) {
            (PointerKind::Mouse, _) => true,
            (PointerKind::Touch, None) => true,
            (PointerKind::Touch, Some((x, y))) => (page_x - x).abs() <= TAP_SLOP && (page_y - y).abs() <= TAP_SLOP,
        }
    }
}
