//! Pan/zoom state for the seat map scene.
//!
//! Scale is clamped to [`MIN_SCALE`, `MAX_SCALE`]. Translation is unbounded,
//! so the map may be dragged past its content.

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Pointer offset from the translation, captured when a drag starts.
    pan_anchor: Option<(f64, f64)>,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            pan_anchor: None,
        }
    }
}

/// Clamp to the allowed range and drop the float noise that repeated
/// 0.2 steps accumulate.
fn clamp_scale(scale: f64) -> f64 {
    ((scale * 100.0).round() / 100.0).clamp(MIN_SCALE, MAX_SCALE)
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom_in(&mut self) {
        self.scale = clamp_scale(self.scale + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.scale = clamp_scale(self.scale - ZOOM_STEP);
    }

    /// Back to scale 1 at the origin. An in-progress drag is dropped.
    pub fn reset(&mut self) {
        *self = Viewport::default();
    }

    /// One wheel notch: scrolling down zooms out, scrolling up zooms in.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.zoom_out();
        } else if delta_y < 0.0 {
            self.zoom_in();
        }
    }

    /// Primary button pressed at `(x, y)`.
    pub fn start_pan(&mut self, x: f64, y: f64) {
        self.pan_anchor = Some((x - self.translate_x, y - self.translate_y));
    }

    /// Pointer moved to `(x, y)`. Ignored unless a drag is in progress.
    pub fn pan_to(&mut self, x: f64, y: f64) {
        if let Some((ax, ay)) = self.pan_anchor {
            self.translate_x = x - ax;
            self.translate_y = y - ay;
        }
    }

    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// SVG transform for the scene root.
    pub fn transform(&self) -> String {
        format!(
            "translate({}, {}) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }

    /// Scale as a whole percentage for the zoom readout.
    pub fn percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}
