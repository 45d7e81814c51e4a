//! Screen-to-canvas coordinate transformation.
//!
//! The editor shows the document inside a host view that may scale and
//! offset it. Pointer events arrive in screen pixels and are mapped back into
//! canvas units before they reach the geometry code. Unlike a CAD viewport,
//! both spaces keep the origin at the top-left with +Y pointing down.

use crate::model::Point;

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 10.0;

/// Represents the screen transform of the canvas (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    /// Identity transform: one canvas unit per screen pixel, no offset.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to [0.1, 10]. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the screen position of the canvas origin.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Converts screen pixels to canvas coordinates.
    ///
    /// ```text
    /// canvas_x = (screen_x - pan_x) / zoom
    /// canvas_y = (screen_y - pan_y) / zoom
    /// ```
    pub fn screen_to_canvas(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            (screen_x - self.pan_x) / self.zoom,
            (screen_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts canvas coordinates to screen pixels.
    pub fn canvas_to_screen(&self, point: &Point) -> (f64, f64) {
        (
            point.x * self.zoom + self.pan_x,
            point.y * self.zoom + self.pan_y,
        )
    }

    /// Scales and centers a `canvas_width` x `canvas_height` document inside a
    /// `view_width` x `view_height` host area, leaving `margin` pixels per edge.
    pub fn fit_canvas(
        &mut self,
        canvas_width: f64,
        canvas_height: f64,
        view_width: f64,
        view_height: f64,
        margin: f64,
    ) {
        if canvas_width <= 0.0 || canvas_height <= 0.0 {
            return;
        }
        let usable_w = (view_width - margin * 2.0).max(1.0);
        let usable_h = (view_height - margin * 2.0).max(1.0);
        let zoom = (usable_w / canvas_width)
            .min(usable_h / canvas_height)
            .clamp(MIN_ZOOM, MAX_ZOOM);

        self.zoom = zoom;
        self.pan_x = (view_width - canvas_width * zoom) / 2.0;
        self.pan_y = (view_height - canvas_height * zoom) / 2.0;
    }

    /// Resets to the identity transform.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
