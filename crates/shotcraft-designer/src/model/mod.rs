//! Layer model: the schema of a single visual element.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod layer;
mod style;

pub use layer::{Layer, LayerId, LayerType, LayerUpdate};
pub use style::{FontWeight, LayerStyle, TextAlign};

/// Ordered layer sequence. The order is the z-order: first is bottom, last is top.
///
/// Layers are reference counted so a snapshot of the list is a cheap
/// structural copy that shares unchanged records.
pub type LayerList = Vec<Arc<Layer>>;

/// A position in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed document coordinate space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub background_color: String,
}

impl CanvasConfig {
    pub fn new(width: f64, height: f64, background_color: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background_color: background_color.into(),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn apply(&mut self, update: &CanvasConfigUpdate) {
        if let Some(width) = update.width.filter(|w| w.is_finite() && *w > 0.0) {
            self.width = width;
        }
        if let Some(height) = update.height.filter(|h| h.is_finite() && *h > 0.0) {
            self.height = height;
        }
        if let Some(color) = &update.background_color {
            self.background_color = color.clone();
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        use shotcraft_core::constants::*;
        Self::new(
            DEFAULT_CANVAS_WIDTH,
            DEFAULT_CANVAS_HEIGHT,
            DEFAULT_BACKGROUND_COLOR,
        )
    }
}

/// Partial change to the canvas configuration. Non-positive sizes are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasConfigUpdate {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background_color: Option<String>,
}

impl CanvasConfigUpdate {
    pub fn background(color: impl Into<String>) -> Self {
        Self {
            background_color: Some(color.into()),
            ..Default::default()
        }
    }
}
