//! Direct-manipulation geometry.
//!
//! Pure functions that turn a pointer delta (already in canvas units) into a
//! partial layer update for the active drag mode. Nothing here checks the
//! `locked` flag; the interaction controller refuses to start a gesture on a
//! locked layer, so callers never reach this module for one.

use serde::{Deserialize, Serialize};
use shotcraft_core::constants::{HANDLE_SIZE, MIN_LAYER_SIZE};
use std::fmt;
use std::str::FromStr;

use crate::model::{Layer, LayerUpdate, Point};

/// One of the eight compass-direction grips on a layer's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    /// All handles in drawing order, clockwise from the top-left corner.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::NW,
        ResizeHandle::N,
        ResizeHandle::NE,
        ResizeHandle::E,
        ResizeHandle::SE,
        ResizeHandle::S,
        ResizeHandle::SW,
        ResizeHandle::W,
    ];

    pub fn moves_left_edge(&self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW)
    }

    pub fn moves_right_edge(&self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE)
    }

    pub fn moves_top_edge(&self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW)
    }

    pub fn moves_bottom_edge(&self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW)
    }

    /// Center of this grip on the layer's unrotated bounding box.
    pub fn anchor_point(&self, layer: &Layer) -> Point {
        let (x1, y1, x2, y2) = layer.bounds();
        let cx = (x1 + x2) / 2.0;
        let cy = (y1 + y2) / 2.0;
        match self {
            ResizeHandle::NW => Point::new(x1, y1),
            ResizeHandle::N => Point::new(cx, y1),
            ResizeHandle::NE => Point::new(x2, y1),
            ResizeHandle::E => Point::new(x2, cy),
            ResizeHandle::SE => Point::new(x2, y2),
            ResizeHandle::S => Point::new(cx, y2),
            ResizeHandle::SW => Point::new(x1, y2),
            ResizeHandle::W => Point::new(x1, cy),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeHandle::N => "n",
            ResizeHandle::S => "s",
            ResizeHandle::E => "e",
            ResizeHandle::W => "w",
            ResizeHandle::NE => "ne",
            ResizeHandle::NW => "nw",
            ResizeHandle::SE => "se",
            ResizeHandle::SW => "sw",
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeHandle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" => Ok(ResizeHandle::N),
            "s" => Ok(ResizeHandle::S),
            "e" => Ok(ResizeHandle::E),
            "w" => Ok(ResizeHandle::W),
            "ne" => Ok(ResizeHandle::NE),
            "nw" => Ok(ResizeHandle::NW),
            "se" => Ok(ResizeHandle::SE),
            "sw" => Ok(ResizeHandle::SW),
            other => Err(format!("unknown resize handle '{}'", other)),
        }
    }
}

/// What a drag gesture does to its target layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize(ResizeHandle),
}

/// Computes the partial update produced by dragging `layer` by `(dx, dy)`.
///
/// `Move` translates without any clamping; layers may leave the canvas.
/// `Resize` moves only the edges named by the handle. Left/top edges also
/// shift `x`/`y` by the full delta so the opposite edge stays put. Resulting
/// dimensions are floored at [`MIN_LAYER_SIZE`], and the position shift is
/// not compensated for the floor.
pub fn compute_drag(layer: &Layer, mode: DragMode, dx: f64, dy: f64) -> LayerUpdate {
    let handle = match mode {
        DragMode::Move => return LayerUpdate::position(layer.x + dx, layer.y + dy),
        DragMode::Resize(handle) => handle,
    };

    let mut update = LayerUpdate::default();

    if handle.moves_right_edge() {
        update.width = Some(floor_size(layer.width + dx));
    }
    if handle.moves_left_edge() {
        update.x = Some(layer.x + dx);
        update.width = Some(floor_size(layer.width - dx));
    }
    if handle.moves_bottom_edge() {
        update.height = Some(floor_size(layer.height + dy));
    }
    if handle.moves_top_edge() {
        update.y = Some(layer.y + dy);
        update.height = Some(floor_size(layer.height - dy));
    }

    update
}

fn floor_size(value: f64) -> f64 {
    value.max(MIN_LAYER_SIZE)
}

/// Finds the grip of `layer` under `point`, if any.
pub fn hit_test_handles(layer: &Layer, point: &Point) -> Option<ResizeHandle> {
    let half = HANDLE_SIZE / 2.0;
    ResizeHandle::ALL.into_iter().find(|handle| {
        let anchor = handle.anchor_point(layer);
        (point.x - anchor.x).abs() <= half && (point.y - anchor.y).abs() <= half
    })
}
