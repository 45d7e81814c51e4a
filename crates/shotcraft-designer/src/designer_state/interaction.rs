//! Pointer gestures for designer state.
//!
//! Pointer-move edits go straight to the live canvas without touching the
//! history. The single commit happens when the gesture ends.

use super::DesignerState;
use crate::geometry::{compute_drag, hit_test_handles, DragMode, ResizeHandle};
use crate::model::{LayerId, Point};

/// What lies under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum HitTarget {
    Handle(LayerId, ResizeHandle),
    Layer(LayerId),
    Background,
}

impl DesignerState {
    /// Finds what a pointer-down at `point` would grab.
    ///
    /// Grips of the selected layer win over layer bodies. A hidden layer
    /// has no grips.
    pub fn hit_test(&self, point: &Point) -> HitTarget {
        if let Some(selected) = self.canvas.selected_layer().filter(|l| l.visible) {
            if let Some(handle) = hit_test_handles(selected, point) {
                return HitTarget::Handle(selected.id.clone(), handle);
            }
        }
        match self.hit_test_layer(point) {
            Some(id) => HitTarget::Layer(id),
            None => HitTarget::Background,
        }
    }

    /// Topmost visible layer under `point`.
    pub fn hit_test_layer(&self, point: &Point) -> Option<LayerId> {
        self.canvas.layer_at(point, 0.0)
    }

    /// Pointer-down on a layer body: selects it and starts a move.
    ///
    /// A locked layer is still selected but no gesture starts.
    pub fn pointer_down_on_layer(&mut self, id: &LayerId, point: Point) -> bool {
        self.begin_gesture(id, DragMode::Move, point)
    }

    /// Pointer-down on one of the selected layer's resize grips.
    pub fn pointer_down_on_handle(
        &mut self,
        id: &LayerId,
        handle: ResizeHandle,
        point: Point,
    ) -> bool {
        self.begin_gesture(id, DragMode::Resize(handle), point)
    }

    /// Pointer-down anywhere: hit tests and dispatches.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        match self.hit_test(&point) {
            HitTarget::Handle(id, handle) => self.pointer_down_on_handle(&id, handle, point),
            HitTarget::Layer(id) => self.pointer_down_on_layer(&id, point),
            HitTarget::Background => {
                self.background_click();
                false
            }
        }
    }

    fn begin_gesture(&mut self, id: &LayerId, mode: DragMode, point: Point) -> bool {
        if self.interaction.is_dragging() {
            tracing::debug!(layer = %id, "pointer-down ignored, gesture already active");
            return false;
        }
        let Some(layer) = self.canvas.get_layer(id).cloned() else {
            tracing::debug!(layer = %id, "pointer-down on unknown layer");
            return false;
        };
        if !layer.visible {
            tracing::debug!(layer = %id, "pointer-down on hidden layer ignored");
            return false;
        }
        self.canvas.select(Some(id.clone()));
        self.interaction.begin(&layer, mode, point)
    }

    /// Pointer-move during a gesture: applies the incremental delta live.
    ///
    /// Returns `false` when idle, or when the target has disappeared or
    /// become locked since the gesture started.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let Some(step) = self.interaction.track(point) else {
            return false;
        };
        let Some(layer) = self.canvas.get_layer(&step.layer_id).cloned() else {
            return false;
        };
        if layer.locked {
            return false;
        }
        let update = compute_drag(&layer, step.mode, step.dx, step.dy);
        self.canvas.apply_update(&step.layer_id, &update)
    }

    /// Pointer-up: ends the gesture and commits the resulting layer list.
    pub fn pointer_up(&mut self) -> bool {
        match self.interaction.finish() {
            Some(session) => {
                self.commit();
                tracing::debug!(
                    layer = %session.layer_id,
                    mode = ?session.mode,
                    "gesture committed"
                );
                true
            }
            None => false,
        }
    }

    /// Pointer left the canvas. Same as pointer-up.
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer_up()
    }

    /// Click on empty canvas. Clears the selection when no gesture is active.
    pub fn background_click(&mut self) {
        if self.interaction.is_dragging() {
            return;
        }
        self.canvas.deselect();
    }

    /// Pointer-down in screen pixels.
    pub fn pointer_down_screen(&mut self, screen_x: f64, screen_y: f64) -> bool {
        let point = self.viewport.screen_to_canvas(screen_x, screen_y);
        self.pointer_down(point)
    }

    /// Pointer-move in screen pixels.
    pub fn pointer_move_screen(&mut self, screen_x: f64, screen_y: f64) -> bool {
        let point = self.viewport.screen_to_canvas(screen_x, screen_y);
        self.pointer_move(point)
    }
}
