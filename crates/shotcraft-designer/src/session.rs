//! Pointer gesture state machine.
//!
//! A gesture runs from pointer-down on a layer (or one of its resize grips)
//! to pointer-up or pointer-leave. Only one gesture can be active; the
//! controller is either `Idle` or `Dragging`.

use crate::geometry::DragMode;
use crate::model::{Layer, LayerId, Point};

/// The ephemeral state of one drag/resize gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub layer_id: LayerId,
    pub mode: DragMode,
    /// Last observed pointer position in canvas coordinates.
    pub last_pointer: Point,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Incremental movement reported for one pointer-move event.
#[derive(Debug, Clone, PartialEq)]
pub struct DragStep {
    pub layer_id: LayerId,
    pub mode: DragMode,
    pub dx: f64,
    pub dy: f64,
}

/// Owns the `Idle -> Dragging -> Idle` transitions.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging(_))
    }

    pub fn active_session(&self) -> Option<&DragSession> {
        match &self.state {
            InteractionState::Dragging(session) => Some(session),
            InteractionState::Idle => None,
        }
    }

    /// Opens a gesture on `layer`.
    ///
    /// Refused when a gesture is already active or the layer is locked.
    pub fn begin(&mut self, layer: &Layer, mode: DragMode, pointer: Point) -> bool {
        if self.is_dragging() {
            tracing::debug!(layer = %layer.id, "pointer-down ignored, gesture already active");
            return false;
        }
        if layer.locked {
            tracing::debug!(layer = %layer.id, "pointer-down on locked layer rejected");
            return false;
        }
        self.state = InteractionState::Dragging(DragSession {
            layer_id: layer.id.clone(),
            mode,
            last_pointer: pointer,
        });
        true
    }

    /// Records a pointer move and returns the delta since the previous event.
    ///
    /// Deltas are incremental: the recorded position advances to `pointer`.
    pub fn track(&mut self, pointer: Point) -> Option<DragStep> {
        let InteractionState::Dragging(session) = &mut self.state else {
            return None;
        };
        let step = DragStep {
            layer_id: session.layer_id.clone(),
            mode: session.mode,
            dx: pointer.x - session.last_pointer.x,
            dy: pointer.y - session.last_pointer.y,
        };
        session.last_pointer = pointer;
        Some(step)
    }

    /// Closes the active gesture, returning it. `None` when already idle.
    pub fn finish(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            InteractionState::Dragging(session) => Some(session),
            InteractionState::Idle => None,
        }
    }
}
