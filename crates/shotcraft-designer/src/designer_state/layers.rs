//! Layer operations (add, replace, update, z-order, keyboard actions, undo/redo)
//! for designer state.

use super::{DesignerState, LastAction};
use crate::model::{CanvasConfigUpdate, Layer, LayerId, LayerType, LayerUpdate};

impl DesignerState {
    /// Appends a layer on top, selects it and commits. Returns its id.
    pub fn add_layer(&mut self, layer: Layer) -> Option<LayerId> {
        if !self.ensure_idle("add_layer") {
            return None;
        }
        let id = self.canvas.add_layer(layer);
        self.canvas.select(Some(id.clone()));
        self.commit();
        tracing::debug!(layer = %id, "layer added");
        Some(id)
    }

    /// Adds a type-default layer of `layer_type`, centered on the canvas.
    pub fn add_default_layer(&mut self, layer_type: LayerType) -> Option<LayerId> {
        let (width, height) = match layer_type {
            LayerType::Text => (200.0, 50.0),
            LayerType::Shape => (100.0, 100.0),
            LayerType::Device => (240.0, 500.0),
            LayerType::Image => (200.0, 200.0),
        };
        let center = self.canvas.config().center();
        let layer = Layer::new(
            layer_type,
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        );
        self.add_layer(layer)
    }

    pub fn add_text_layer(&mut self) -> Option<LayerId> {
        self.add_default_layer(LayerType::Text)
    }

    pub fn add_shape_layer(&mut self) -> Option<LayerId> {
        self.add_default_layer(LayerType::Shape)
    }

    pub fn add_device_layer(&mut self) -> Option<LayerId> {
        self.add_default_layer(LayerType::Device)
    }

    /// Replaces the whole layer list in one history entry and clears the selection.
    ///
    /// This is the single entry point for generator and pattern output.
    pub fn replace_all_layers(&mut self, layers: Vec<Layer>) -> bool {
        if !self.ensure_idle("replace_all_layers") {
            return false;
        }
        let count = layers.len();
        self.canvas.replace_layers(layers);
        self.commit();
        tracing::info!(count, "layer list replaced");
        true
    }

    /// Applies a property edit as one history entry.
    ///
    /// Geometry fields are dropped for locked layers. Nothing is committed
    /// when the layer is unknown or nothing would change.
    pub fn update_layer(&mut self, id: &LayerId, update: &LayerUpdate) -> bool {
        if !self.ensure_idle("update_layer") {
            return false;
        }
        let before = self.canvas.get_layer(id).cloned();
        if !self.canvas.apply_update(id, update) {
            return false;
        }
        if before.as_ref() == self.canvas.get_layer(id) {
            return false;
        }
        self.commit();
        true
    }

    /// Changes canvas-level settings. Not recorded in the undo history.
    pub fn update_canvas_config(&mut self, update: &CanvasConfigUpdate) {
        self.canvas.update_config(update);
        self.is_modified = true;
    }

    /// Sets the selection. Unknown ids are ignored.
    pub fn select(&mut self, id: Option<LayerId>) {
        self.canvas.select(id);
    }

    pub fn delete_layer(&mut self, id: &LayerId) -> bool {
        if !self.ensure_idle("delete_layer") || !self.canvas.delete_layer(id) {
            return false;
        }
        self.commit();
        true
    }

    pub fn duplicate_layer(&mut self, id: &LayerId) -> Option<LayerId> {
        if !self.ensure_idle("duplicate_layer") {
            return None;
        }
        let copy = self
            .canvas
            .duplicate_layer(id, self.options.duplicate_offset)?;
        self.commit();
        Some(copy)
    }

    pub fn move_layer_up(&mut self, id: &LayerId) -> bool {
        if !self.ensure_idle("move_layer_up") || !self.canvas.move_layer_up(id) {
            return false;
        }
        self.commit();
        true
    }

    pub fn move_layer_down(&mut self, id: &LayerId) -> bool {
        if !self.ensure_idle("move_layer_down") || !self.canvas.move_layer_down(id) {
            return false;
        }
        self.commit();
        true
    }

    pub fn toggle_lock(&mut self, id: &LayerId) -> bool {
        if !self.ensure_idle("toggle_lock") || !self.canvas.toggle_lock(id) {
            return false;
        }
        self.commit();
        true
    }

    pub fn toggle_visibility(&mut self, id: &LayerId) -> bool {
        if !self.ensure_idle("toggle_visibility") || !self.canvas.toggle_visibility(id) {
            return false;
        }
        self.commit();
        true
    }

    /// Deletes the selected layer, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.canvas.selected_id().cloned() {
            Some(id) => self.delete_layer(&id),
            None => false,
        }
    }

    /// Duplicates the selected layer, if any.
    pub fn duplicate_selected(&mut self) -> Option<LayerId> {
        let id = self.canvas.selected_id().cloned()?;
        self.duplicate_layer(&id)
    }

    /// Moves the selected layer by `(dx, dy)`.
    ///
    /// Repeated nudges of the same layer share one history entry, so a held
    /// arrow key undoes in one step. Locked layers do not move.
    pub fn nudge_selected(&mut self, dx: f64, dy: f64) -> bool {
        if !self.ensure_idle("nudge_selected") {
            return false;
        }
        let Some(layer) = self.canvas.selected_layer().cloned() else {
            return false;
        };
        if layer.locked {
            tracing::debug!(layer = %layer.id, "nudge on locked layer rejected");
            return false;
        }
        let update = LayerUpdate::position(layer.x + dx, layer.y + dy);
        if !self.canvas.apply_update(&layer.id, &update) {
            return false;
        }

        let repeat = LastAction::Nudge(layer.id.clone());
        if self.last_action.as_ref() == Some(&repeat) {
            self.history.amend(self.canvas.layers());
            self.is_modified = true;
        } else {
            self.commit();
            self.last_action = Some(repeat);
        }
        true
    }

    /// Nudge by the configured step. `large` uses the larger step (shift+arrow).
    pub fn nudge_selected_step(&mut self, x_dir: f64, y_dir: f64, large: bool) -> bool {
        let step = if large {
            self.options.nudge_step_large
        } else {
            self.options.nudge_step
        };
        self.nudge_selected(x_dir * step, y_dir * step)
    }

    /// Steps back one history entry. Ignored while a drag is active.
    pub fn undo(&mut self) -> bool {
        if !self.ensure_idle("undo") {
            return false;
        }
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.canvas.restore_layers(&snapshot);
        self.last_action = None;
        self.is_modified = true;
        true
    }

    /// Steps forward one history entry. Ignored while a drag is active.
    pub fn redo(&mut self) -> bool {
        if !self.ensure_idle("redo") {
            return false;
        }
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.canvas.restore_layers(&snapshot);
        self.last_action = None;
        self.is_modified = true;
        true
    }
}
