//! Structural layer operations for Canvas: delete, duplicate, reorder, flags.

use crate::model::LayerId;
use crate::selection_manager::SelectionManager;

use super::Canvas;

impl Canvas {
    /// Removes a layer. Clears the selection if it was the deleted layer.
    pub fn delete_layer(&mut self, id: &LayerId) -> bool {
        self.selection_manager.delete(&mut self.layers, id)
    }

    /// Duplicates a layer right above the original and selects the copy.
    pub fn duplicate_layer(&mut self, id: &LayerId, offset: f64) -> Option<LayerId> {
        self.selection_manager.duplicate(&mut self.layers, id, offset)
    }

    /// Moves a layer one step toward the top.
    pub fn move_layer_up(&mut self, id: &LayerId) -> bool {
        SelectionManager::move_up(&mut self.layers, id)
    }

    /// Moves a layer one step toward the bottom.
    pub fn move_layer_down(&mut self, id: &LayerId) -> bool {
        SelectionManager::move_down(&mut self.layers, id)
    }

    pub fn toggle_lock(&mut self, id: &LayerId) -> bool {
        SelectionManager::toggle_lock(&mut self.layers, id)
    }

    pub fn toggle_visibility(&mut self, id: &LayerId) -> bool {
        SelectionManager::toggle_visibility(&mut self.layers, id)
    }

    /// Layers that take part in rendering and export, bottom first.
    pub fn visible_layers(&self) -> impl Iterator<Item = &std::sync::Arc<crate::model::Layer>> {
        self.layers.iter().filter(|l| l.visible)
    }
}
