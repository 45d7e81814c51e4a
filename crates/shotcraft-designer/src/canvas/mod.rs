//! Canvas holding the ordered layer sequence, the selection and the document size.

mod operations;

use std::sync::Arc;

use crate::model::{
    CanvasConfig, CanvasConfigUpdate, Layer, LayerId, LayerList, LayerUpdate, Point,
};
use crate::selection_manager::SelectionManager;

/// Document state: layers in z-order, active selection and canvas configuration.
///
/// The canvas is the only writer of layer records. Every edit swaps in a new
/// `Arc<Layer>`, so snapshots handed to the history never observe later edits.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    layers: LayerList,
    pub selection_manager: SelectionManager,
    config: CanvasConfig,
}

impl Canvas {
    /// Creates an empty canvas with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty canvas with the given configuration.
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            layers: LayerList::new(),
            selection_manager: SelectionManager::new(),
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Applies a partial configuration change.
    pub fn update_config(&mut self, update: &CanvasConfigUpdate) {
        self.config.apply(update);
    }

    /// The layer sequence, bottom first.
    pub fn layers(&self) -> &LayerList {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Gets a layer by ID.
    pub fn get_layer(&self, id: &LayerId) -> Option<&Arc<Layer>> {
        self.layers.iter().find(|l| &l.id == id)
    }

    pub fn index_of(&self, id: &LayerId) -> Option<usize> {
        self.layers.iter().position(|l| &l.id == id)
    }

    pub fn contains(&self, id: &LayerId) -> bool {
        self.index_of(id).is_some()
    }

    /// Gets the selected layer ID.
    pub fn selected_id(&self) -> Option<&LayerId> {
        self.selection_manager.selected_id()
    }

    pub fn selected_layer(&self) -> Option<&Arc<Layer>> {
        self.selected_id().and_then(|id| self.get_layer(id))
    }

    /// Sets the selection. Ids that are not on the canvas are ignored.
    pub fn select(&mut self, id: Option<LayerId>) {
        match id {
            Some(id) if !self.contains(&id) => {
                tracing::debug!(layer = %id, "select ignored, unknown layer");
            }
            other => self.selection_manager.select(other),
        }
    }

    pub fn deselect(&mut self) {
        self.selection_manager.select(None);
    }

    /// Topmost visible layer under `point`.
    pub fn layer_at(&self, point: &Point, tolerance: f64) -> Option<LayerId> {
        SelectionManager::layer_at(&self.layers, point, tolerance)
    }

    /// Appends a layer on top. A colliding id is replaced with a fresh one.
    pub fn add_layer(&mut self, mut layer: Layer) -> LayerId {
        if self.contains(&layer.id) {
            layer.id = LayerId::generate();
        }
        let id = layer.id.clone();
        self.layers.push(Arc::new(layer));
        id
    }

    /// Replaces the whole sequence with freshly built layers and clears the selection.
    pub fn replace_layers(&mut self, layers: Vec<Layer>) {
        self.layers = Vec::with_capacity(layers.len());
        for layer in layers {
            self.add_layer(layer);
        }
        self.selection_manager.select(None);
    }

    /// Restores a snapshot taken earlier (undo/redo). Keeps the selection if
    /// the selected layer still exists in the snapshot.
    pub fn restore_layers(&mut self, layers: &LayerList) {
        self.layers = layers.clone();
        self.selection_manager.retain_existing(&self.layers);
    }

    /// Applies `update` to the matching layer by swapping in a new record.
    ///
    /// Geometry fields are dropped for a locked layer. Returns `true` when the
    /// layer exists and the update was not reduced to nothing.
    pub fn apply_update(&mut self, id: &LayerId, update: &LayerUpdate) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(layer = %id, "update ignored, unknown layer");
            return false;
        };

        let current = &self.layers[index];
        let effective = if current.locked && update.touches_geometry() {
            tracing::debug!(layer = %id, "geometry change on locked layer dropped");
            update.without_geometry()
        } else {
            update.clone()
        };
        if effective.is_empty() {
            return false;
        }

        let next = current.with_update(&effective);
        self.layers[index] = Arc::new(next);
        true
    }

    /// Removes all layers and the selection.
    pub fn clear(&mut self) {
        self.layers.clear();
        self.selection_manager.select(None);
    }
}
