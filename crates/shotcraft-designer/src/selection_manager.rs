use shotcraft_core::constants::{DUPLICATE_OFFSET, DUPLICATE_SUFFIX};
use std::sync::Arc;

use crate::model::{Layer, LayerId, LayerList, LayerUpdate, Point};

/// Manages the active selection and the structural edits of the layer sequence.
///
/// `SelectionManager` is responsible for:
/// - Tracking which layer is the active selection
/// - Deleting and duplicating layers
/// - Reordering layers in z-order (the sequence order is the z-order)
/// - Flipping the lock and visibility flags
///
/// # Tolerance of stale ids
///
/// Every operation is total. An id that does not match any layer is a silent
/// no-op, which tolerates UI events that race with deletions. Operations that
/// may change the sequence return `true` only when they did.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the selected layer, if any
    selected_id: Option<LayerId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use shotcraft_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected layer.
    pub fn selected_id(&self) -> Option<&LayerId> {
        self.selected_id.as_ref()
    }

    /// Sets the active selection; `None` deselects (background click).
    pub fn select(&mut self, id: Option<LayerId>) {
        self.selected_id = id;
    }

    pub fn is_selected(&self, id: &LayerId) -> bool {
        self.selected_id.as_ref() == Some(id)
    }

    /// Clears the selection if it names a layer that is no longer in `layers`.
    pub fn retain_existing(&mut self, layers: &LayerList) {
        if let Some(id) = &self.selected_id {
            if !layers.iter().any(|l| &l.id == id) {
                self.selected_id = None;
            }
        }
    }

    /// Returns the topmost visible layer containing `point`.
    pub fn layer_at(layers: &LayerList, point: &Point, tolerance: f64) -> Option<LayerId> {
        layers
            .iter()
            .rev()
            .find(|l| l.visible && l.contains_point(point, tolerance))
            .map(|l| l.id.clone())
    }

    /// Removes the matching layer and clears the selection if it was selected.
    pub fn delete(&mut self, layers: &mut LayerList, id: &LayerId) -> bool {
        let Some(index) = position_of(layers, id) else {
            return false;
        };
        layers.remove(index);
        if self.is_selected(id) {
            self.selected_id = None;
        }
        true
    }

    /// Inserts a copy right after the original and selects it.
    ///
    /// The copy gets a fresh id, a `" Copy"` name suffix and is offset by
    /// `offset` on both axes. Returns the id of the copy.
    pub fn duplicate(
        &mut self,
        layers: &mut LayerList,
        id: &LayerId,
        offset: f64,
    ) -> Option<LayerId> {
        let index = position_of(layers, id)?;
        let original = &layers[index];
        let mut copy = original.with_update(&LayerUpdate::position(
            original.x + offset,
            original.y + offset,
        ));
        copy.id = LayerId::generate();
        copy.name = format!("{}{}", original.name, DUPLICATE_SUFFIX);

        let new_id = copy.id.clone();
        layers.insert(index + 1, Arc::new(copy));
        self.selected_id = Some(new_id.clone());
        Some(new_id)
    }

    /// Duplicates with the standard (20, 20) offset.
    pub fn duplicate_default(&mut self, layers: &mut LayerList, id: &LayerId) -> Option<LayerId> {
        self.duplicate(layers, id, DUPLICATE_OFFSET)
    }

    /// Swaps the layer with its neighbor toward the top. No-op when already on top.
    pub fn move_up(layers: &mut LayerList, id: &LayerId) -> bool {
        match position_of(layers, id) {
            Some(index) if index + 1 < layers.len() => {
                layers.swap(index, index + 1);
                true
            }
            _ => false,
        }
    }

    /// Swaps the layer with its neighbor toward the bottom. No-op when already at the bottom.
    pub fn move_down(layers: &mut LayerList, id: &LayerId) -> bool {
        match position_of(layers, id) {
            Some(index) if index > 0 => {
                layers.swap(index, index - 1);
                true
            }
            _ => false,
        }
    }

    /// Flips `locked`. Selection is unaffected.
    pub fn toggle_lock(layers: &mut LayerList, id: &LayerId) -> bool {
        replace_with(layers, id, |layer| LayerUpdate {
            locked: Some(!layer.locked),
            ..Default::default()
        })
    }

    /// Flips `visible`. Hidden layers stay in the sequence.
    pub fn toggle_visibility(layers: &mut LayerList, id: &LayerId) -> bool {
        replace_with(layers, id, |layer| LayerUpdate {
            visible: Some(!layer.visible),
            ..Default::default()
        })
    }
}

fn position_of(layers: &LayerList, id: &LayerId) -> Option<usize> {
    layers.iter().position(|l| &l.id == id)
}

fn replace_with(
    layers: &mut LayerList,
    id: &LayerId,
    make_update: impl FnOnce(&Layer) -> LayerUpdate,
) -> bool {
    let Some(index) = position_of(layers, id) else {
        return false;
    };
    let update = make_update(&layers[index]);
    layers[index] = Arc::new(layers[index].with_update(&update));
    true
}
