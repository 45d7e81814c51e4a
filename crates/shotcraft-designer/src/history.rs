//! Undo/redo history of complete layer-list snapshots.
//!
//! The history is a bounded buffer of snapshots plus a cursor. It is seeded
//! with the document's initial state, so the cursor always names a valid
//! entry (`0 <= index < len`).

use shotcraft_core::constants::HISTORY_CAPACITY;
use std::collections::VecDeque;

use crate::model::LayerList;

/// Bounded snapshot history with branch discarding.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    snapshots: VecDeque<LayerList>,
    index: usize,
    capacity: usize,
}

impl HistoryManager {
    /// Create a history with the default capacity (50), seeded with `initial`.
    pub fn new(initial: LayerList) -> Self {
        Self::with_capacity(initial, HISTORY_CAPACITY)
    }

    /// Create with a custom capacity. A capacity of zero is treated as one.
    pub fn with_capacity(initial: LayerList, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut snapshots = VecDeque::with_capacity(capacity + 1);
        snapshots.push_back(initial);
        Self {
            snapshots,
            index: 0,
            capacity,
        }
    }

    /// Record a new state.
    ///
    /// Discards every snapshot after the cursor, appends `layers` and moves
    /// the cursor onto it. When the capacity is exceeded the oldest snapshot
    /// is evicted and the cursor shifts down so it keeps naming the same entry.
    pub fn commit(&mut self, layers: &LayerList) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push_back(layers.clone());
        self.index += 1;

        if self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
            self.index -= 1;
        }
        tracing::trace!(index = self.index, len = self.snapshots.len(), "history commit");
    }

    /// Replace the snapshot under the cursor instead of appending a new one.
    ///
    /// Used to coalesce rapid repeats (keyboard nudges) into one entry. The
    /// redo branch is discarded just as with `commit`.
    pub fn amend(&mut self, layers: &LayerList) {
        self.snapshots.truncate(self.index + 1);
        if let Some(current) = self.snapshots.get_mut(self.index) {
            *current = layers.clone();
        }
    }

    /// Step back one entry. Returns `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&LayerList> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.snapshots.get(self.index)
    }

    /// Step forward one entry. Returns `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&LayerList> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        self.snapshots.get(self.index)
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Option<&LayerList> {
        self.snapshots.get(self.index)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget everything and start over from `initial`.
    pub fn reset(&mut self, initial: LayerList) {
        self.snapshots.clear();
        self.snapshots.push_back(initial);
        self.index = 0;
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(LayerList::new())
    }
}
