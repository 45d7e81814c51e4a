//! Document state manager for UI integration.
//!
//! `DesignerState` is the aggregate root the host UI talks to. It owns the
//! canvas, the undo history, the gesture controller and the viewport, and is
//! the only place where layer-list changes are committed to history.
//!
//! This module is split into submodules:
//! - `layers`: add, replace, update, structural edits, keyboard actions, undo/redo
//! - `interaction`: pointer gestures (select, drag, resize) and hit testing
//! - `generation`: applying generator and pattern output

mod generation;
mod interaction;
mod layers;

pub use generation::{GenerationStatus, GenerationTicket};
pub use interaction::HitTarget;

use shotcraft_core::constants::{
    DUPLICATE_OFFSET, HISTORY_CAPACITY, NUDGE_STEP, NUDGE_STEP_LARGE,
};

use crate::canvas::Canvas;
use crate::history::HistoryManager;
use crate::model::{CanvasConfig, LayerId, LayerList};
use crate::session::InteractionController;
use crate::viewport::Viewport;

use generation::GenerationTracker;

/// Runtime editing options, usually converted from the settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    pub canvas: CanvasConfig,
    pub history_capacity: usize,
    pub nudge_step: f64,
    pub nudge_step_large: f64,
    pub duplicate_offset: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            history_capacity: HISTORY_CAPACITY,
            nudge_step: NUDGE_STEP,
            nudge_step_large: NUDGE_STEP_LARGE,
            duplicate_offset: DUPLICATE_OFFSET,
        }
    }
}

/// Last committed action, used to coalesce keyboard nudge repeats.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LastAction {
    Nudge(LayerId),
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub viewport: Viewport,
    pub options: EditorOptions,
    /// Colors suggested by the last successful generation.
    pub palette: Vec<String>,
    /// Uploaded app screenshot shown inside device frames.
    pub user_screenshot: Option<String>,
    pub is_modified: bool,
    pub(crate) history: HistoryManager,
    pub(crate) interaction: InteractionController,
    pub(crate) generation: GenerationTracker,
    pub(crate) last_action: Option<LastAction>,
}

impl DesignerState {
    /// Creates an empty document with default options.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Creates an empty document from the given options.
    pub fn with_options(options: EditorOptions) -> Self {
        let canvas = Canvas::with_config(options.canvas.clone());
        let history = HistoryManager::with_capacity(LayerList::new(), options.history_capacity);
        Self {
            canvas,
            viewport: Viewport::new(),
            options,
            palette: Vec::new(),
            user_screenshot: None,
            is_modified: false,
            history,
            interaction: InteractionController::new(),
            generation: GenerationTracker::default(),
            last_action: None,
        }
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn can_undo(&self) -> bool {
        !self.interaction.is_dragging() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.interaction.is_dragging() && self.history.can_redo()
    }

    /// Sets or clears the uploaded screenshot. Not part of the undo history.
    pub fn set_user_screenshot(&mut self, source: Option<String>) {
        self.user_screenshot = source.filter(|s| !s.trim().is_empty());
    }

    /// Commits the live layer list as one history entry.
    pub(crate) fn commit(&mut self) {
        self.history.commit(self.canvas.layers());
        self.last_action = None;
        self.is_modified = true;
    }

    /// Discrete edits are refused while a gesture is in progress.
    pub(crate) fn ensure_idle(&self, action: &str) -> bool {
        if self.interaction.is_dragging() {
            tracing::debug!(action, "ignored while a drag is active");
            return false;
        }
        true
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
