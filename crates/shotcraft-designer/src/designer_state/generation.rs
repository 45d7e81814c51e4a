//! Applying generator and pattern output to designer state.
//!
//! A generation runs asynchronously. Each request gets a ticket; only the
//! result for the current ticket is applied. Dismissing the request or
//! starting a new one makes older tickets stale, and their results are
//! dropped without touching the document.

use super::DesignerState;
use crate::generator::{
    normalize_response, GenerationError, GenerationRequest, GenerationResponse, LayoutGenerator,
    StylePreset,
};
use crate::model::CanvasConfigUpdate;
use crate::templates;

/// Identifies one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating(GenerationTicket),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct GenerationTracker {
    next_ticket: u64,
    status: GenerationStatus,
    last_error: Option<GenerationError>,
}

impl GenerationTracker {
    fn issue(&mut self) -> GenerationTicket {
        self.next_ticket += 1;
        let ticket = GenerationTicket(self.next_ticket);
        self.status = GenerationStatus::Generating(ticket);
        self.last_error = None;
        ticket
    }

    fn is_current(&self, ticket: GenerationTicket) -> bool {
        self.status == GenerationStatus::Generating(ticket)
    }
}

impl DesignerState {
    pub fn generation_status(&self) -> GenerationStatus {
        self.generation.status
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.generation.status, GenerationStatus::Generating(_))
    }

    /// Error of the last failed generation, until dismissed or retried.
    pub fn last_generation_error(&self) -> Option<&GenerationError> {
        self.generation.last_error.as_ref()
    }

    pub fn dismiss_generation_error(&mut self) {
        self.generation.last_error = None;
    }

    /// Builds a request for the current canvas.
    pub fn generation_request(
        &self,
        app_name: &str,
        description: &str,
        style_preset: StylePreset,
        pattern_id: Option<&str>,
    ) -> GenerationRequest {
        let request = GenerationRequest::new(
            app_name,
            description,
            style_preset,
            self.canvas.config().clone(),
        );
        match pattern_id {
            Some(id) => request.with_pattern(id),
            None => request,
        }
    }

    /// Marks a generation as in flight. Any earlier ticket becomes stale.
    pub fn begin_generation(&mut self) -> GenerationTicket {
        let ticket = self.generation.issue();
        tracing::debug!(ticket = ticket.0, "generation started");
        ticket
    }

    /// Abandons the in-flight generation. Its result will be ignored.
    pub fn dismiss_generation(&mut self) {
        if let GenerationStatus::Generating(ticket) = self.generation.status {
            tracing::debug!(ticket = ticket.0, "generation dismissed");
        }
        self.generation.status = GenerationStatus::Idle;
    }

    /// Applies the outcome of the generation identified by `ticket`.
    ///
    /// Returns `Ok(true)` when the layout replaced the document, `Ok(false)`
    /// when the ticket was stale and the outcome was dropped. On error the
    /// document is left untouched and the error is kept for the UI.
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        request: &GenerationRequest,
        outcome: Result<GenerationResponse, GenerationError>,
    ) -> Result<bool, GenerationError> {
        if !self.generation.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, "stale generation result ignored");
            return Ok(false);
        }
        self.generation.status = GenerationStatus::Idle;

        let layout = match outcome.and_then(|response| normalize_response(response, request)) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!(error = %e, "generation failed");
                self.generation.last_error = Some(e.clone());
                return Err(e);
            }
        };

        // A result landing mid-gesture ends the gesture; the replace below
        // supersedes whatever it changed.
        if self.interaction.finish().is_some() {
            tracing::debug!("drag cancelled by generation result");
        }

        let count = layout.layers.len();
        self.replace_all_layers(layout.layers);
        self.update_canvas_config(&CanvasConfigUpdate::background(layout.background_color));
        self.palette = layout.palette;
        tracing::info!(count, "generated layout applied");
        Ok(true)
    }

    /// Runs `generator` for `request` and applies the result.
    pub async fn generate_with<G>(
        &mut self,
        generator: &G,
        request: &GenerationRequest,
    ) -> Result<bool, GenerationError>
    where
        G: LayoutGenerator + ?Sized,
    {
        let ticket = self.begin_generation();
        let outcome = generator.generate(request).await;
        self.complete_generation(ticket, request, outcome)
    }

    /// Replaces the document with a pattern's starter layers in one history entry.
    pub fn apply_pattern_template(&mut self, pattern_id: &str, app_name: &str) -> bool {
        let Some(pattern) = templates::find_pattern(pattern_id) else {
            tracing::debug!(pattern_id, "unknown pattern");
            return false;
        };
        let config = self.canvas.config();
        let layers = templates::default_layers(&pattern, config.width, config.height, app_name);
        self.replace_all_layers(layers)
    }
}
