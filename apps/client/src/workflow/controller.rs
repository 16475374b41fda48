//! Workflow Controller. Owns one session's state and drives every transition.
//!
//! ```text
//! Empty ──load──> Loaded ──begin──> Optimizing ──complete(ok)──> Optimized
//!   ^               ^                    │
//!   │               │                    └──complete(err)──> Failed ──begin──> Optimizing
//!   └────reset──────┴── (any state) ── load ──> Loaded
//! ```
//!
//! Loading or resetting while `Optimizing` orphans the in-flight request; its
//! outcome is discarded when it arrives because the ticket no longer matches.

use std::mem;

use tracing::{debug, error, info, warn};

use crate::document::{Document, SelectedFile};
use crate::errors::{ClientError, WorkflowError, OPTIMIZATION_FAILED_MESSAGE};
use crate::export::Export;
use crate::gateway::OptimizationService;
use crate::notice::Notice;

use super::state::{Completion, OptimizationResult, OptimizationTicket, StateKind, WorkflowState};
use super::view::{project, ViewMode, WorkflowView};

/// One controller per session. Holds no globals and shares nothing.
#[derive(Debug, Default)]
pub struct WorkflowController {
    state: WorkflowState,
}

impl WorkflowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    /// Accepts a file from the host. A rejected file leaves the state untouched.
    pub fn load_file(&mut self, selected: SelectedFile) -> Result<Notice, WorkflowError> {
        let document = Document::from_selected(selected).map_err(|e| {
            warn!("Rejected upload: {e}");
            e
        })?;

        if self.kind() == StateKind::Optimizing {
            debug!("New file loaded while optimizing; pending response will be discarded");
        }

        info!(
            "Loaded {} as {} ({} bytes)",
            document.name,
            document.media_kind.label(),
            document.size_bytes
        );
        let notice = Notice::FileUploaded {
            name: document.name.clone(),
        };
        self.state = WorkflowState::Loaded { document };
        Ok(notice)
    }

    /// Moves to `Optimizing` and returns the ticket the host must send back
    /// with the outcome. Allowed from `Loaded` and `Failed` only.
    pub fn begin_optimization(&mut self) -> Result<OptimizationTicket, WorkflowError> {
        let document = match &self.state {
            WorkflowState::Empty => return Err(WorkflowError::NoDocument),
            WorkflowState::Optimizing { .. } => return Err(WorkflowError::OptimizationInProgress),
            WorkflowState::Optimized { .. } => return Err(WorkflowError::AlreadyOptimized),
            WorkflowState::Loaded { document } | WorkflowState::Failed { document, .. } => {
                document
            }
        };

        if document.raw_text.is_empty() {
            return Err(WorkflowError::EmptyContent);
        }

        let ticket = OptimizationTicket {
            document_id: document.id,
            content: document.raw_text.clone(),
        };

        self.state = match mem::take(&mut self.state) {
            WorkflowState::Loaded { document } | WorkflowState::Failed { document, .. } => {
                WorkflowState::Optimizing { document }
            }
            other => other,
        };
        info!("Optimization started for document {}", ticket.document_id);
        Ok(ticket)
    }

    /// Applies the gateway outcome if the ticket still matches the document
    /// being optimized; otherwise drops it.
    pub fn complete_optimization(
        &mut self,
        ticket: OptimizationTicket,
        outcome: Result<String, ClientError>,
    ) -> Completion {
        let document = match mem::take(&mut self.state) {
            WorkflowState::Optimizing { document } if document.id == ticket.document_id => {
                document
            }
            other => {
                debug!(
                    "Discarding stale optimization outcome for document {} (state: {})",
                    ticket.document_id,
                    other.kind()
                );
                self.state = other;
                return Completion::Discarded;
            }
        };

        match outcome {
            Ok(text) => {
                info!("Optimization succeeded ({} chars)", text.chars().count());
                self.state = WorkflowState::Optimized {
                    document,
                    result: OptimizationResult { text },
                };
                Completion::Optimized
            }
            Err(e) => {
                error!("Error optimizing resume: {e}");
                self.state = WorkflowState::Failed {
                    document,
                    message: OPTIMIZATION_FAILED_MESSAGE.to_string(),
                };
                Completion::Failed
            }
        }
    }

    /// Runs one full optimization against `service`. Exactly one request, no
    /// automatic retry.
    pub async fn optimize(
        &mut self,
        service: &dyn OptimizationService,
    ) -> Result<Notice, WorkflowError> {
        let ticket = self.begin_optimization()?;
        let outcome = service.optimize(&ticket.content).await;

        // `&mut self` is held across the await, so the ticket is still current.
        match self.complete_optimization(ticket, outcome) {
            Completion::Optimized => Ok(Notice::ResumeOptimized),
            Completion::Failed | Completion::Discarded => Err(WorkflowError::OptimizationFailed),
        }
    }

    /// Clears the session. Valid from every state.
    pub fn reset(&mut self) {
        if self.kind() != StateKind::Empty {
            info!("Workflow reset from {}", self.kind());
        }
        self.state = WorkflowState::Empty;
    }

    /// The optimized resume as a downloadable artifact; `None` unless `Optimized`.
    pub fn export_result(&self) -> Option<Export> {
        let result = self.state.result()?;
        let document = self.state.document()?;
        Some(Export::text(&document.name, &result.text))
    }

    pub fn view(&self, mode: ViewMode) -> WorkflowView<'_> {
        project(&self.state, mode)
    }
}
