use std::fmt;

use uuid::Uuid;

use crate::document::Document;

/// Rewritten resume text. Only ever created from a successful gateway response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationResult {
    pub text: String,
}

/// Everything one session knows. Each variant carries exactly the data valid
/// in that state, so "optimizing with a result" cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkflowState {
    #[default]
    Empty,
    Loaded {
        document: Document,
    },
    Optimizing {
        document: Document,
    },
    Optimized {
        document: Document,
        result: OptimizationResult,
    },
    Failed {
        document: Document,
        message: String,
    },
}

/// Payload-free discriminant, for logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Empty,
    Loaded,
    Optimizing,
    Optimized,
    Failed,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateKind::Empty => "empty",
            StateKind::Loaded => "loaded",
            StateKind::Optimizing => "optimizing",
            StateKind::Optimized => "optimized",
            StateKind::Failed => "failed",
        };
        f.write_str(name)
    }
}

impl WorkflowState {
    pub fn kind(&self) -> StateKind {
        match self {
            WorkflowState::Empty => StateKind::Empty,
            WorkflowState::Loaded { .. } => StateKind::Loaded,
            WorkflowState::Optimizing { .. } => StateKind::Optimizing,
            WorkflowState::Optimized { .. } => StateKind::Optimized,
            WorkflowState::Failed { .. } => StateKind::Failed,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        match self {
            WorkflowState::Empty => None,
            WorkflowState::Loaded { document }
            | WorkflowState::Optimizing { document }
            | WorkflowState::Optimized { document, .. }
            | WorkflowState::Failed { document, .. } => Some(document),
        }
    }

    pub fn result(&self) -> Option<&OptimizationResult> {
        match self {
            WorkflowState::Optimized { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Handed out when an optimization starts; must be presented to apply the
/// outcome. Ties the response to the document that was loaded at the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationTicket {
    pub document_id: Uuid,
    pub content: String,
}

/// What happened to an outcome passed to `complete_optimization`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Optimized,
    Failed,
    /// The session moved on (reset or new file); the outcome was dropped.
    Discarded,
}
