use thiserror::Error;

/// The one message shown for every failed optimization, whatever the cause.
pub const OPTIMIZATION_FAILED_MESSAGE: &str =
    "There was an error optimizing your resume. Please try again.";

/// Errors the workflow reports to its host. None of them is fatal: the
/// controller is always left in a state that accepts a retry or a reset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Invalid file type '{declared_type}' for {name}")]
    InvalidFileType { name: String, declared_type: String },

    #[error("Resume has no content to optimize")]
    EmptyContent,

    #[error("No resume uploaded")]
    NoDocument,

    #[error("An optimization is already in progress")]
    OptimizationInProgress,

    #[error("Resume has already been optimized")]
    AlreadyOptimized,

    #[error("{OPTIMIZATION_FAILED_MESSAGE}")]
    OptimizationFailed,
}

/// Failures talking to the optimization gateway. Logged, never shown.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Gateway returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Gateway reported an error: {0}")]
    Gateway(String),

    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),
}
