//! User-facing notifications raised by workflow operations.

use crate::errors::{WorkflowError, OPTIMIZATION_FAILED_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    FileUploaded { name: String },
    InvalidFileType,
    NoResumeUploaded,
    OptimizationBusy,
    AlreadyOptimized,
    ResumeOptimized,
    OptimizationFailed,
    DownloadStarted { file_name: String },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::FileUploaded { .. } => "File uploaded",
            Notice::InvalidFileType => "Invalid file type",
            Notice::NoResumeUploaded => "No resume uploaded",
            Notice::OptimizationBusy => "Optimization in progress",
            Notice::AlreadyOptimized => "Already optimized",
            Notice::ResumeOptimized => "Resume optimized!",
            Notice::OptimizationFailed => "Optimization failed",
            Notice::DownloadStarted { .. } => "Download started",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notice::FileUploaded { name } => format!("{name} is ready to be optimized."),
            Notice::InvalidFileType => "Please upload a PDF, DOCX, TXT, or LaTeX file.".to_string(),
            Notice::NoResumeUploaded => "Please upload a resume first.".to_string(),
            Notice::OptimizationBusy => "Please wait for the current optimization to finish.".to_string(),
            Notice::AlreadyOptimized => {
                "Upload a new resume to optimize another version.".to_string()
            }
            Notice::ResumeOptimized => {
                "Your resume has been improved with AI suggestions.".to_string()
            }
            Notice::OptimizationFailed => OPTIMIZATION_FAILED_MESSAGE.to_string(),
            Notice::DownloadStarted { file_name } => {
                format!("Your optimized resume is being saved as {file_name}.")
            }
        }
    }

    /// Destructive notices report something the user has to act on.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            Notice::InvalidFileType
                | Notice::NoResumeUploaded
                | Notice::OptimizationBusy
                | Notice::AlreadyOptimized
                | Notice::OptimizationFailed
        )
    }
}

impl From<&WorkflowError> for Notice {
    fn from(error: &WorkflowError) -> Self {
        match error {
            WorkflowError::InvalidFileType { .. } => Notice::InvalidFileType,
            WorkflowError::EmptyContent | WorkflowError::NoDocument => Notice::NoResumeUploaded,
            WorkflowError::OptimizationInProgress => Notice::OptimizationBusy,
            WorkflowError::AlreadyOptimized => Notice::AlreadyOptimized,
            WorkflowError::OptimizationFailed => Notice::OptimizationFailed,
        }
    }
}
