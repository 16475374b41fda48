//! Presentation model derived from `WorkflowState`.

use super::state::WorkflowState;

/// Which tab of the analysis screen is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewMode {
    /// Original and optimized side by side.
    #[default]
    Comparison,
    /// Optimized resume only.
    Optimized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowView<'a> {
    /// Nothing loaded: show the upload prompt.
    Upload,
    Analysis(AnalysisView<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView<'a> {
    pub mode: ViewMode,
    pub file_label: String,
    /// Present in comparison mode only.
    pub original: Option<&'a str>,
    pub optimized: OptimizedPanel<'a>,
    pub error: Option<&'a str>,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizedPanel<'a> {
    Loading,
    Text(&'a str),
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    UploadNew,
    Optimize { enabled: bool },
    Download,
}

pub(crate) fn project(state: &WorkflowState, mode: ViewMode) -> WorkflowView<'_> {
    let (document, optimized, error) = match state {
        WorkflowState::Empty => return WorkflowView::Upload,
        WorkflowState::Loaded { document } => (document, OptimizedPanel::Placeholder, None),
        WorkflowState::Optimizing { document } => (document, OptimizedPanel::Loading, None),
        WorkflowState::Optimized { document, result } => {
            (document, OptimizedPanel::Text(result.text.as_str()), None)
        }
        WorkflowState::Failed { document, message } => (
            document,
            OptimizedPanel::Placeholder,
            Some(message.as_str()),
        ),
    };

    let mut actions = vec![Action::UploadNew];
    match optimized {
        OptimizedPanel::Text(_) => actions.push(Action::Download),
        OptimizedPanel::Loading => actions.push(Action::Optimize { enabled: false }),
        OptimizedPanel::Placeholder => actions.push(Action::Optimize { enabled: true }),
    }

    WorkflowView::Analysis(AnalysisView {
        mode,
        file_label: document.label(),
        original: match mode {
            ViewMode::Comparison => Some(document.raw_text.as_str()),
            ViewMode::Optimized => None,
        },
        optimized,
        error,
        actions,
    })
}
