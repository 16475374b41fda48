//! Terminal rendering of workflow views and notices.

use std::fmt::Write;

use crate::notice::Notice;
use crate::workflow::{Action, AnalysisView, OptimizedPanel, ViewMode, WorkflowView};

const UPLOAD_PROMPT: &str = "Upload your resume\nSupports PDF, DOCX, TXT, and LaTeX formats";
const NO_CONTENT: &str = "No content available";
const LOADING: &str = "Analyzing and optimizing your resume...";
const PLACEHOLDER: &str = "Run \"optimize\" to get started";
const RULE: &str = "────────────────────────────────────────";

pub fn render_view(view: &WorkflowView<'_>) -> String {
    match view {
        WorkflowView::Upload => format!("{UPLOAD_PROMPT}\n"),
        WorkflowView::Analysis(analysis) => render_analysis(analysis),
    }
}

fn render_analysis(view: &AnalysisView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Resume Analysis");
    let _ = writeln!(out, "File: {}", view.file_label);
    let _ = writeln!(out, "Actions: {}", render_actions(&view.actions));
    if let Some(error) = view.error {
        let _ = writeln!(out, "Error: {error}");
    }

    if view.mode == ViewMode::Comparison {
        let original = view.original.filter(|t| !t.is_empty()).unwrap_or(NO_CONTENT);
        push_panel(&mut out, "Original Resume", original);
    }

    let optimized = match view.optimized {
        OptimizedPanel::Loading => LOADING,
        OptimizedPanel::Text(text) => text,
        OptimizedPanel::Placeholder => PLACEHOLDER,
    };
    push_panel(&mut out, "Optimized Resume", optimized);
    out
}

fn push_panel(out: &mut String, title: &str, body: &str) {
    let _ = writeln!(out, "{RULE}\n{title}\n{RULE}");
    let _ = writeln!(out, "{body}");
}

fn render_actions(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|action| match action {
            Action::UploadNew => "[Upload New]",
            Action::Optimize { enabled: true } => "[Optimize Resume]",
            Action::Optimize { enabled: false } => "[Optimizing...]",
            Action::Download => "[Download]",
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_notice(notice: &Notice) -> String {
    let marker = if notice.is_destructive() { "!" } else { "✓" };
    format!("[{marker}] {}: {}", notice.title(), notice.description())
}
