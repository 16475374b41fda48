// Client-side resume workflow: one explicit state machine per session.

pub mod controller;
pub mod state;
pub mod view;

pub use controller::WorkflowController;
pub use view::{Action, AnalysisView, OptimizedPanel, ViewMode, WorkflowView};
