use serde::Serialize;

use range_core::model::{Color, ResultSummary};

/// Correctness feedback shown while a reveal window is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub selected: Color,
    pub correct: Color,
    pub is_correct: bool,
}

/// Data for the result screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrillReport {
    pub summary: ResultSummary,
    /// Answering time only; reveal windows are excluded.
    pub elapsed_ms: u64,
}

/// Presentation-agnostic snapshot of a drill.
///
/// This is intentionally **not** a UI view-model: no pre-formatted strings,
/// no card art. The UI resolves art and formats time as it sees fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrillView {
    Question {
        /// 1-based.
        number: usize,
        total: usize,
        hand: String,
        elapsed_ms: u64,
        feedback: Option<Feedback>,
    },
    Result(DrillReport),
}

impl DrillView {
    /// True while answer buttons should be disabled.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        match self {
            DrillView::Question { feedback, .. } => feedback.is_some(),
            DrillView::Result(_) => true,
        }
    }
}
