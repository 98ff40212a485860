use serde::{Deserialize, Serialize};

use crate::model::entry::Answer;

/// Aggregate result for a finished drill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    total: usize,
    correct_count: usize,
    accuracy_percent: f64,
    missed: Vec<Answer>,
}

impl ResultSummary {
    /// Reduce recorded answers into counts, accuracy and the missed hands.
    ///
    /// Accuracy is rounded to one decimal place and is `0.0` for an empty list.
    /// `missed` keeps answering order.
    #[must_use]
    pub fn from_answers(answers: &[Answer]) -> Self {
        let total = answers.len();
        let correct_count = answers.iter().filter(|a| a.is_correct).count();
        let missed: Vec<Answer> = answers.iter().filter(|a| !a.is_correct).cloned().collect();

        Self {
            total,
            correct_count,
            accuracy_percent: accuracy_percent(correct_count, total),
            missed,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.missed.len()
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> f64 {
        self.accuracy_percent
    }

    #[must_use]
    pub fn missed(&self) -> &[Answer] {
        &self.missed
    }

    /// True when every question was answered correctly.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.missed.is_empty()
    }
}

#[allow(clippy::cast_precision_loss)]
fn accuracy_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let permille = correct as f64 * 1000.0 / total as f64;
    permille.round() / 10.0
}
