use serde::{Deserialize, Serialize};

use crate::model::color::Color;

/// One row of the reference table: a hand and the color it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandColorEntry {
    pub hand: String,
    pub color: Color,
}

impl HandColorEntry {
    #[must_use]
    pub fn new(hand: impl Into<String>, color: Color) -> Self {
        Self {
            hand: hand.into(),
            color,
        }
    }
}

/// A sampled quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub hand: String,
    pub correct_color: Color,
}

impl From<HandColorEntry> for Question {
    fn from(entry: HandColorEntry) -> Self {
        Self {
            hand: entry.hand,
            correct_color: entry.color,
        }
    }
}

/// Recorded answer for a single question. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub hand: String,
    pub correct_color: Color,
    pub selected_color: Color,
    pub is_correct: bool,
}

impl Answer {
    /// Grade a selection against a question.
    #[must_use]
    pub fn grade(question: &Question, selected_color: Color) -> Self {
        Self {
            hand: question.hand.clone(),
            correct_color: question.correct_color,
            selected_color,
            is_correct: selected_color == question.correct_color,
        }
    }
}
