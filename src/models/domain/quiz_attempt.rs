use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::OptionLetter;

/// Selections made so far, keyed by question index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub selections: BTreeMap<usize, OptionLetter>,
}

impl QuizAttempt {
    pub fn select(&mut self, index: usize, letter: OptionLetter) {
        self.selections.insert(index, letter);
    }

    pub fn selection(&self, index: usize) -> Option<OptionLetter> {
        self.selections.get(&index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackTier {
    Perfect,
    Pass,
    Retry,
}

impl FeedbackTier {
    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Perfect => "Perfect score! You're a PDF quiz master!",
            FeedbackTier::Pass => "Great job! You passed the quiz!",
            FeedbackTier::Retry => "Keep practicing and try again!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOutcome {
    pub index: usize,
    pub selected: Option<OptionLetter>,
    pub correct_answer: OptionLetter,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub tier: FeedbackTier,
    pub message: String,
    pub questions: Vec<QuestionOutcome>,
    pub submitted_at: DateTime<Utc>,
}
