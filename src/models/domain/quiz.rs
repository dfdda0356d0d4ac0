use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{
    generation::Difficulty,
    quiz_attempt::{QuizAttempt, QuizResult},
    quiz_question::QuizQuestion,
};

/// The quiz currently held by a session, with the answers given so far.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>, // never empty
    pub requested_count: u8,
    pub difficulty: Difficulty,
    pub attempt: QuizAttempt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<QuizResult>,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    pub fn new(questions: Vec<QuizQuestion>, requested_count: u8, difficulty: Difficulty) -> Self {
        Quiz {
            questions,
            requested_count,
            difficulty,
            attempt: QuizAttempt::default(),
            result: None,
            created_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Clears answers and any graded result, keeping the questions.
    pub fn reset_attempt(&mut self) {
        self.attempt = QuizAttempt::default();
        self.result = None;
    }

    /// Plain-text rendering used for downloads.
    pub fn to_text(&self) -> String {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| q.to_block(i + 1))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
