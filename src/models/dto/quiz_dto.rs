use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Difficulty, OptionLetter, Quiz, QuizQuestion, QuizResult};

/// A question as presented to the quiz taker: no correct answer attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestionDto {
    pub index: usize,
    pub question: String,
    pub options: BTreeMap<OptionLetter, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<OptionLetter>,
}

impl QuizQuestionDto {
    fn from_question(index: usize, question: &QuizQuestion, selected: Option<OptionLetter>) -> Self {
        QuizQuestionDto {
            index,
            question: question.question.clone(),
            options: question.options.clone(),
            selected,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizDto {
    pub question_count: usize,
    pub requested_count: u8,
    pub difficulty: Difficulty,
    pub answered_count: usize,
    pub questions: Vec<QuizQuestionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<QuizResult>,
    pub created_at: DateTime<Utc>,
}

impl From<&Quiz> for QuizDto {
    fn from(quiz: &Quiz) -> Self {
        QuizDto {
            question_count: quiz.len(),
            requested_count: quiz.requested_count,
            difficulty: quiz.difficulty,
            answered_count: quiz.attempt.answered_count(),
            questions: quiz
                .questions
                .iter()
                .enumerate()
                .map(|(i, q)| QuizQuestionDto::from_question(i, q, quiz.attempt.selection(i)))
                .collect(),
            result: quiz.result.clone(),
            created_at: quiz.created_at,
        }
    }
}
