use serde::Deserialize;
use validator::Validate;

use crate::constants::prompts::DEFAULT_ITEM_COUNT;
use crate::models::domain::{Difficulty, SummaryStyle};

fn default_item_count() -> u8 {
    DEFAULT_ITEM_COUNT
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(length(min = 1, max = 2000, message = "Question must not be empty"))]
    pub question: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub style: Option<SummaryStyle>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FlashcardsRequest {
    #[serde(default = "default_item_count")]
    #[validate(range(min = 1, max = 20))]
    pub count: u8,
}

impl Default for FlashcardsRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_ITEM_COUNT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[serde(default = "default_item_count")]
    #[validate(range(min = 1, max = 20))]
    pub count: u8,

    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Default for GenerateQuizRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_ITEM_COUNT,
            difficulty: Difficulty::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}
