use serde::{Deserialize, Serialize};

/// Selects the prompt template and the expected response shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Qa,
    Summary,
    Flashcards,
    Quiz,
    Outline,
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    BulletPoints,
    Executive,
    Technical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationParams {
    pub count: Option<u8>,
    pub difficulty: Option<Difficulty>,
    pub style: Option<SummaryStyle>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub text: String,
    pub query: Option<String>,
    pub mode: Mode,
    pub params: GenerationParams,
}

impl GenerationRequest {
    pub fn new(mode: Mode, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            query: None,
            mode,
            params: GenerationParams::default(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_count(mut self, count: u8) -> Self {
        self.params.count = Some(count);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.params.difficulty = Some(difficulty);
        self
    }

    pub fn with_style(mut self, style: Option<SummaryStyle>) -> Self {
        self.params.style = style;
        self
    }
}
