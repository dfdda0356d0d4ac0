pub mod document;
pub mod generation;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod session;
pub mod user;
pub use document::{Document, DocumentInfo};
pub use generation::{Difficulty, GenerationParams, GenerationRequest, Mode, SummaryStyle};
pub use quiz::Quiz;
pub use quiz_attempt::{FeedbackTier, QuestionOutcome, QuizAttempt, QuizResult};
pub use quiz_question::{OptionLetter, QuizQuestion};
pub use session::{ArtifactKind, SessionContext};
pub use user::User;
