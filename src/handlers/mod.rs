pub mod auth_handler;
mod body;
pub mod document_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod study_handler;

pub use auth_handler::{login, logout};
pub(crate) use body::json_or_default;
pub use document_handler::{get_document, upload_document};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use quiz_handler::{
    answer_question, generate_quiz, get_quiz, reset_quiz, retake_quiz, submit_quiz,
};
pub use study_handler::{ask, download_artifact, find_video, flashcards, outline, summary};
