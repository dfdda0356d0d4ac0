pub mod auth_service;
pub mod document_service;
pub mod quiz_attempt_service;
pub mod quiz_parser;
pub mod quiz_service;
pub mod study_service;
pub mod video_service;

pub use auth_service::AuthService;
pub use document_service::{DocumentService, Upload};
pub use quiz_attempt_service::{GradingPolicy, QuizAttemptService};
pub use quiz_parser::parse_quiz;
pub use quiz_service::QuizService;
pub use study_service::StudyService;
pub use video_service::VideoService;
