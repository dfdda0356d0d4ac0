pub mod session_repository;
pub mod user_repository;

pub use session_repository::{InMemorySessionRepository, SessionChange, SessionRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};
