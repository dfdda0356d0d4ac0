use chrono::{Duration, Utc};

use crate::models::domain::{Document, SessionContext};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Model output in the quiz grammar: France is B, 2+2 is A.
    pub const TWO_QUESTION_QUIZ: &str = "Q1. What is the capital of France?\nA) Berlin\nB) Paris\nC) Rome\nD) Madrid\nAnswer: B\n\nQ2. What is 2+2?\nA) 4\nB) 3\nC) 5\nD) 22\nAnswer: A";

    /// A logged-in session with no document yet
    pub fn live_session() -> SessionContext {
        SessionContext::new("Ada", "ada@example.com", Utc::now() + Duration::hours(1))
    }

    pub fn session_with_document(text: &str) -> SessionContext {
        let mut session = live_session();
        session.replace_document(Document::new(
            Some("notes.pdf".to_string()),
            text.len(),
            text.to_string(),
        ));
        session
    }
}

#[cfg(test)]
pub mod stubs {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        clients::GenerationClient,
        errors::AppResult,
        models::domain::GenerationRequest,
        repositories::{InMemorySessionRepository, SessionRepository},
    };

    /// Replaces the session's document while a generation call is in flight,
    /// then answers with `reply`.
    pub struct ReuploadingGenerator {
        pub sessions: Arc<InMemorySessionRepository>,
        pub session_id: String,
        pub reply: &'static str,
    }

    #[async_trait]
    impl GenerationClient for ReuploadingGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> AppResult<String> {
            self.sessions
                .modify(
                    &self.session_id,
                    Box::new(|session: &mut SessionContext| {
                        session.replace_document(Document::new(None, 7, "NEW DOC".to_string()));
                        Ok(())
                    }),
                )
                .await?;
            Ok(self.reply.to_string())
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::parse_quiz;

    #[test]
    fn test_fixture_quiz_parses() {
        assert_eq!(parse_quiz(TWO_QUESTION_QUIZ, None).len(), 2);
    }

    #[test]
    fn test_session_with_document() {
        let session = session_with_document("Some text");
        assert_eq!(
            session.document.as_ref().map(|d| d.text.as_str()),
            Some("Some text")
        );
        assert!(!session.is_expired());
    }
}
