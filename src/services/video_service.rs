use std::sync::Arc;

use crate::{
    clients::{GenerationClient, VideoSearchClient},
    constants::prompts::{truncate_chars, VIDEO_QUERY_INSTRUCTION},
    errors::AppResult,
    models::domain::{GenerationRequest, Mode},
    repositories::SessionRepository,
    services::{auth_service::load_session, study_service::document_text},
};

/// Best-effort lookup of one related video for the session's document.
pub struct VideoService {
    sessions: Arc<dyn SessionRepository>,
    generator: Arc<dyn GenerationClient>,
    search: Arc<dyn VideoSearchClient>,
    context_chars: usize,
}

impl VideoService {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        generator: Arc<dyn GenerationClient>,
        search: Arc<dyn VideoSearchClient>,
        context_chars: usize,
    ) -> Self {
        Self {
            sessions,
            generator,
            search,
            context_chars,
        }
    }

    /// Session errors propagate; anything past that yields `None`.
    pub async fn find_for_session(&self, session_id: &str) -> AppResult<Option<String>> {
        let session = load_session(self.sessions.as_ref(), session_id).await?;
        let text = document_text(&session)?;
        Ok(self.find_video(&text).await)
    }

    pub async fn find_video(&self, text: &str) -> Option<String> {
        let context = truncate_chars(text, self.context_chars);
        let request =
            GenerationRequest::new(Mode::Custom, context).with_query(VIDEO_QUERY_INSTRUCTION);

        let reply = match self.generator.generate(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("Could not derive a video search query: {}", e);
                return None;
            }
        };

        let query = clean_query(&reply)?;
        log::debug!("Searching videos for '{}'", query);

        match self.search.search_first_video(&query).await {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Video search failed: {}", e);
                None
            }
        }
    }
}

/// First non-empty line of the model's reply, without surrounding quotes.
fn clean_query(reply: &str) -> Option<String> {
    let line = reply.lines().map(str::trim).find(|line| !line.is_empty())?;
    let query = line.trim_matches(|c| matches!(c, '"' | '\'' | '`')).trim();
    (!query.is_empty()).then(|| query.to_string())
}
