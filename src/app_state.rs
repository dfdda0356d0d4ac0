use std::sync::Arc;

use crate::{
    auth::JwtService,
    clients::{GenerationClient, OpenAiGenerationClient, VideoSearchClient, YoutubeSearchClient},
    config::Config,
    errors::AppResult,
    repositories::{InMemorySessionRepository, InMemoryUserRepository, SessionRepository},
    services::{
        auth_service::AuthService,
        document_service::DocumentService,
        quiz_attempt_service::{GradingPolicy, QuizAttemptService},
        quiz_service::QuizService,
        study_service::StudyService,
        video_service::VideoService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub document_service: Arc<DocumentService>,
    pub study_service: Arc<StudyService>,
    pub quiz_service: Arc<QuizService>,
    pub video_service: Arc<VideoService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let generator = Arc::new(OpenAiGenerationClient::new(&config));
        let video_search = Arc::new(YoutubeSearchClient::new(&config)?);
        Ok(Self::with_clients(config, generator, video_search))
    }

    /// Wires the services around the given outbound clients.
    pub fn with_clients(
        config: Config,
        generator: Arc<dyn GenerationClient>,
        video_search: Arc<dyn VideoSearchClient>,
    ) -> Self {
        let sessions: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.session_expiration_hours,
        ));

        let auth_service = Arc::new(AuthService::new(
            users,
            sessions.clone(),
            jwt_service.clone(),
        ));
        let document_service = Arc::new(DocumentService::new(
            sessions.clone(),
            config.max_upload_bytes,
        ));
        let study_service = Arc::new(StudyService::new(sessions.clone(), generator.clone()));
        let quiz_service = Arc::new(QuizService::new(
            sessions.clone(),
            generator.clone(),
            QuizAttemptService::new(GradingPolicy::new(config.quiz_pass_percent)),
        ));
        let video_service = Arc::new(VideoService::new(
            sessions,
            generator,
            video_search,
            config.video_context_chars,
        ));

        Self {
            auth_service,
            document_service,
            study_service,
            quiz_service,
            video_service,
            jwt_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_config() {
        let state = AppState::new(Config::test_config()).unwrap();
        assert_eq!(state.jwt_service.expiration_hours(), 1);
        assert_eq!(state.config.quiz_pass_percent, 70);
    }
}
