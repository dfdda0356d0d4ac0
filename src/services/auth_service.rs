use std::sync::Arc;

use chrono::{Duration, Utc};
use validator::Validate;

use crate::{
    auth::JwtService,
    errors::{AppError, AppResult},
    models::{
        domain::{user::normalize_email, SessionContext, User},
        dto::{request::LoginRequest, response::LoginResponse},
    },
    repositories::{SessionRepository, UserRepository},
};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    jwt_service: Arc<JwtService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            users,
            sessions,
            jwt_service,
        }
    }

    /// The first login for an email registers it; later logins must match the stored password.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;
        if request.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        let purged = self.sessions.purge_expired().await?;
        if purged > 0 {
            log::debug!("Purged {} expired sessions", purged);
        }

        let email = normalize_email(&request.email);
        let user = match self.users.find_by_email(&email).await? {
            Some(user) => {
                if !user.verify_password(&request.password) {
                    log::info!("Rejected login for {}", email);
                    return Err(AppError::Unauthorized(
                        "Invalid email or password".to_string(),
                    ));
                }
                user
            }
            None => {
                let user = self
                    .users
                    .create(User::new(request.name.trim(), &email, &request.password))
                    .await?;
                log::info!("Registered new account for {}", user.email);
                user
            }
        };

        let expires_at = Utc::now() + Duration::hours(self.jwt_service.expiration_hours());
        // The display name is taken from this login, not from registration.
        let session = SessionContext::new(request.name.trim(), &user.email, expires_at);
        let token = self.jwt_service.create_token(&session)?;

        let response = LoginResponse {
            token,
            session_id: session.id.clone(),
            name: session.name.clone(),
            email: session.email.clone(),
            expires_at,
        };
        self.sessions.insert(session).await?;

        log::info!("Session {} started for {}", response.session_id, response.email);
        Ok(response)
    }

    pub async fn logout(&self, session_id: &str) -> AppResult<()> {
        if self.sessions.delete(session_id).await? {
            log::info!("Session {} ended", session_id);
            Ok(())
        } else {
            Err(AppError::Unauthorized("Session has ended".to_string()))
        }
    }
}

/// Fetches a live session; a discarded or expired one is `Unauthorized`.
pub async fn load_session(
    sessions: &dyn SessionRepository,
    session_id: &str,
) -> AppResult<SessionContext> {
    let session = sessions
        .find_by_id(session_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Session has ended".to_string()))?;

    if session.is_expired() {
        sessions.delete(session_id).await?;
        return Err(AppError::Unauthorized("Session has expired".to_string()));
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        repositories::{InMemorySessionRepository, InMemoryUserRepository},
    };

    fn service() -> (AuthService, Arc<InMemorySessionRepository>) {
        let config = Config::test_config();
        let sessions = Arc::new(InMemorySessionRepository::new());
        let service = AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            sessions.clone(),
            Arc::new(JwtService::new(&config.jwt_secret, config.session_expiration_hours)),
        );
        (service, sessions)
    }

    fn login_request(password: &str) -> LoginRequest {
        LoginRequest {
            name: "Ada".to_string(),
            email: "Ada@Example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_first_login_registers_and_opens_session() {
        let (service, sessions) = service();

        let response = service.login(login_request("secret1")).await.unwrap();

        assert_eq!(response.email, "ada@example.com");
        assert!(!response.token.is_empty());
        let session = load_session(sessions.as_ref(), &response.session_id)
            .await
            .unwrap();
        assert_eq!(session.name, "Ada");
        assert!(session.document.is_none());
    }

    #[actix_web::test]
    async fn test_wrong_password_is_unauthorized() {
        let (service, _) = service();
        service.login(login_request("secret1")).await.unwrap();

        let result = service.login(login_request("wrong-password")).await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[actix_web::test]
    async fn test_each_login_gets_its_own_session() {
        let (service, _) = service();

        let first = service.login(login_request("secret1")).await.unwrap();
        let second = service.login(login_request("secret1")).await.unwrap();

        assert_ne!(first.session_id, second.session_id);
    }

    #[actix_web::test]
    async fn test_invalid_input_is_validation_error() {
        let (service, _) = service();

        let result = service.login(login_request("123")).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[actix_web::test]
    async fn test_logout_discards_session() {
        let (service, sessions) = service();
        let response = service.login(login_request("secret1")).await.unwrap();

        service.logout(&response.session_id).await.unwrap();

        assert!(matches!(
            load_session(sessions.as_ref(), &response.session_id).await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(service.logout(&response.session_id).await.is_err());
    }

    #[actix_web::test]
    async fn test_expired_session_is_rejected() {
        let (_, sessions) = service();
        let stale = SessionContext::new("Old", "old@example.com", Utc::now() - Duration::minutes(1));
        let id = stale.id.clone();
        sessions.insert(stale).await.unwrap();

        let result = load_session(sessions.as_ref(), &id).await;

        match result {
            Err(AppError::Unauthorized(msg)) => assert!(msg.contains("expired")),
            other => panic!("expected Unauthorized, got {:?}", other.map(|s| s.id)),
        }
    }
}
