use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::SessionContext,
};

/// An edit applied to a live session. Returning an error leaves the session unchanged.
pub type SessionChange = Box<dyn FnOnce(&mut SessionContext) -> AppResult<()> + Send>;

/// Keyed store of per-login contexts. Callers read a copy and do their
/// outbound work without holding any lock; writes go through `modify`.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: SessionContext) -> AppResult<()>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<SessionContext>>;
    /// Applies `change` to the stored session in one step and returns the result.
    /// Missing or expired sessions are `Unauthorized`.
    async fn modify(&self, id: &str, change: SessionChange) -> AppResult<SessionContext>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
    async fn purge_expired(&self) -> AppResult<usize>;
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, SessionContext>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: SessionContext) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<SessionContext>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn modify(&self, id: &str, change: SessionChange) -> AppResult<SessionContext> {
        let mut sessions = self.sessions.write().await;
        let mut session = sessions
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Session has ended".to_string()))?;
        if session.is_expired() {
            sessions.remove(id);
            return Err(AppError::Unauthorized("Session has expired".to_string()));
        }

        change(&mut session)?;
        sessions.insert(id.to_string(), session.clone());
        Ok(session)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id).is_some())
    }

    async fn purge_expired(&self) -> AppResult<usize> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        Ok(before - sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn live_session() -> SessionContext {
        SessionContext::new("Ada", "ada@example.com", Utc::now() + Duration::hours(1))
    }

    #[actix_web::test]
    async fn test_insert_find_modify_delete() {
        let repo = InMemorySessionRepository::new();
        let session = live_session();
        let id = session.id.clone();
        repo.insert(session).await.unwrap();

        repo.modify(
            &id,
            Box::new(|session: &mut SessionContext| {
                session.name = "Ada L".to_string();
                Ok(())
            }),
        )
        .await
        .unwrap();

        let found = repo.find_by_id(&id).await.unwrap().expect("session should exist");
        assert_eq!(found.name, "Ada L");

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_modify_after_delete_is_unauthorized() {
        let repo = InMemorySessionRepository::new();
        let session = live_session();
        repo.insert(session.clone()).await.unwrap();
        repo.delete(&session.id).await.unwrap();

        let result = repo
            .modify(&session.id, Box::new(|_: &mut SessionContext| Ok(())))
            .await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[actix_web::test]
    async fn test_modify_commits_only_on_success() {
        let repo = InMemorySessionRepository::new();
        let session = live_session();
        let id = session.id.clone();
        repo.insert(session).await.unwrap();

        let updated = repo
            .modify(
                &id,
                Box::new(|session: &mut SessionContext| {
                    session.name = "Ada L".to_string();
                    Ok(())
                }),
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Ada L");

        let result = repo
            .modify(
                &id,
                Box::new(|session: &mut SessionContext| {
                    session.name = "half-written".to_string();
                    Err(AppError::Conflict("changed".to_string()))
                }),
            )
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name, "Ada L");
    }

    #[actix_web::test]
    async fn test_modify_missing_or_expired_is_unauthorized() {
        let repo = InMemorySessionRepository::new();
        let stale = SessionContext::new("Old", "old@example.com", Utc::now() - Duration::minutes(1));
        let stale_id = stale.id.clone();
        repo.insert(stale).await.unwrap();

        let result = repo.modify("missing", Box::new(|_: &mut SessionContext| Ok(()))).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));

        let result = repo.modify(&stale_id, Box::new(|_: &mut SessionContext| Ok(()))).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
        assert!(repo.find_by_id(&stale_id).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_sessions_are_isolated() {
        let repo = InMemorySessionRepository::new();
        let first = live_session();
        let second = live_session();
        repo.insert(first.clone()).await.unwrap();
        repo.insert(second.clone()).await.unwrap();

        repo.modify(
            &first.id,
            Box::new(|session: &mut SessionContext| {
                session.store_artifact(
                    crate::models::domain::ArtifactKind::Summary,
                    "mine".to_string(),
                );
                Ok(())
            }),
        )
        .await
        .unwrap();

        let other = repo.find_by_id(&second.id).await.unwrap().unwrap();
        assert!(other.artifacts.is_empty());
    }

    #[actix_web::test]
    async fn test_purge_expired() {
        let repo = InMemorySessionRepository::new();
        repo.insert(live_session()).await.unwrap();
        repo.insert(SessionContext::new(
            "Old",
            "old@example.com",
            Utc::now() - Duration::minutes(5),
        ))
        .await
        .unwrap();

        assert_eq!(repo.purge_expired().await.unwrap(), 1);
        assert_eq!(repo.purge_expired().await.unwrap(), 0);
    }
}
