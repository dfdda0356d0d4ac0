use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{user::normalize_email, User},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// Process-local credential store; nothing survives a restart.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AppError::Validation(format!(
                "An account for '{}' already exists",
                user.email
            )));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&normalize_email(email)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_create_and_find_is_case_insensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("Ada", "ada@example.com", "secret1"))
            .await
            .unwrap();

        let found = repo.find_by_email("ADA@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.name), Some("Ada".to_string()));
        assert!(repo.find_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("Ada", "ada@example.com", "secret1"))
            .await
            .unwrap();

        let result = repo.create(User::new("Ada", "ada@example.com", "other12")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
