//! In-memory user repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

/// Map-backed repository keyed by email.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&new_user.email) {
            return Err(AppError::UserAlreadyExists);
        }

        let user = User::new(new_user);
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "John Doe".to_string(),
            email: email.to_string(),
            password_hash: "hashed".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let store = InMemoryUserStore::new();
        let created = store.create(new_user("john@example.com")).await.unwrap();

        let found = store.find_by_email("john@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(created.id));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_unknown_email() {
        let store = InMemoryUserStore::new();
        assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = InMemoryUserStore::new();
        store.create(new_user("john@example.com")).await.unwrap();

        let result = store.create(new_user("john@example.com")).await;
        assert!(matches!(result, Err(AppError::UserAlreadyExists)));
        assert_eq!(store.len().await, 1);
    }
}
