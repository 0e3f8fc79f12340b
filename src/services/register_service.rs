//! Register use case - Creates a new account if the email is free.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Input for the register use case. The password is still plain text.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegisterService: Send + Sync {
    /// Register a new user.
    ///
    /// Returns [`AppError::UserAlreadyExists`] if the email is taken.
    async fn register(&self, input: RegisterInput) -> AppResult<User>;
}

/// Check-then-insert registration over any [`UserRepository`].
pub struct RegisterUseCase<R: UserRepository> {
    users: Arc<R>,
}

impl<R: UserRepository> RegisterUseCase<R> {
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R: UserRepository> RegisterService for RegisterUseCase<R> {
    async fn register(&self, input: RegisterInput) -> AppResult<User> {
        let RegisterInput {
            name,
            email,
            password,
        } = input;

        if self.users.find_by_email(&email).await?.is_some() {
            tracing::warn!(%email, "Registration rejected: email already exists");
            return Err(AppError::UserAlreadyExists);
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self
            .users
            .create(NewUser {
                name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, email = %user.email, "User registered");
        Ok(user)
    }
}
