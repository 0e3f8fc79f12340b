//! User repository backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user.
    ///
    /// Fails with [`AppError::UserAlreadyExists`] if the email is taken.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let user = User::new(new_user);
        let active_model = ActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(user.created_at),
        };

        let model = active_model.insert(&self.db).await.map_err(insert_error)?;
        Ok(User::from(model))
    }
}

/// The UNIQUE index on `users.email` catches registrations that raced past
/// the existence check.
fn insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(%detail, "Unique constraint rejected user insert");
            AppError::UserAlreadyExists
        }
        _ => AppError::from(err),
    }
}
