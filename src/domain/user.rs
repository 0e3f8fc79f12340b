//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Materialize a freshly inserted user with a new id and timestamp
    pub fn new(new_user: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Insert payload handed to a repository. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
