//! Repository layer - Data access abstraction
//!
//! `UserStore` talks to Postgres through SeaORM; `InMemoryUserStore`
//! keeps users in a map for development runs and tests.

pub(crate) mod entities;
mod memory;
mod user_repository;

pub use memory::InMemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
