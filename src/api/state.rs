//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, InMemoryUserStore, UserStore};
use crate::services::{RegisterService, RegisterUseCase};

/// Application state shared with every handler.
#[derive(Clone)]
pub struct AppState {
    /// Register use case
    pub register_service: Arc<dyn RegisterService>,
    /// Database connection (absent when running in-memory)
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire the register use case to a Postgres-backed repository.
    pub fn from_database(database: Arc<Database>) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));

        Self {
            register_service: Arc::new(RegisterUseCase::new(users)),
            database: Some(database),
        }
    }

    /// Wire the register use case to the given in-memory repository.
    pub fn in_memory(users: Arc<InMemoryUserStore>) -> Self {
        Self {
            register_service: Arc::new(RegisterUseCase::new(users)),
            database: None,
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(register_service: Arc<dyn RegisterService>) -> Self {
        Self {
            register_service,
            database: None,
        }
    }
}
