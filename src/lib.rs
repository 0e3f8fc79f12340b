//! Register API - user registration over HTTP
//!
//! `POST /users` validates the body, runs the register use case
//! (duplicate-email check, then insert) and answers `201`, `409` or `400`.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity and password value object
//! - **services**: Register use case
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against Postgres
//! cargo run -- serve
//!
//! # Start the server without a database
//! cargo run -- serve --in-memory
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewUser, Password, User};
pub use errors::{AppError, AppResult};
