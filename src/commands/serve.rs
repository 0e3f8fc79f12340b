//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, InMemoryUserStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let app_state = if args.in_memory {
        tracing::warn!("Running with in-memory user storage; data is lost on shutdown");
        AppState::in_memory(Arc::new(InMemoryUserStore::new()))
    } else {
        let db = Database::connect(&config)
            .await
            .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
        AppState::from_database(Arc::new(db))
    };

    let app = create_router(app_state);

    let addr = config.with_server_overrides(args.host, args.port).server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
