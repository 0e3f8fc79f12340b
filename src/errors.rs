//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::{MSG_INTERNAL_ERROR, MSG_USER_ALREADY_EXISTS, MSG_VALIDATION_ERROR};

/// Per-field validation messages, keyed by field name.
pub type FieldIssues = BTreeMap<String, Vec<String>>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The email is already taken by another account
    #[error("{msg}", msg = MSG_USER_ALREADY_EXISTS)]
    UserAlreadyExists,

    // Validation
    #[error("{msg}", msg = MSG_VALIDATION_ERROR)]
    Validation(FieldIssues),

    #[error("{0}")]
    BadRequest(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    issues: Option<FieldIssues>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UserAlreadyExists => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                MSG_INTERNAL_ERROR.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                MSG_INTERNAL_ERROR.to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();
        let issues = match self {
            AppError::Validation(issues) => Some(issues),
            _ => None,
        };

        (status, Json(ErrorResponse { message, issues })).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    /// Validation error for a single field.
    pub fn invalid_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut issues = FieldIssues::new();
        issues.insert(field.into(), vec![msg.into()]);
        AppError::Validation(issues)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
