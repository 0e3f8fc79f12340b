//! User registration handler.

use std::borrow::Cow;

use axum::{extract::State, http::StatusCode, routing::post, Router};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::MIN_PASSWORD_LENGTH;
use crate::domain::meets_min_length;
use crate::errors::AppResult;
use crate::services::RegisterInput;

/// Dot-atom local part (no leading, trailing or doubled dots, last char not
/// an apostrophe) and a dotted domain ending in a TLD of 2+ letters.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+\-]+\.)*[A-Za-z0-9_'+\-]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[validate(
        email(message = "Invalid email"),
        regex(path = *EMAIL_RE, message = "Invalid email")
    )]
    #[schema(example = "johndoe@example.com")]
    pub email: String,
    /// User password (minimum 6 characters)
    #[validate(custom(function = "validate_password_length"))]
    #[schema(example = "123456", min_length = 6)]
    pub password: String,
}

fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if meets_min_length(password) {
        return Ok(());
    }

    let mut error = ValidationError::new("length");
    error.message = Some(Cow::Owned(format!(
        "String must contain at least {} character(s)",
        MIN_PASSWORD_LENGTH
    )));
    Err(error)
}

impl From<RegisterRequest> for RegisterInput {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

/// Create user routes
pub fn users_routes() -> Router<AppState> {
    Router::new().route("/", post(register))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Validation error"),
        (status = 409, description = "E-mail already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<StatusCode> {
    state.register_service.register(payload.into()).await?;

    Ok(StatusCode::CREATED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: "John Doe".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_accepts_well_formed_emails() {
        for email in [
            "johndoe@example.com",
            "john.doe@mail.example.co",
            "o'neil+tag@example.org",
            "a_b-c@sub-domain.example.io",
        ] {
            assert!(request(email, "123456").validate().is_ok(), "{email}");
        }
    }

    #[test]
    fn test_rejects_emails_outside_dot_atom_form() {
        for email in [
            ".john@example.com",
            "john..doe@example.com",
            "john.@example.com",
            "john'@example.com",
            "john@example",
            "a@localhost",
            "a@[127.0.0.1]",
            "john@example.c",
            "not-an-email",
        ] {
            let errors = request(email, "123456").validate().unwrap_err();
            assert!(errors.field_errors().contains_key("email"), "{email}");
        }
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        assert!(request("johndoe@example.com", "😀😀😀").validate().is_ok());

        let errors = request("johndoe@example.com", "12345").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
