//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::{AppError, FieldIssues};

/// JSON extractor that rejects the request before the handler runs if the
/// body does not decode or does not pass its `validator` rules.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use register_api::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct RegisterRequest {
///     #[validate(email)]
///     email: String,
///     #[validate(length(min = 6))]
///     password: String,
/// }
///
/// async fn register(ValidatedJson(payload): ValidatedJson<RegisterRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(field_issues(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Collect validator output into per-field messages
fn field_issues(errors: &ValidationErrors) -> FieldIssues {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Probe {
        #[validate(email(message = "Invalid email"))]
        email: String,
        #[validate(length(min = 6))]
        password: String,
    }

    #[test]
    fn test_field_issues_uses_custom_and_default_messages() {
        let probe = Probe {
            email: "nope".to_string(),
            password: "123".to_string(),
        };
        let errors = probe.validate().unwrap_err();
        let issues = field_issues(&errors);

        assert_eq!(issues["email"], vec!["Invalid email".to_string()]);
        assert_eq!(issues["password"], vec!["password is invalid".to_string()]);
    }
}
