//! Password value object.
//!
//! Hashing and verification live here so no other layer touches Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Hashed password. Never holds the plain text.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password.
    ///
    /// # Errors
    /// Returns a validation error if the password fails [`meets_min_length`].
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if !meets_min_length(plain_text) {
            return Err(AppError::invalid_field(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }

        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Wrap an existing hash (from the database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }
}

/// Minimum length check, counted in UTF-16 code units: characters outside
/// the Basic Multilingual Plane count as two.
pub fn meets_min_length(plain_text: &str) -> bool {
    plain_text.encode_utf16().count() as u64 >= MIN_PASSWORD_LENGTH
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let password = Password::new("123456").unwrap();

        assert_ne!(password.as_str(), "123456");
        assert!(password.as_str().starts_with("$argon2"));
        assert!(password.verify("123456"));
        assert!(!password.verify("654321"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let pass1 = Password::new("same-secret").unwrap();
        let pass2 = Password::new("same-secret").unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify("same-secret"));
        assert!(pass2.verify("same-secret"));
    }

    #[test]
    fn test_password_too_short() {
        let result = Password::new("12345");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_password_minimum_length() {
        // Exactly 6 characters should work
        assert!(Password::new("abcdef").is_ok());
    }

    #[test]
    fn test_length_counts_utf16_units_not_bytes() {
        // 5 units, 10 bytes
        assert!(Password::new("ééééé").is_err());
    }

    #[test]
    fn test_astral_characters_count_twice() {
        // 3 characters, 6 UTF-16 units
        assert!(meets_min_length("😀😀😀"));
        assert!(Password::new("😀😀😀").is_ok());
        assert!(!meets_min_length("😀😀"));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        let stored = Password::from_hash("not-a-phc-string".to_string());
        assert!(!stored.verify("anything"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("123456").unwrap();
        let rendered = format!("{:?}", password);
        assert!(!rendered.contains("$argon2"));
    }
}
