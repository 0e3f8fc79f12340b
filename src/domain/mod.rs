//! Domain layer - Core business entities and logic
//!
//! Holds the user entity and the password value object. Nothing in here
//! knows about HTTP or the database.

pub mod password;
pub mod user;

pub use password::{meets_min_length, Password};
pub use user::{NewUser, User};
