//! HTTP request handlers.

pub mod users_handler;

pub use users_handler::users_routes;
