//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on the repository trait, never on
//! a concrete store.

mod register_service;

pub use register_service::{RegisterInput, RegisterService, RegisterUseCase};
