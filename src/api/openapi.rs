//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::users_handler;

/// OpenAPI documentation for the registration API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Register API",
        version = "0.1.0",
        description = "User registration API with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3333", description = "Local development server")
    ),
    paths(users_handler::register),
    components(schemas(users_handler::RegisterRequest)),
    tags(
        (name = "Users", description = "User registration")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_path_documented() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/users"));
    }
}
