//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers:
//!
//! - **Paths**: the users resource and the health probes
//! - **Schemas**: wrappers describing the user, pagination, and each outcome
//!   envelope variant without coupling domain or envelope types to utoipa
//!
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    AcknowledgedOutcomeSchema, FailureOutcomeSchema, PaginationSchema, UserListOutcomeSchema,
    UserOutcomeSchema, UserSchema,
};
use crate::inbound::http::users::UserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Outcome service API",
        description = "User management endpoints whose every response is an outcome envelope.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        UserRequest,
        PaginationSchema,
        UserOutcomeSchema,
        UserListOutcomeSchema,
        AcknowledgedOutcomeSchema,
        FailureOutcomeSchema
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
