//! Route table for the HTTP adapter.
//!
//! ```text
//! /api/v1/users[/{id}]   users resource
//! anything else          404 failure outcome
//! ```

use actix_web::{HttpRequest, Scope, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::inbound::http::validation::{json_config, path_config, query_config};

/// Prefix shared by every versioned API route.
pub const API_PREFIX: &str = "/api/v1";

/// Build the versioned API scope with outcome-rendering extractor settings.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use outcome_service::inbound::http::routes::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
#[must_use]
pub fn api_scope() -> Scope {
    web::scope(API_PREFIX)
        .app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
}

/// Default service answering unmatched routes with a 404 failure outcome.
pub async fn not_found(req: HttpRequest) -> ApiResult<&'static str> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}
