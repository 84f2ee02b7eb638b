//! Users API handlers.
//!
//! ```text
//! GET    /api/v1/users?page=2&limit=10
//! GET    /api/v1/users/{id}
//! POST   /api/v1/users       {"displayName":"Ada Lovelace","email":"ada@example.com"}
//! PUT    /api/v1/users/{id}  {"displayName":"Ada King","email":"ada@example.com"}
//! DELETE /api/v1/users/{id}
//! ```
//!
//! Every response body is an outcome envelope. Handlers only translate
//! transport values; the rules live in [`crate::domain::user_service`].

use actix_web::{HttpResponse, delete, get, post, put, web};
use envelope::Outcome;
use serde::{Deserialize, Serialize};

use crate::domain::{User, UserDraft, UserValidationError, user_service};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    ID_FIELD, map_user_validation_error, parse_user_id, resolve_page_request,
};

/// Request body for creating or replacing a user.
///
/// Example JSON:
/// `{"displayName":"Ada Lovelace","email":"ada@example.com"}`
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// Name shown to other users.
    #[schema(example = "Ada Lovelace")]
    pub display_name: String,
    /// Contact email address.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl TryFrom<UserRequest> for UserDraft {
    type Error = UserValidationError;

    fn try_from(value: UserRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.display_name, &value.email)
    }
}

/// Paging parameters for `GET /api/v1/users`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// One-based page number. Defaults to 1.
    #[param(minimum = 1)]
    pub page: Option<u64>,
    /// Items per page. Defaults to the configured limit; larger values are
    /// capped at the configured maximum.
    #[param(minimum = 1)]
    pub limit: Option<u64>,
}

/// List users one page at a time.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use outcome_service::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "One page of users", body = crate::inbound::http::schemas::UserListOutcomeSchema),
        (status = 400, description = "Invalid page or limit", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 503, description = "User store unavailable", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::FailureOutcomeSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> ApiResult<web::Json<Outcome<Vec<User>>>> {
    let ListUsersQuery { page, limit } = query.into_inner();
    let request = resolve_page_request(page, limit, state.paging)?;
    let page = user_service::list_users(state.users.as_ref(), request).await?;
    Ok(web::Json(Outcome::from(page)))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User found", body = crate::inbound::http::schemas::UserOutcomeSchema),
        (status = 400, description = "Malformed identifier", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::FailureOutcomeSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Outcome<User>>> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    let user = user_service::get_user(state.users.as_ref(), &id).await?;
    Ok(web::Json(Outcome::success(user).with_message("user fetched")))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = crate::inbound::http::schemas::UserOutcomeSchema),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 413, description = "Request body too large", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 415, description = "Request body is not JSON", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 409, description = "Email already registered", body = crate::inbound::http::schemas::FailureOutcomeSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let draft = UserDraft::try_from(payload.into_inner()).map_err(map_user_validation_error)?;
    let user = user_service::create_user(state.users.as_ref(), draft).await?;
    Ok(HttpResponse::Created().json(Outcome::success(user).with_message("user created")))
}

/// Replace an existing user's attributes.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = crate::inbound::http::schemas::UserOutcomeSchema),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 413, description = "Request body too large", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 415, description = "Request body is not JSON", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 409, description = "Email already registered", body = crate::inbound::http::schemas::FailureOutcomeSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<Outcome<User>>> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    let draft = UserDraft::try_from(payload.into_inner()).map_err(map_user_validation_error)?;
    let user = user_service::update_user(state.users.as_ref(), &id, draft).await?;
    Ok(web::Json(Outcome::success(user).with_message("user updated")))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User deleted", body = crate::inbound::http::schemas::AcknowledgedOutcomeSchema),
        (status = 400, description = "Malformed identifier", body = crate::inbound::http::schemas::FailureOutcomeSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::FailureOutcomeSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Outcome<()>>> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    user_service::delete_user(state.users.as_ref(), &id).await?;
    Ok(web::Json(
        Outcome::<()>::acknowledged().with_message("user deleted"),
    ))
}
