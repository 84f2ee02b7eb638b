//! OpenAPI schema definitions for domain and envelope types.
//!
//! Domain types and the generic outcome envelope stay framework-agnostic by
//! not deriving `ToSchema`. The wrappers here describe their JSON shape,
//! including the concrete outcome variants each endpoint returns, and live in
//! the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable user identifier.
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Display name shown to other users.
    #[schema(example = "Ada Lovelace")]
    display_name: String,
    /// Lower-cased contact email address.
    #[schema(example = "ada@example.com")]
    email: String,
}

/// OpenAPI schema for [`envelope::Pagination`].
#[derive(ToSchema)]
#[schema(as = Pagination, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PaginationSchema {
    /// One-based page number.
    #[schema(minimum = 1, example = 2)]
    page: u64,
    /// Maximum number of items per page.
    #[schema(minimum = 1, example = 10)]
    limit: u64,
    /// Number of items across all pages.
    #[schema(example = 95)]
    total: u64,
    /// `ceil(total / limit)`.
    #[schema(example = 10)]
    total_pages: u64,
}

/// Successful outcome carrying one user.
#[derive(ToSchema)]
#[schema(as = UserOutcome)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserOutcomeSchema {
    /// Always `true`.
    #[schema(example = true)]
    success: bool,
    /// The user affected by the operation.
    data: UserSchema,
    /// Human-readable summary.
    #[schema(example = "user fetched")]
    message: Option<String>,
}

/// Successful outcome carrying one page of users.
#[derive(ToSchema)]
#[schema(as = UserListOutcome)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserListOutcomeSchema {
    /// Always `true`.
    #[schema(example = true)]
    success: bool,
    /// Users on the requested page, in insertion order.
    data: Vec<UserSchema>,
    /// Position of this page within the full listing.
    pagination: PaginationSchema,
}

/// Successful outcome without a payload.
#[derive(ToSchema)]
#[schema(as = AcknowledgedOutcome)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AcknowledgedOutcomeSchema {
    /// Always `true`.
    #[schema(example = true)]
    success: bool,
    /// Human-readable summary.
    #[schema(example = "user deleted")]
    message: Option<String>,
}

/// Failed outcome. Never carries `data` or `pagination`.
#[derive(ToSchema)]
#[schema(as = FailureOutcome)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FailureOutcomeSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Description of what went wrong.
    #[schema(example = "User not found")]
    error: String,
    /// Optional human-readable context.
    message: Option<String>,
}
