//! Domain primitives, ports, and use-cases.
//!
//! Purpose: hold the transport-agnostic core of the service. Inbound
//! adapters translate requests into these types, call the service
//! functions, and render the returned values or [`Error`]s as outcome
//! envelopes.
//!
//! Public surface:
//! - Error and ErrorCode: tagged failure carried back to adapters.
//! - TraceId: per-request correlation identifier.
//! - User and its validated parts.
//! - user_service: the list/get/create/update/delete use-cases.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{
    DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, DisplayName, EmailAddress, User, UserDraft, UserId,
    UserValidationError,
};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use outcome_service::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u8> {
///     Err(Error::not_found("nothing here"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
