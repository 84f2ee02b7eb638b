//! The outcome envelope wrapping every operation result.
//!
//! ## Invariants
//! - `success` is the sole discriminant; callers branch on it, never on the
//!   presence of `data`.
//! - A successful outcome never carries `error`; a failed one never carries
//!   `data` or `pagination` and always carries `error`.
//! - A successful outcome may omit `data` when the operation has no payload.
//!
//! Constructors cannot fail. Deserialisation re-checks the invariants so
//! payloads produced elsewhere are held to the same contract.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::pagination::{Page, Pagination};

/// Ways a serialised outcome can violate the envelope contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeValidationError {
    /// A successful outcome carried an error string.
    #[error("successful outcomes must not carry an error")]
    ErrorOnSuccess,
    /// A failed outcome carried a payload.
    #[error("failed outcomes must not carry data")]
    DataOnFailure,
    /// A failed outcome carried pagination metadata.
    #[error("failed outcomes must not carry pagination")]
    PaginationOnFailure,
    /// A failed outcome did not say why.
    #[error("failed outcomes must carry an error")]
    MissingError,
}

/// Uniform result of a single operation.
///
/// # Examples
/// ```
/// use envelope::Outcome;
///
/// let fetched = Outcome::success("Ann").with_message("fetched");
/// assert!(fetched.is_success());
/// assert_eq!(fetched.data(), Some(&"Ann"));
///
/// let missing = Outcome::<&str>::failure("User not found");
/// assert!(!missing.is_success());
/// assert_eq!(missing.error(), Some("User not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "OutcomeDto<T>")]
pub struct Outcome<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<Pagination>,
}

impl<T> Outcome<T> {
    /// Successful outcome carrying `data`.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            pagination: None,
        }
    }

    /// Successful outcome with no payload, e.g. after a delete.
    #[must_use]
    pub const fn acknowledged() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: None,
            pagination: None,
        }
    }

    /// Failed outcome carrying a human-readable cause.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
            pagination: None,
        }
    }

    /// Wrap a result: `Ok` becomes a success, `Err` a failure carrying the
    /// error's display text.
    ///
    /// # Examples
    /// ```
    /// use envelope::Outcome;
    ///
    /// let parsed: Result<u8, _> = "300".parse::<u8>();
    /// let outcome = Outcome::from_result(parsed);
    /// assert!(!outcome.is_success());
    /// ```
    #[must_use]
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(err.to_string()),
        }
    }

    /// Attach supplementary context. Valid in either state.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Whether the operation completed without error.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Payload of a successful operation, if it produced one.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Cause of a failed operation.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Supplementary context.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Pagination metadata for list payloads.
    #[must_use]
    pub const fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Consume the outcome, returning its payload.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Consume the outcome as a `Result`, branching on `success`.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.error.unwrap_or_default())
        }
    }
}

impl<T> Outcome<Vec<T>> {
    /// Successful list outcome with pagination metadata.
    #[must_use]
    pub const fn paginated(items: Vec<T>, pagination: Pagination) -> Self {
        Self {
            success: true,
            data: Some(items),
            error: None,
            message: None,
            pagination: Some(pagination),
        }
    }
}

impl<T> From<Page<T>> for Outcome<Vec<T>> {
    fn from(page: Page<T>) -> Self {
        let (items, pagination) = page.into_parts();
        Self::paginated(items, pagination)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct OutcomeDto<T> {
    success: bool,
    #[serde(default, deserialize_with = "present")]
    data: Option<T>,
    error: Option<String>,
    message: Option<String>,
    pagination: Option<Pagination>,
}

/// A `data` key that is present always yields `Some`, even when its value is
/// `null`, so nullable payloads survive a round trip. An absent key stays
/// `None` through `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> TryFrom<OutcomeDto<T>> for Outcome<T> {
    type Error = OutcomeValidationError;

    fn try_from(value: OutcomeDto<T>) -> Result<Self, Self::Error> {
        let OutcomeDto {
            success,
            data,
            error,
            message,
            pagination,
        } = value;

        if success {
            if error.is_some() {
                return Err(OutcomeValidationError::ErrorOnSuccess);
            }
        } else {
            if data.is_some() {
                return Err(OutcomeValidationError::DataOnFailure);
            }
            if pagination.is_some() {
                return Err(OutcomeValidationError::PaginationOnFailure);
            }
            if error.is_none() {
                return Err(OutcomeValidationError::MissingError);
            }
        }

        Ok(Self {
            success,
            data,
            error,
            message,
            pagination,
        })
    }
}
