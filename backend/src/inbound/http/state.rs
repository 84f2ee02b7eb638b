//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::ports::UserRepository;

/// Errors raised when a [`PagingPolicy`] is built from inconsistent limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PagingPolicyError {
    /// One of the limits was zero.
    #[error("page limits must be at least 1")]
    ZeroLimit,
    /// The default exceeded the maximum.
    #[error("default page limit {default} exceeds maximum {max}")]
    DefaultAboveMax {
        /// Requested default limit.
        default: u64,
        /// Requested maximum limit.
        max: u64,
    },
}

/// Page size rules applied to list endpoints.
///
/// # Examples
/// ```
/// use outcome_service::inbound::http::state::PagingPolicy;
///
/// let policy = PagingPolicy::new(20, 100).expect("valid policy");
/// assert_eq!(policy.default_limit(), 20);
/// assert!(PagingPolicy::new(50, 10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingPolicy {
    default_limit: u64,
    max_limit: u64,
}

impl PagingPolicy {
    /// Limit applied when the client omits one.
    pub const DEFAULT_LIMIT: u64 = 20;
    /// Largest limit honoured; bigger requests are capped.
    pub const MAX_LIMIT: u64 = 100;

    /// Validate a default and maximum page size.
    pub const fn new(default_limit: u64, max_limit: u64) -> Result<Self, PagingPolicyError> {
        if default_limit == 0 || max_limit == 0 {
            return Err(PagingPolicyError::ZeroLimit);
        }
        if default_limit > max_limit {
            return Err(PagingPolicyError::DefaultAboveMax {
                default: default_limit,
                max: max_limit,
            });
        }
        Ok(Self {
            default_limit,
            max_limit,
        })
    }

    /// Limit applied when the client omits one.
    #[must_use]
    pub const fn default_limit(&self) -> u64 {
        self.default_limit
    }

    /// Largest limit honoured.
    #[must_use]
    pub const fn max_limit(&self) -> u64 {
        self.max_limit
    }
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self {
            default_limit: Self::DEFAULT_LIMIT,
            max_limit: Self::MAX_LIMIT,
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User persistence port.
    pub users: Arc<dyn UserRepository>,
    /// Page size rules for list endpoints.
    pub paging: PagingPolicy,
}

impl HttpState {
    /// Construct state from a repository and paging rules.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use outcome_service::inbound::http::state::{HttpState, PagingPolicy};
    /// use outcome_service::outbound::memory::InMemoryUserRepository;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     PagingPolicy::default(),
    /// );
    /// assert_eq!(state.paging.max_limit(), 100);
    /// ```
    pub fn new(users: Arc<dyn UserRepository>, paging: PagingPolicy) -> Self {
        Self { users, paging }
    }
}
