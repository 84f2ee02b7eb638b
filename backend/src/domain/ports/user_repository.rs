//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the email address.
        DuplicateEmail { email: String } => "email already registered: {email}",
    }
}

/// One window of the user listing plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListing {
    /// Users inside the requested window, in insertion order.
    pub users: Vec<User>,
    /// Number of users across all windows.
    pub total: u64,
}

/// Storage operations required by the user service functions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return at most `limit` users after skipping `offset`.
    async fn list(&self, offset: u64, limit: u64) -> Result<UserListing, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Store a new user. Fails with `DuplicateEmail` when the address is taken.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Replace an existing user. Returns `false` when no user has that id.
    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError>;

    /// Remove a user. Returns `false` when no user has that id.
    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError>;
}
