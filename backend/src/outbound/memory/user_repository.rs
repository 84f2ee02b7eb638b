//! In-memory implementation of the [`UserRepository`] port.
//!
//! Users are kept in insertion order so paging is stable across requests.
//! Email addresses are unique; the check compares the normalised form held by
//! [`EmailAddress`](crate::domain::EmailAddress).

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserListing, UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

/// User store backed by a vector behind an async read/write lock.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `users`, kept in the given
    /// order.
    ///
    /// Later entries whose id or email collides with an earlier one are
    /// skipped.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut seeded: Vec<User> = Vec::new();
        for user in users {
            let clashes = seeded
                .iter()
                .any(|existing| existing.id() == user.id() || existing.email() == user.email());
            if !clashes {
                seeded.push(user);
            }
        }
        Self {
            users: RwLock::new(seeded),
        }
    }
}

fn email_taken(users: &[User], candidate: &User) -> bool {
    users
        .iter()
        .any(|existing| existing.email() == candidate.email() && existing.id() != candidate.id())
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self, offset: u64, limit: u64) -> Result<UserListing, UserPersistenceError> {
        let users = self.users.read().await;
        let window = users
            .iter()
            .skip(to_usize(offset))
            .take(to_usize(limit))
            .cloned()
            .collect();
        Ok(UserListing {
            users: window,
            total: users.len() as u64,
        })
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().await;
        if email_taken(&users, user) {
            return Err(UserPersistenceError::duplicate_email(user.email().as_ref()));
        }
        if users.iter().any(|existing| existing.id() == user.id()) {
            return Err(UserPersistenceError::query(format!(
                "user {} already exists",
                user.id()
            )));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut users = self.users.write().await;
        let Some(index) = users.iter().position(|existing| existing.id() == user.id()) else {
            return Ok(false);
        };
        if email_taken(&users, user) {
            return Err(UserPersistenceError::duplicate_email(user.email().as_ref()));
        }
        if let Some(slot) = users.get_mut(index) {
            *slot = user.clone();
        }
        Ok(true)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|user| user.id() != id);
        Ok(users.len() != before)
    }
}
