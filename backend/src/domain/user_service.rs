//! User use-cases composed as plain async functions.
//!
//! Handlers call these functions with the repository port they were handed;
//! each function enforces the business rule for one operation and translates
//! persistence failures into domain [`Error`]s.

use envelope::{Page, PageRequest};
use tracing::{debug, error, info, warn};

use crate::domain::ports::{UserListing, UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserDraft, UserId};

/// Fetch one page of users in insertion order.
///
/// Pages past the end are not an error; they come back empty with accurate
/// pagination metadata.
pub async fn list_users(
    repository: &dyn UserRepository,
    request: PageRequest,
) -> Result<Page<User>, Error> {
    let UserListing { users, total } = repository
        .list(request.offset(), request.limit())
        .await
        .map_err(map_persistence_error)?;
    debug!(
        page = request.page(),
        limit = request.limit(),
        total,
        returned = users.len(),
        "listed users"
    );
    Ok(Page::new(users, request, total))
}

/// Fetch a single user.
pub async fn get_user(repository: &dyn UserRepository, id: &UserId) -> Result<User, Error> {
    repository
        .find_by_id(id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| user_not_found(id))
}

/// Register a new user under a freshly generated identifier.
pub async fn create_user(repository: &dyn UserRepository, draft: UserDraft) -> Result<User, Error> {
    let user = draft.into_user(UserId::random());
    repository
        .insert(&user)
        .await
        .map_err(map_persistence_error)?;
    info!(user_id = %user.id(), "user created");
    Ok(user)
}

/// Replace the attributes of an existing user.
pub async fn update_user(
    repository: &dyn UserRepository,
    id: &UserId,
    draft: UserDraft,
) -> Result<User, Error> {
    let user = draft.into_user(*id);
    let updated = repository
        .update(&user)
        .await
        .map_err(map_persistence_error)?;
    if !updated {
        return Err(user_not_found(id));
    }
    info!(user_id = %id, "user updated");
    Ok(user)
}

/// Remove a user.
pub async fn delete_user(repository: &dyn UserRepository, id: &UserId) -> Result<(), Error> {
    let deleted = repository
        .delete(id)
        .await
        .map_err(map_persistence_error)?;
    if !deleted {
        return Err(user_not_found(id));
    }
    info!(user_id = %id, "user deleted");
    Ok(())
}

fn user_not_found(id: &UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::Connection { .. } => {
            warn!(error = %err, "user repository unavailable");
            Error::service_unavailable("user store is temporarily unavailable")
        }
        UserPersistenceError::Query { .. } => {
            error!(error = %err, "user repository query failed");
            Error::internal(err.to_string())
        }
        UserPersistenceError::DuplicateEmail { email } => {
            Error::conflict(format!("email {email} is already registered"))
        }
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
