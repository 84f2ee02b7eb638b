//! Builders for HTTP state and its repository adapters.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use outcome_service::domain::{User, UserDraft, UserId};
use outcome_service::inbound::http::state::HttpState;
use outcome_service::outbound::memory::InMemoryUserRepository;

use super::ServerConfig;

const DEMO_USERS: [(&str, &str); 3] = [
    ("Ada Lovelace", "ada@example.com"),
    ("Grace Hopper", "grace@example.com"),
    ("Alan Turing", "alan@example.com"),
];

fn demo_users() -> Vec<User> {
    DEMO_USERS
        .iter()
        .filter_map(|(name, email)| match UserDraft::try_from_parts(name, email) {
            Ok(draft) => Some(draft.into_user(UserId::random())),
            Err(error) => {
                warn!(%error, name, "skipping invalid demo user");
                None
            }
        })
        .collect()
}

/// Build the shared HTTP state from the server configuration.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = if config.seed_demo_users {
        let users = demo_users();
        info!(count = users.len(), "seeding demo users");
        InMemoryUserRepository::with_users(users)
    } else {
        InMemoryUserRepository::new()
    };
    web::Data::new(HttpState::new(Arc::new(repository), config.paging))
}
