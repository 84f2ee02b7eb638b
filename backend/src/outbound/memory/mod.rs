//! Process-local adapters backed by in-memory collections.
//!
//! State lives for as long as the adapter value does and is never written to
//! disk, so these adapters suit demos, tests, and single-instance deployments.

mod user_repository;

pub use user_repository::InMemoryUserRepository;
