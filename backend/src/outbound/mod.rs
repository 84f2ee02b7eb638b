//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and a concrete storage
//! representation and contain no business rules.

pub mod memory;
