//! Outcome service library modules.
//!
//! The service answers every request with an [`envelope::Outcome`]. Requests
//! flow from the inbound HTTP adapter through the domain service functions to
//! a repository port implemented by an outbound adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
