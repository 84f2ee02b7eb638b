//! Shared validation helpers for inbound HTTP adapters.
//!
//! Extractor failures (bad JSON, query strings, or path segments) are turned
//! into domain [`Error`]s so they render as outcome envelopes like every
//! other failure.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use envelope::PageRequest;
use tracing::debug;

use crate::domain::{Error, UserId, UserValidationError};
use crate::inbound::http::state::PagingPolicy;

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const ID_FIELD: FieldName = FieldName::new("id");

pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    UserId::new(value).map_err(|_| {
        let field = field.as_str();
        Error::invalid_request(format!("{field} must be a valid UUID"))
    })
}

pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    debug!(field = err.field(), error = %err, "rejected user payload");
    Error::invalid_request(err.to_string())
}

/// Resolve optional `page`/`limit` query values into a [`PageRequest`].
///
/// Missing values fall back to page 1 and the policy default, zero is
/// rejected, and limits above the policy maximum are capped.
pub(crate) fn resolve_page_request(
    page: Option<u64>,
    limit: Option<u64>,
    policy: PagingPolicy,
) -> Result<PageRequest, Error> {
    let request = PageRequest::new(
        page.unwrap_or(1),
        limit.unwrap_or_else(|| policy.default_limit()),
    )
    .map_err(|err| Error::invalid_request(err.to_string()))?;
    Ok(request.capped_at(policy.max_limit()))
}

fn reject(kind: &str, detail: impl std::fmt::Display, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %detail, "rejected {kind}");
    Error::invalid_request(format!("invalid {kind}: {detail}")).into()
}

fn reject_json(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            debug!(path = %req.path(), error = %err, "rejected oversized JSON body");
            Error::payload_too_large(format!("JSON body too large: {err}")).into()
        }
        JsonPayloadError::ContentType => {
            debug!(path = %req.path(), "rejected non-JSON content type");
            Error::unsupported_media_type("request body must be application/json").into()
        }
        other => reject("JSON body", other, req),
    }
}

/// JSON body extractor settings rendering failures as outcome envelopes.
///
/// Malformed bodies are 400, oversized bodies 413 and non-JSON content types
/// 415.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_json)
}

/// Query string extractor settings rendering failures as outcome envelopes.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| reject("query string", err, req))
}

/// Path extractor settings rendering failures as outcome envelopes.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| reject("path", err, req))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test};
    use envelope::Outcome;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    #[case(None, None, 1, 20)]
    #[case(Some(3), None, 3, 20)]
    #[case(Some(2), Some(5), 2, 5)]
    #[case(Some(1), Some(500), 1, 100)]
    fn resolves_defaults_and_caps(
        #[case] page: Option<u64>,
        #[case] limit: Option<u64>,
        #[case] expected_page: u64,
        #[case] expected_limit: u64,
    ) {
        let request =
            resolve_page_request(page, limit, PagingPolicy::default()).expect("valid request");
        assert_eq!(request.page(), expected_page);
        assert_eq!(request.limit(), expected_limit);
    }

    #[rstest]
    #[case(Some(0), None, "page must be at least 1")]
    #[case(None, Some(0), "limit must be at least 1")]
    fn rejects_zero_values(
        #[case] page: Option<u64>,
        #[case] limit: Option<u64>,
        #[case] message: &str,
    ) {
        let err = resolve_page_request(page, limit, PagingPolicy::default())
            .expect_err("zero is rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), message);
    }

    #[rstest]
    fn parse_user_id_names_the_field() {
        let err = parse_user_id("nope", ID_FIELD).expect_err("invalid uuid");
        assert_eq!(err.message(), "id must be a valid UUID");
    }

    async fn accept_json(_: web::Json<serde_json::Value>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn accept_query(_: web::Query<HashMap<String, u64>>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn accept_path(_: web::Path<u32>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn extractor_response(request: actix_test::TestRequest) -> (StatusCode, String) {
        let app = actix_test::init_service(
            App::new()
                .app_data(json_config().limit(64))
                .app_data(query_config())
                .app_data(path_config())
                .route("/json", web::post().to(accept_json))
                .route("/query", web::get().to(accept_query))
                .route("/path/{id}", web::get().to(accept_path)),
        )
        .await;

        let res = actix_test::call_service(&app, request.to_request()).await;
        let status = res.status();
        let body: Outcome<()> = actix_test::read_body_json(res).await;
        assert!(!body.is_success());
        (status, body.error().expect("error message").to_owned())
    }

    #[rstest]
    #[case(actix_test::TestRequest::post().uri("/json").insert_header(("content-type", "application/json")).set_payload("{"), "invalid JSON body")]
    #[case(actix_test::TestRequest::get().uri("/query?page=abc"), "invalid query string")]
    #[case(actix_test::TestRequest::get().uri("/path/abc"), "invalid path")]
    #[actix_web::test]
    async fn extractor_failures_render_as_outcomes(
        #[case] request: actix_test::TestRequest,
        #[case] prefix: &str,
    ) {
        let (status, error) = extractor_response(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error.starts_with(prefix), "unexpected error: {error}");
    }

    #[rstest]
    #[actix_web::test]
    async fn oversized_json_bodies_are_payload_too_large() {
        let payload = format!("{{\"displayName\":\"{}\"}}", "a".repeat(256));
        let request = actix_test::TestRequest::post()
            .uri("/json")
            .insert_header(("content-type", "application/json"))
            .set_payload(payload);

        let (status, error) = extractor_response(request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(error.starts_with("JSON body too large"), "unexpected error: {error}");
    }

    #[rstest]
    #[actix_web::test]
    async fn non_json_content_types_are_unsupported() {
        let request = actix_test::TestRequest::post()
            .uri("/json")
            .insert_header(("content-type", "text/plain"))
            .set_payload("{}");

        let (status, error) = extractor_response(request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(error, "request body must be application/json");
    }
}
