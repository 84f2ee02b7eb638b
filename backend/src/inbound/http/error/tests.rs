//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::payload_too_large("huge"), StatusCode::PAYLOAD_TOO_LARGE)]
#[case(Error::unsupported_media_type("text"), StatusCode::UNSUPPORTED_MEDIA_TYPE)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn render(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("outcome JSON");
    (status, trace_id, body)
}

#[rstest]
#[actix_web::test]
async fn failures_render_as_outcome_envelopes() {
    let err = Error::not_found("User not found").with_trace_id(TRACE_ID);
    let (status, trace_id, body) = render(&err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(trace_id.as_deref(), Some(TRACE_ID));
    assert_eq!(body, json!({"success": false, "error": "User not found"}));
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let err = Error::internal("connection string leaked").with_trace_id(TRACE_ID);
    let (status, trace_id, body) = render(&err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(trace_id.as_deref(), Some(TRACE_ID));
    assert_eq!(body, json!({"success": false, "error": REDACTED_MESSAGE}));
}

#[rstest]
#[actix_web::test]
async fn trace_header_is_omitted_without_trace_id() {
    let (_, trace_id, body) = render(&Error::conflict("taken")).await;
    assert!(trace_id.is_none());
    assert_eq!(body["error"], "taken");
    assert!(body.get("data").is_none());
}

#[rstest]
fn actix_errors_become_redacted_internal_errors() {
    let actix_err = actix_web::error::ErrorBadGateway("upstream detail");
    let err = Error::from(actix_err);
    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), REDACTED_MESSAGE);
}
