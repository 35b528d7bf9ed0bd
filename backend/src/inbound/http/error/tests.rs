//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn body_of(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[case::invalid(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case::not_found(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case::conflict(Error::conflict("again"), StatusCode::CONFLICT)]
#[case::dependency(Error::dependency_failure("db"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case::internal(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(trace_id: String) {
    let error = Error::invalid_request("bad")
        .with_trace_id(trace_id.clone())
        .with_details(json!({"field": "eventId"}));

    let (status, header, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({
            "code": "invalid_request",
            "message": "bad",
            "details": {"field": "eventId"},
            "traceId": trace_id,
        })
    );
}

#[rstest]
#[case::dependency(Error::dependency_failure("relation \"users\" does not exist"))]
#[case::internal(Error::internal("boom"))]
#[actix_web::test]
async fn server_faults_are_redacted(#[case] error: Error, trace_id: String) {
    let error = error
        .with_trace_id(trace_id)
        .with_details(json!({"secret": "x"}));

    let (status, header, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert!(body.get("details").is_none());
    let message = body["message"].as_str().expect("message present");
    assert!(!message.contains("users"));
    assert!(!message.contains("boom"));
    assert_eq!(body["traceId"], TRACE_ID);
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_header() {
    let (_, header, body) = body_of(&Error::conflict("again")).await;
    assert!(header.is_none());
    assert!(body.get("traceId").is_none());
}
