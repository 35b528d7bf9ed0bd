//! Tests for the registration handler.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use super::*;
use crate::domain::ports::{FixtureFormBuilderCommand, FixtureFormQuery, MockRegistrationCommand};
use crate::domain::{AnswerValue, RegistrationOutcome};
use crate::inbound::http::api_scope;

const EVENT: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn state_with(registrations: MockRegistrationCommand) -> HttpState {
    HttpState::new(
        Arc::new(FixtureFormBuilderCommand),
        Arc::new(FixtureFormQuery),
        Arc::new(registrations),
    )
}

async fn post(state: HttpState, body: Value) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(api_scope()),
    )
    .await;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/submit-response")
        .set_json(body)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    let status = res.status();
    (status, actix_test::read_body_json(res).await)
}

#[rstest]
#[actix_web::test]
async fn successful_submission_reports_event_name() {
    let mut registrations = MockRegistrationCommand::new();
    registrations
        .expect_submit()
        .withf(|request| {
            request.event_id.to_string() == EVENT
                && request.answers.get("q2")
                    == Some(&AnswerValue::Multiple(vec!["a".into(), "b".into()]))
        })
        .times(1)
        .returning(|_| {
            Ok(RegistrationOutcome {
                registrant_id: Uuid::new_v4(),
                event_name: "RustConf".to_owned(),
            })
        });

    let (status, body) = post(
        state_with(registrations),
        json!({"eventId": EVENT, "answers": {"q1": "a@b.com", "q2": ["a", "b"]}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Registration submitted successfully",
            "eventName": "RustConf",
        })
    );
}

#[rstest]
#[case::no_event(json!({"answers": {}}), "eventId")]
#[case::blank_event(json!({"eventId": "", "answers": {}}), "eventId")]
#[case::no_answers(json!({"eventId": EVENT}), "answers")]
#[actix_web::test]
async fn missing_fields_are_rejected(#[case] body: Value, #[case] field: &str) {
    let mut registrations = MockRegistrationCommand::new();
    registrations.expect_submit().never();

    let (status, body) = post(state_with(registrations), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], "missing_field");
}

#[rstest]
#[actix_web::test]
async fn malformed_event_id_is_rejected() {
    let mut registrations = MockRegistrationCommand::new();
    registrations.expect_submit().never();

    let (status, body) = post(
        state_with(registrations),
        json!({"eventId": "not-a-uuid", "answers": {}}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "invalid_uuid");
}

#[rstest]
#[case::not_found(Error::not_found("Event not found or no longer accepting registrations"), StatusCode::NOT_FOUND)]
#[case::conflict(Error::conflict("You have already registered for this event"), StatusCode::CONFLICT)]
#[case::dependency(Error::dependency_failure("connection refused"), StatusCode::INTERNAL_SERVER_ERROR)]
#[actix_web::test]
async fn domain_failures_map_to_status(#[case] error: Error, #[case] expected: StatusCode) {
    let mut registrations = MockRegistrationCommand::new();
    let returned = error.clone();
    registrations
        .expect_submit()
        .returning(move |_| Err(returned.clone()));

    let (status, body) = post(
        state_with(registrations),
        json!({"eventId": EVENT, "answers": {"q1": "x"}}),
    )
    .await;

    assert_eq!(status, expected);
    if expected.is_server_error() {
        assert_ne!(body["message"], error.message());
    } else {
        assert_eq!(body["message"], error.message());
    }
}

#[rstest]
#[actix_web::test]
async fn invalid_json_uses_the_error_envelope() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::default()))
            .service(api_scope()),
    )
    .await;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/submit-response")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}
