//! Form builder handlers.
//!
//! ```text
//! GET /api/v1/events/{event_id}/questions
//! PUT /api/v1/events/{event_id}/questions
//! ```

use actix_web::{get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::SaveQuestionsRequest;
use crate::domain::{Error, ReconstructedQuestion};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, QuestionSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_uuid, require_text,
};

const EVENT_ID: FieldName = FieldName::new("eventId");
const ORGANIZATION_ID: FieldName = FieldName::new("organizationId");
const QUESTIONS: FieldName = FieldName::new("questions");

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsBody {
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<ReconstructedQuestion>,
}

/// Whole-form save from the builder.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuestionsBody {
    #[schema(example = "9b2d6a57-0e47-4c7e-a1f3-5d6f8e9a0b1c")]
    pub organization_id: Option<String>,
    #[schema(value_type = Option<Vec<QuestionSchema>>)]
    pub questions: Option<Vec<ReconstructedQuestion>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuestionsResult {
    pub success: bool,
    pub saved_count: usize,
}

fn parse_save(event_id: &str, body: SaveQuestionsBody) -> Result<SaveQuestionsRequest, Error> {
    let organization_id = require_text(body.organization_id, ORGANIZATION_ID)?;
    let questions = body
        .questions
        .ok_or_else(|| missing_field_error(QUESTIONS))?;
    Ok(SaveQuestionsRequest {
        event_id: parse_uuid(event_id, EVENT_ID)?,
        organization_id: parse_uuid(&organization_id, ORGANIZATION_ID)?,
        questions,
    })
}

/// Load an event's form for the builder, in render order.
#[utoipa::path(
    get,
    path = "/api/v1/events/{event_id}/questions",
    params(("event_id" = String, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "Stored questions", body = QuestionsBody),
        (status = 400, description = "Malformed event id", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["forms"],
    operation_id = "getEventQuestions"
)]
#[get("/events/{event_id}/questions")]
pub async fn get_event_questions(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<QuestionsBody>> {
    let event_id = parse_uuid(&path.into_inner(), EVENT_ID)?;
    let questions = state.forms.load_event_questions(event_id).await?;
    Ok(web::Json(QuestionsBody { questions }))
}

/// Replace an event's form. Either every question is stored or none is.
#[utoipa::path(
    put,
    path = "/api/v1/events/{event_id}/questions",
    params(("event_id" = String, Path, description = "Event identifier")),
    request_body = SaveQuestionsBody,
    responses(
        (status = 200, description = "Form saved", body = SaveQuestionsResult),
        (status = 400, description = "Invalid question list", body = ErrorSchema),
        (status = 404, description = "Event not found", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["forms"],
    operation_id = "saveEventQuestions"
)]
#[put("/events/{event_id}/questions")]
pub async fn save_event_questions(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SaveQuestionsBody>,
) -> ApiResult<web::Json<SaveQuestionsResult>> {
    let request = parse_save(&path.into_inner(), payload.into_inner())?;
    let response = state.form_builder.save_questions(request).await?;
    Ok(web::Json(SaveQuestionsResult {
        success: true,
        saved_count: response.saved_count,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use uuid::Uuid;

    use super::*;
    use crate::domain::QuestionType;
    use crate::domain::ports::{
        FixtureRegistrationCommand, MockFormBuilderCommand, MockFormQuery, SaveQuestionsResponse,
    };
    use crate::inbound::http::api_scope;

    async fn call(
        state: HttpState,
        req: actix_test::TestRequest,
    ) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(api_scope()),
        )
        .await;
        let res = actix_test::call_service(&app, req.to_request()).await;
        let status = res.status();
        (status, actix_test::read_body_json(res).await)
    }

    fn state(builder: MockFormBuilderCommand, forms: MockFormQuery) -> HttpState {
        HttpState::new(
            Arc::new(builder),
            Arc::new(forms),
            Arc::new(FixtureRegistrationCommand),
        )
    }

    #[rstest]
    #[actix_web::test]
    async fn get_returns_questions_in_camel_case() {
        let event_id = Uuid::new_v4();
        let mut forms = MockFormQuery::new();
        forms
            .expect_load_event_questions()
            .withf(move |id| *id == event_id)
            .returning(|_| {
                Ok(vec![ReconstructedQuestion::custom(
                    "q1",
                    QuestionType::CheckboxGroup,
                    "Sessions",
                )])
            });

        let (status, body) = call(
            state(MockFormBuilderCommand::new(), forms),
            actix_test::TestRequest::get().uri(&format!("/api/v1/events/{event_id}/questions")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let question = &body["questions"][0];
        assert_eq!(question["type"], "checkbox_group");
        assert_eq!(question["rowNumber"], 0);
        assert_eq!(question["isFromMaster"], false);
    }

    #[rstest]
    #[actix_web::test]
    async fn put_forwards_questions_and_reports_count() {
        let event_id = Uuid::new_v4();
        let organization_id = Uuid::new_v4();
        let mut builder = MockFormBuilderCommand::new();
        builder
            .expect_save_questions()
            .withf(move |request| {
                request.event_id == event_id
                    && request.organization_id == organization_id
                    && request.questions.len() == 1
                    && request.questions[0].question_type == QuestionType::Rating
            })
            .times(1)
            .returning(|request| {
                Ok(SaveQuestionsResponse {
                    saved_count: request.questions.len(),
                })
            });

        let (status, body) = call(
            state(builder, MockFormQuery::new()),
            actix_test::TestRequest::put()
                .uri(&format!("/api/v1/events/{event_id}/questions"))
                .set_json(json!({
                    "organizationId": organization_id,
                    "questions": [{
                        "id": "draft-1",
                        "type": "rating",
                        "question": "How was it?",
                        "maxRating": 5,
                    }],
                })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "savedCount": 1}));
    }

    #[rstest]
    #[case::no_org(json!({"questions": []}), "organizationId")]
    #[case::no_questions(json!({"organizationId": Uuid::nil()}), "questions")]
    #[actix_web::test]
    async fn put_requires_fields(#[case] payload: Value, #[case] field: &str) {
        let mut builder = MockFormBuilderCommand::new();
        builder.expect_save_questions().never();

        let (status, body) = call(
            state(builder, MockFormQuery::new()),
            actix_test::TestRequest::put()
                .uri(&format!("/api/v1/events/{}/questions", Uuid::new_v4()))
                .set_json(payload),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], field);
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_path_id_is_rejected() {
        let mut forms = MockFormQuery::new();
        forms.expect_load_event_questions().never();

        let (status, body) = call(
            state(MockFormBuilderCommand::new(), forms),
            actix_test::TestRequest::get().uri("/api/v1/events/nope/questions"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "eventId");
    }
}
