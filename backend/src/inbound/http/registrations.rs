//! Attendee registration handler.
//!
//! ```text
//! POST /api/v1/submit-response
//! ```

use actix_web::{post, web};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::ports::SubmitRegistrationRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_answers, parse_uuid, require_text,
};

const EVENT_ID: FieldName = FieldName::new("eventId");
const ANSWERS: FieldName = FieldName::new("answers");

/// Submission body. Both fields are required; they are optional here so a
/// missing one yields a field-level error instead of a decode failure.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseRequest {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub event_id: Option<String>,
    /// Answers keyed by question id: a string, or a list of strings.
    #[schema(value_type = Option<Object>)]
    pub answers: Option<IndexMap<String, serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseBody {
    pub success: bool,
    #[schema(example = "Registration submitted successfully")]
    pub message: String,
    pub event_name: String,
}

fn parse_request(payload: SubmitResponseRequest) -> Result<SubmitRegistrationRequest, Error> {
    let event_id = require_text(payload.event_id, EVENT_ID)?;
    let answers = payload
        .answers
        .ok_or_else(|| missing_field_error(ANSWERS))?;
    Ok(SubmitRegistrationRequest {
        event_id: parse_uuid(&event_id, EVENT_ID)?,
        answers: parse_answers(answers, ANSWERS)?,
    })
}

/// Register an attendee for an open event.
#[utoipa::path(
    post,
    path = "/api/v1/submit-response",
    request_body = SubmitResponseRequest,
    responses(
        (status = 200, description = "Registration stored", body = SubmitResponseBody),
        (status = 400, description = "Missing fields or required answers", body = ErrorSchema),
        (status = 404, description = "Event not found or closed", body = ErrorSchema),
        (status = 409, description = "Already registered", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["registrations"],
    operation_id = "submitResponse"
)]
#[post("/submit-response")]
pub async fn submit_response(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitResponseRequest>,
) -> ApiResult<web::Json<SubmitResponseBody>> {
    let request = parse_request(payload.into_inner())?;
    let outcome = state.registrations.submit(request).await?;
    Ok(web::Json(SubmitResponseBody {
        success: true,
        message: "Registration submitted successfully".to_owned(),
        event_name: outcome.event_name,
    }))
}

#[cfg(test)]
#[path = "registrations_tests.rs"]
mod tests;
