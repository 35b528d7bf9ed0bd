//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] registers every handler in `inbound::http` together with the
//! schema wrappers from `inbound::http::schemas`, so domain types stay free
//! of utoipa derives. The document backs Swagger UI in debug builds and is
//! printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::public_forms::{FormPageBody, PublicFormBody};
use crate::inbound::http::questions::{QuestionsBody, SaveQuestionsBody, SaveQuestionsResult};
use crate::inbound::http::registrations::{SubmitResponseBody, SubmitResponseRequest};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, EventSummarySchema, QuestionSchema, QuestionTypeSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eventform API",
        description = "Form builder persistence, public registration forms and attendee submissions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::registrations::submit_response,
        crate::inbound::http::questions::get_event_questions,
        crate::inbound::http::questions::save_event_questions,
        crate::inbound::http::public_forms::get_public_form,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        QuestionSchema,
        QuestionTypeSchema,
        EventSummarySchema,
        SubmitResponseRequest,
        SubmitResponseBody,
        QuestionsBody,
        SaveQuestionsBody,
        SaveQuestionsResult,
        PublicFormBody,
        FormPageBody,
    )),
    tags(
        (name = "registrations", description = "Attendee submissions"),
        (name = "forms", description = "Form builder and public form loading"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
