//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their wire
//! shape and register under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The event is missing or not open for registration.
    #[schema(rename = "not_found")]
    NotFound,
    /// The registrant already answered this event's form.
    #[schema(rename = "conflict")]
    Conflict,
    /// Storage or another dependency failed.
    #[schema(rename = "dependency_failure")]
    DependencyFailure,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message; generic for server faults.
    #[schema(example = "missing required field: eventId")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "6f1c2b9e-4d3a-4a8e-9b1f-0c2d3e4f5a6b")]
    trace_id: Option<String>,
    /// Field or question context, e.g. `missingQuestions`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::QuestionType`].
#[derive(ToSchema)]
#[schema(as = crate::domain::QuestionType)]
pub enum QuestionTypeSchema {
    #[schema(rename = "multiple-choice")]
    MultipleChoice,
    #[schema(rename = "text")]
    Text,
    #[schema(rename = "textarea")]
    Textarea,
    #[schema(rename = "dropdown")]
    Dropdown,
    #[schema(rename = "checkbox_group")]
    CheckboxGroup,
    #[schema(rename = "email")]
    Email,
    #[schema(rename = "tel")]
    Tel,
    #[schema(rename = "tags")]
    Tags,
    #[schema(rename = "rating")]
    Rating,
    #[schema(rename = "boolean")]
    Boolean,
}

/// OpenAPI schema for [`crate::domain::ReconstructedQuestion`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ReconstructedQuestion, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct QuestionSchema {
    /// Placement id; answers are keyed by it.
    #[schema(example = "2b1e7c84-4a3f-4d7e-8f8e-0f1f4c1a9d21")]
    id: String,
    #[schema(rename = "type")]
    question_type: QuestionTypeSchema,
    #[schema(example = "Full Name")]
    question: String,
    required: bool,
    options: Option<Vec<String>>,
    placeholder: Option<String>,
    max_rating: Option<u32>,
    max_tags: Option<u32>,
    #[schema(minimum = 1, maximum = 2_147_483_647)]
    page: u32,
    #[schema(maximum = 2_147_483_647)]
    row_number: u32,
    #[schema(maximum = 1)]
    column_number: u32,
    #[schema(maximum = 2_147_483_647)]
    order_in_cell: u32,
    is_from_master: bool,
    #[schema(value_type = Option<String>, format = Uuid)]
    master_question_id: Option<String>,
    original_text: Option<String>,
    original_options: Option<Vec<String>>,
    original_placeholder: Option<String>,
    original_max_rating: Option<u32>,
    original_max_tags: Option<u32>,
    is_modified: bool,
}

/// OpenAPI schema for [`crate::domain::EventSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::EventSummary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EventSummarySchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(example = "RustConf 2025")]
    name: String,
    #[schema(example = "rustconf-2025-k3x9")]
    slug: Option<String>,
    description: Option<String>,
    location: Option<String>,
    #[schema(format = DateTime)]
    event_date_start: Option<String>,
    #[schema(format = DateTime)]
    event_date_end: Option<String>,
    banner_url: Option<String>,
}
