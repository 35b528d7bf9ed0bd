//! Public registration form handler.
//!
//! ```text
//! GET /api/v1/forms/{slug}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ports::PublicForm;
use crate::domain::{EventSummary, FormPage, ReconstructedQuestion, group_by_page};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, EventSummarySchema, QuestionSchema};
use crate::inbound::http::state::HttpState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormPageBody {
    pub number: u32,
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<ReconstructedQuestion>,
}

impl From<FormPage> for FormPageBody {
    fn from(page: FormPage) -> Self {
        Self {
            number: page.number,
            questions: page.questions,
        }
    }
}

/// An open event's form, split into pages for rendering.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicFormBody {
    #[schema(value_type = EventSummarySchema)]
    pub event: EventSummary,
    pub page_count: u32,
    pub pages: Vec<FormPageBody>,
}

impl From<PublicForm> for PublicFormBody {
    fn from(form: PublicForm) -> Self {
        Self {
            pages: group_by_page(&form.questions)
                .into_iter()
                .map(FormPageBody::from)
                .collect(),
            event: form.event,
            page_count: form.page_count,
        }
    }
}

/// Load the registration form behind a public slug.
#[utoipa::path(
    get,
    path = "/api/v1/forms/{slug}",
    params(("slug" = String, Path, description = "Public event slug")),
    responses(
        (status = 200, description = "Public form", body = PublicFormBody),
        (status = 404, description = "Event not found or closed", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["forms"],
    operation_id = "getPublicForm"
)]
#[get("/forms/{slug}")]
pub async fn get_public_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let form = state.forms.load_public_form(&path.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-cache"))
        .json(PublicFormBody::from(form)))
}
