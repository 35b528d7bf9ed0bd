//! HTTP inbound adapter exposing the REST endpoints.

use actix_web::{Scope, web};
use serde_json::json;

use crate::domain::Error;

pub mod error;
pub mod health;
pub mod public_forms;
pub mod questions;
pub mod registrations;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;

/// JSON extractor settings: malformed bodies use the standard error
/// envelope instead of actix's plain-text response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("request body could not be parsed: {err}"))
            .with_details(json!({ "code": "invalid_body" }))
            .into()
    })
}

/// Every `/api/v1` handler, ready to mount on an `App`. Handlers read
/// [`state::HttpState`] from app data.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(json_config())
        .service(registrations::submit_response)
        .service(questions::get_event_questions)
        .service(questions::save_event_questions)
        .service(public_forms::get_public_form)
}
