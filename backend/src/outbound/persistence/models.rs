//! Internal Diesel row structs.
//!
//! Rows mirror `schema.rs` and never leave the persistence layer; each
//! repository converts them to domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{event_questions, event_responses, events, questions_master, users};

/// Row read from the `events` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date_start: Option<DateTime<Utc>>,
    pub event_date_end: Option<DateTime<Utc>>,
    pub banner_url: Option<String>,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Master catalog
// ---------------------------------------------------------------------------

/// Row read from the `questions_master` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions_master)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MasterQuestionRow {
    pub id: Uuid,
    pub question_type: String,
    pub text: String,
    pub options: Option<serde_json::Value>,
    pub is_global: bool,
    pub organization_id: Option<Uuid>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions_master)]
pub(crate) struct NewMasterQuestionRow<'a> {
    pub question_type: &'a str,
    pub text: &'a str,
    pub options: Option<serde_json::Value>,
    pub is_global: bool,
    pub organization_id: Option<Uuid>,
}

// ---------------------------------------------------------------------------
// Placements
// ---------------------------------------------------------------------------

/// Row read from, and written to, the `event_questions` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = event_questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlacementRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub question_master_id: Option<Uuid>,
    pub question_type: Option<String>,
    pub required: bool,
    pub page_number: i32,
    pub row_number: i32,
    pub column_number: i32,
    pub order_in_cell: i32,
    pub custom_text: Option<String>,
    pub custom_options: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Registrants and responses
// ---------------------------------------------------------------------------

/// Row read from the `users` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: Option<&'a str>,
    pub phone_number: Option<&'a str>,
    pub name: Option<&'a str>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = event_responses)]
pub(crate) struct NewEventResponseRow {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub answers: serde_json::Value,
}
