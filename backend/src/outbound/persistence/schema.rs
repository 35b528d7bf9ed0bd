//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Events that own a registration form.
    events (id) {
        id -> Uuid,
        /// Organization that created the event.
        organization_id -> Uuid,
        name -> Text,
        /// Public URL segment; unique when present.
        slug -> Nullable<Text>,
        description -> Nullable<Text>,
        location -> Nullable<Text>,
        event_date_start -> Nullable<Timestamptz>,
        event_date_end -> Nullable<Timestamptz>,
        banner_url -> Nullable<Text>,
        /// `draft`, `active`, `published` or `closed`.
        status -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Reusable question templates, global or organization-scoped.
    questions_master (id) {
        id -> Uuid,
        #[sql_name = "type"]
        question_type -> Text,
        text -> Text,
        /// JSON array of option strings, or null.
        options -> Nullable<Jsonb>,
        is_global -> Bool,
        /// Owning organization; null for global rows.
        organization_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One question placed on one event's form.
    ///
    /// Exactly one of `type` and `question_master_id` is set.
    event_questions (id) {
        id -> Uuid,
        event_id -> Uuid,
        question_master_id -> Nullable<Uuid>,
        #[sql_name = "type"]
        question_type -> Nullable<Text>,
        required -> Bool,
        page_number -> Int4,
        row_number -> Int4,
        column_number -> Int4,
        order_in_cell -> Int4,
        custom_text -> Nullable<Text>,
        /// JSON array of options or a metadata object.
        custom_options -> Nullable<Jsonb>,
    }
}

diesel::table! {
    /// Registrants, deduplicated by email or phone.
    users (id) {
        id -> Uuid,
        email -> Nullable<Text>,
        phone_number -> Nullable<Text>,
        name -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One registrant's answers to one event. Unique per (user, event).
    event_responses (id) {
        id -> Uuid,
        user_id -> Uuid,
        event_id -> Uuid,
        /// Answer map keyed by placement id.
        answers -> Jsonb,
        submitted_at -> Timestamptz,
    }
}

diesel::joinable!(event_questions -> events (event_id));
diesel::joinable!(event_questions -> questions_master (question_master_id));
diesel::joinable!(event_responses -> events (event_id));
diesel::joinable!(event_responses -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    events,
    questions_master,
    event_questions,
    users,
    event_responses,
);
