//! Shared validation helpers for inbound HTTP adapters.

use indexmap::IndexMap;
use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::domain::{AnswerMap, AnswerValue, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidAnswer,
}

impl ErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidAnswer => "invalid_answer",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    const fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(
    field: FieldName,
    code: ErrorCode,
    message: String,
    extra: Option<(&str, Value)>,
) -> Error {
    let mut details = Map::new();
    details.insert("field".to_owned(), json!(field.as_str()));
    details.insert("code".to_owned(), json!(code.as_str()));
    if let Some((key, value)) = extra {
        details.insert(key.to_owned(), value);
    }
    Error::invalid_request(message).with_details(Value::Object(details))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {}", field.as_str()),
        None,
    )
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    field_error(
        field,
        ErrorCode::InvalidUuid,
        format!("{} must be a valid UUID", field.as_str()),
        Some(("value", json!(value))),
    )
}

fn invalid_answer_error(field: FieldName, question_id: &str) -> Error {
    field_error(
        field,
        ErrorCode::InvalidAnswer,
        format!("answer to {question_id} must be a string or a list of strings"),
        Some(("questionId", json!(question_id))),
    )
}

/// Require a non-blank string field.
pub(crate) fn require_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value.trim()).map_err(|_| invalid_uuid_error(field, value))
}

/// Convert raw JSON answers into typed ones, keeping submission order.
pub(crate) fn parse_answers(
    raw: IndexMap<String, Value>,
    field: FieldName,
) -> Result<AnswerMap, Error> {
    raw.into_iter()
        .map(|(question_id, value)| {
            let answer = match value {
                Value::String(text) => AnswerValue::Single(text),
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(text) => Some(text),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()
                    .map(AnswerValue::Multiple)
                    .ok_or_else(|| invalid_answer_error(field, &question_id))?,
                _ => return Err(invalid_answer_error(field, &question_id)),
            };
            Ok((question_id, answer))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ANSWERS: FieldName = FieldName::new("answers");

    fn raw(value: Value) -> IndexMap<String, Value> {
        serde_json::from_value(value).expect("object")
    }

    #[rstest]
    fn missing_field_names_the_field() {
        let err = missing_field_error(FieldName::new("eventId"));
        assert_eq!(
            err.details(),
            Some(&json!({"field": "eventId", "code": "missing_field"}))
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    #[case(Some("   ".to_owned()))]
    fn blank_text_is_missing(#[case] value: Option<String>) {
        let err = require_text(value, FieldName::new("eventId")).expect_err("missing");
        assert_eq!(err.details().map(|d| &d["code"]), Some(&json!("missing_field")));
    }

    #[rstest]
    fn invalid_uuid_echoes_value() {
        let err = parse_uuid("abc", FieldName::new("eventId")).expect_err("invalid");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "eventId", "code": "invalid_uuid", "value": "abc"}))
        );
    }

    #[rstest]
    fn answers_keep_order_and_shape() {
        let answers = parse_answers(raw(json!({"b": ["x", "y"], "a": "text"})), ANSWERS)
            .expect("valid answers");
        let keys: Vec<_> = answers.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(answers["b"], AnswerValue::Multiple(vec!["x".into(), "y".into()]));
    }

    #[rstest]
    #[case(json!({"q1": 5}))]
    #[case(json!({"q1": ["ok", 3]}))]
    #[case(json!({"q1": null}))]
    fn non_string_answers_are_rejected(#[case] value: Value) {
        let err = parse_answers(raw(value), ANSWERS).expect_err("invalid");
        assert_eq!(err.details().map(|d| &d["questionId"]), Some(&json!("q1")));
        assert_eq!(err.details().map(|d| &d["code"]), Some(&json!("invalid_answer")));
    }
}
