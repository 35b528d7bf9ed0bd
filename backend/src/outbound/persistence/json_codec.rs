//! JSONB encoding for option lists, placement overrides and answer maps.
//!
//! The `custom_options` column holds either a JSON array (answer choices) or
//! a JSON object (presentation metadata). This module is the only place that
//! looks at that shape; everything above it sees [`CustomOptions`].

use serde_json::Value;

use crate::domain::{AnswerMap, CustomOptions, QuestionMetadata};

/// Encode an option list. Empty lists are stored as null.
pub(super) fn options_to_json(options: Option<&[String]>) -> Option<Value> {
    options
        .filter(|list| !list.is_empty())
        .map(|list| Value::Array(list.iter().cloned().map(Value::String).collect()))
}

/// Decode an option list; JSON null reads as no options.
pub(super) fn json_to_options(value: Option<Value>) -> Result<Option<Vec<String>>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Array(_)) => serde_json::from_value(value)
            .map(Some)
            .map_err(|err| format!("options must be an array of strings: {err}")),
        Some(_) => Err("options must be a JSON array".to_owned()),
    }
}

pub(super) fn custom_options_to_json(options: &CustomOptions) -> Result<Value, String> {
    match options {
        CustomOptions::Options(list) => Ok(Value::Array(
            list.iter().cloned().map(Value::String).collect(),
        )),
        CustomOptions::Metadata(metadata) => {
            serde_json::to_value(metadata).map_err(|err| err.to_string())
        }
    }
}

/// Decode a stored override: arrays are options, objects are metadata.
pub(super) fn json_to_custom_options(value: Option<Value>) -> Result<Option<CustomOptions>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Array(_)) => serde_json::from_value::<Vec<String>>(value)
            .map(|list| Some(CustomOptions::Options(list)))
            .map_err(|err| format!("custom options must be strings: {err}")),
        Some(value @ Value::Object(_)) => serde_json::from_value::<QuestionMetadata>(value)
            .map(|metadata| Some(CustomOptions::Metadata(metadata)))
            .map_err(|err| format!("invalid question metadata: {err}")),
        Some(other) => Err(format!("unsupported custom options payload: {other}")),
    }
}

pub(super) fn answers_to_json(answers: &AnswerMap) -> Result<Value, String> {
    serde_json::to_value(answers).map_err(|err| err.to_string())
}
