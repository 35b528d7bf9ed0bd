//! Attendee answers keyed by placement id.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ReconstructedQuestion;

/// One answer: free text, or an ordered selection for multi-select and tag
/// questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerValue {
    /// Whether the answer carries no usable content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Single(text) => text.trim().is_empty(),
            Self::Multiple(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }

    /// The answer as a single string: the text itself, or the first
    /// selected item.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text.as_str()),
            Self::Multiple(items) => items.first().map(String::as_str),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        Self::Multiple(value)
    }
}

/// Answers in submission order. Order matters: identity extraction keeps the
/// first candidate it meets.
pub type AnswerMap = IndexMap<String, AnswerValue>;

/// A required question left unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingAnswer {
    pub id: String,
    pub question: String,
}

/// Required questions with no answer or a blank one, in question order.
#[must_use]
pub fn missing_required_answers(
    questions: &[ReconstructedQuestion],
    answers: &AnswerMap,
) -> Vec<MissingAnswer> {
    questions
        .iter()
        .filter(|question| question.required)
        .filter(|question| {
            answers
                .get(&question.id)
                .is_none_or(AnswerValue::is_blank)
        })
        .map(|question| MissingAnswer {
            id: question.id.clone(),
            question: question.question.clone(),
        })
        .collect()
}
