//! Question type catalogue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of question widgets a form may contain.
///
/// The serialised names match the values persisted in the `type` columns of
/// `questions_master` and `event_questions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "textarea")]
    Textarea,
    #[serde(rename = "dropdown")]
    Dropdown,
    #[serde(rename = "checkbox_group")]
    CheckboxGroup,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "tel")]
    Tel,
    #[serde(rename = "tags")]
    Tags,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "boolean")]
    Boolean,
}

impl QuestionType {
    /// Every variant, in catalogue order.
    pub const ALL: [Self; 10] = [
        Self::MultipleChoice,
        Self::Text,
        Self::Textarea,
        Self::Dropdown,
        Self::CheckboxGroup,
        Self::Email,
        Self::Tel,
        Self::Tags,
        Self::Rating,
        Self::Boolean,
    ];

    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Dropdown => "dropdown",
            Self::CheckboxGroup => "checkbox_group",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Tags => "tags",
            Self::Rating => "rating",
            Self::Boolean => "boolean",
        }
    }

    /// Types whose answers come from a fixed option list.
    #[must_use]
    pub const fn is_choice_like(self) -> bool {
        matches!(self, Self::Dropdown | Self::MultipleChoice | Self::CheckboxGroup)
    }

    /// Free-text types that may carry a placeholder.
    #[must_use]
    pub const fn is_text_like(self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::Tel | Self::Textarea)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored type name is not part of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown question type: {0}")]
pub struct UnknownQuestionType(pub String);

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownQuestionType(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn stored_names_parse_back() {
        for kind in QuestionType::ALL {
            assert_eq!(kind.as_str().parse::<QuestionType>(), Ok(kind));
        }
    }

    #[rstest]
    fn serde_uses_stored_names() {
        let json = serde_json::to_string(&QuestionType::CheckboxGroup).expect("serialise");
        assert_eq!(json, "\"checkbox_group\"");
        let parsed: QuestionType = serde_json::from_str("\"multiple-choice\"").expect("parse");
        assert_eq!(parsed, QuestionType::MultipleChoice);
    }

    #[rstest]
    #[case(QuestionType::Dropdown, true, false)]
    #[case(QuestionType::MultipleChoice, true, false)]
    #[case(QuestionType::CheckboxGroup, true, false)]
    #[case(QuestionType::Text, false, true)]
    #[case(QuestionType::Email, false, true)]
    #[case(QuestionType::Tel, false, true)]
    #[case(QuestionType::Textarea, false, true)]
    #[case(QuestionType::Rating, false, false)]
    #[case(QuestionType::Tags, false, false)]
    #[case(QuestionType::Boolean, false, false)]
    fn classification(#[case] kind: QuestionType, #[case] choice: bool, #[case] text: bool) {
        assert_eq!(kind.is_choice_like(), choice);
        assert_eq!(kind.is_text_like(), text);
    }

    #[rstest]
    fn unknown_names_are_rejected() {
        let err = "slider".parse::<QuestionType>().expect_err("unknown type");
        assert_eq!(err.to_string(), "unknown question type: slider");
    }
}
