//! Storage form of a question placed on an event's form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Layout, MasterQuestion, QuestionType};

/// Presentation metadata stored in place of an option list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tags: Option<u32>,
}

impl QuestionMetadata {
    #[must_use]
    pub fn placeholder(value: impl Into<String>) -> Self {
        Self {
            placeholder: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn max_rating(value: u32) -> Self {
        Self {
            max_rating: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn max_tags(value: u32) -> Self {
        Self {
            max_tags: Some(value),
            ..Self::default()
        }
    }
}

/// Per-placement override payload. A record carries one shape or the other,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomOptions {
    /// Ordered answer choices for choice-like questions.
    Options(Vec<String>),
    /// Placeholder, rating scale, or tag limit.
    Metadata(QuestionMetadata),
}

/// Where a placement's question type comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOrigin {
    /// Fully custom question; the placement stores its own type.
    Custom { question_type: QuestionType },
    /// Reference to a master question, optionally overridden.
    Master { master_id: Uuid },
}

/// One question as it appears on one event's form.
///
/// `id` is the authoritative identifier used for rendering and as the key in
/// answer maps; it is never the master id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedQuestion {
    pub id: Uuid,
    pub event_id: Uuid,
    pub origin: PlacementOrigin,
    pub required: bool,
    pub layout: Layout,
    pub custom_text: Option<String>,
    pub custom_options: Option<CustomOptions>,
}

impl PlacedQuestion {
    #[must_use]
    pub const fn master_id(&self) -> Option<Uuid> {
        match self.origin {
            PlacementOrigin::Master { master_id } => Some(master_id),
            PlacementOrigin::Custom { .. } => None,
        }
    }
}

/// A placement read back together with the master row it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedPlacement {
    pub placement: PlacedQuestion,
    pub master: Option<MasterQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_serialises_only_present_keys() {
        let value = serde_json::to_value(QuestionMetadata::max_rating(5)).expect("serialise");
        assert_eq!(value, json!({"maxRating": 5}));
    }

    #[test]
    fn master_id_is_absent_for_custom_origin() {
        let placed = PlacedQuestion {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            origin: PlacementOrigin::Custom {
                question_type: QuestionType::Boolean,
            },
            required: false,
            layout: Layout::default(),
            custom_text: Some("Attending the dinner?".to_owned()),
            custom_options: None,
        };
        assert!(placed.master_id().is_none());
    }
}
