//! Reusable master question templates.

use uuid::Uuid;

use super::QuestionType;

/// Visibility of a master question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterScope {
    /// Shared by every organization.
    Global,
    /// Private to one organization.
    Organization(Uuid),
}

/// A reusable question template from the master catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterQuestion {
    pub id: Uuid,
    pub question_type: QuestionType,
    pub text: String,
    pub options: Option<Vec<String>>,
    pub scope: MasterScope,
}

/// The (type, text, options) key used to find or mint a master question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterSignature {
    pub question_type: QuestionType,
    pub text: String,
    pub options: Option<Vec<String>>,
}

impl MasterSignature {
    /// Build a signature. An empty option list is the same as no options.
    pub fn new(
        question_type: QuestionType,
        text: impl Into<String>,
        options: Option<Vec<String>>,
    ) -> Self {
        Self {
            question_type,
            text: text.into(),
            options: options.filter(|list| !list.is_empty()),
        }
    }

    /// Whether a catalog entry carries exactly these options, in order.
    #[must_use]
    pub fn options_match(&self, master: &MasterQuestion) -> bool {
        let stored = master.options.as_ref().filter(|list| !list.is_empty());
        stored == self.options.as_ref()
    }
}
