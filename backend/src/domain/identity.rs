//! Keyword heuristics that recover who registered from free-form answers.
//!
//! Forms have no fixed schema, so the extractor looks at each answered
//! question's type and wording. The first candidate met in answer order wins
//! for each field; later candidates for a filled field are ignored.

use std::collections::HashMap;

use super::ports::IdentityExtractor;
use super::{AnswerMap, QuestionType, ReconstructedQuestion};

const EMAIL_KEYWORDS: [&str; 3] = ["email", "e-mail", "mail"];
const PHONE_KEYWORDS: [&str; 4] = ["phone", "mobile", "number", "contact"];
const NAME_KEYWORDS: [&str; 1] = ["name"];

/// Contact details recovered from a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,
}

impl Identity {
    /// No email and no phone: the registrant cannot be deduplicated.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}

/// Default extractor matching question types and English keywords.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordIdentityExtractor;

fn mentions(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

fn fill(slot: &mut Option<String>, matches: bool, candidate: &str) {
    if slot.is_none() && matches {
        *slot = Some(candidate.to_owned());
    }
}

impl IdentityExtractor for KeywordIdentityExtractor {
    fn extract(&self, answers: &AnswerMap, questions: &[ReconstructedQuestion]) -> Identity {
        let by_id: HashMap<&str, &ReconstructedQuestion> = questions
            .iter()
            .map(|question| (question.id.as_str(), question))
            .collect();

        let mut identity = Identity::default();
        for (question_id, answer) in answers {
            let Some(question) = by_id.get(question_id.as_str()) else {
                continue;
            };
            let Some(candidate) = answer.first().map(str::trim).filter(|v| !v.is_empty()) else {
                continue;
            };
            let text = question.question.to_lowercase();
            let kind = question.question_type;

            fill(
                &mut identity.email,
                kind == QuestionType::Email || mentions(&text, &EMAIL_KEYWORDS),
                candidate,
            );
            fill(
                &mut identity.phone,
                kind == QuestionType::Tel || mentions(&text, &PHONE_KEYWORDS),
                candidate,
            );
            fill(&mut identity.name, mentions(&text, &NAME_KEYWORDS), candidate);
        }
        identity
    }
}
