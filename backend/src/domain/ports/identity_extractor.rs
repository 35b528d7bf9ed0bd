//! Port for recovering contact details from a submission.

use crate::domain::{AnswerMap, Identity, ReconstructedQuestion};

/// Pure heuristic over answers and the questions they reply to.
///
/// Answers whose id matches no question contribute nothing.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityExtractor: Send + Sync {
    fn extract(&self, answers: &AnswerMap, questions: &[ReconstructedQuestion]) -> Identity;
}
