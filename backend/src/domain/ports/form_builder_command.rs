//! Driving port for saving an event's form from the builder.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, ReconstructedQuestion};

/// The builder's full question list for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveQuestionsRequest {
    pub event_id: Uuid,
    /// Organization that owns any master entries minted during the save.
    pub organization_id: Uuid,
    pub questions: Vec<ReconstructedQuestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuestionsResponse {
    pub saved_count: usize,
}

/// Replace an event's form with the builder's questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormBuilderCommand: Send + Sync {
    /// Save every question or none of them.
    ///
    /// # Errors
    /// - `not_found` when the event does not exist.
    /// - `invalid_request` for duplicate ids or out-of-grid positions.
    /// - `dependency_failure` when the catalog or storage fails; the
    ///   previously stored form is left untouched.
    async fn save_questions(
        &self,
        request: SaveQuestionsRequest,
    ) -> Result<SaveQuestionsResponse, Error>;
}

/// Fixture implementation that accepts every save without storing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFormBuilderCommand;

#[async_trait]
impl FormBuilderCommand for FixtureFormBuilderCommand {
    async fn save_questions(
        &self,
        request: SaveQuestionsRequest,
    ) -> Result<SaveQuestionsResponse, Error> {
        Ok(SaveQuestionsResponse {
            saved_count: request.questions.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuestionType;

    #[tokio::test]
    async fn fixture_counts_questions() {
        let request = SaveQuestionsRequest {
            event_id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            questions: vec![
                ReconstructedQuestion::custom("a", QuestionType::Text, "Name"),
                ReconstructedQuestion::custom("b", QuestionType::Email, "Email"),
            ],
        };

        let response = FixtureFormBuilderCommand
            .save_questions(request)
            .await
            .expect("fixture save succeeds");

        assert_eq!(response.saved_count, 2);
    }
}
