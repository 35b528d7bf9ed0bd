//! Driving port for attendee registration.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AnswerMap, Error, RegistrationOutcome};

/// An attendee's submission for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRegistrationRequest {
    pub event_id: Uuid,
    /// Answers keyed by placement id, in submission order.
    pub answers: AnswerMap,
}

/// Register an attendee against an open event.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationCommand: Send + Sync {
    /// # Errors
    /// - `not_found` when the event is missing or not accepting
    ///   registrations.
    /// - `invalid_request` when required answers are missing; nothing is
    ///   written.
    /// - `conflict` when the registrant already responded to the event.
    /// - `dependency_failure` for storage failures.
    async fn submit(&self, request: SubmitRegistrationRequest)
    -> Result<RegistrationOutcome, Error>;
}

/// Fixture implementation accepting every submission.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRegistrationCommand;

#[async_trait]
impl RegistrationCommand for FixtureRegistrationCommand {
    async fn submit(
        &self,
        _request: SubmitRegistrationRequest,
    ) -> Result<RegistrationOutcome, Error> {
        Ok(RegistrationOutcome {
            registrant_id: Uuid::new_v4(),
            event_name: "Sample event".to_owned(),
        })
    }
}
