//! Port for stored event responses.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::NewEventResponse;

use super::define_port_error;

define_port_error! {
    /// Errors raised by response repository adapters.
    pub enum ResponseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "response repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "response repository query failed: {message}",
        /// The (registrant, event) pair already has a response.
        DuplicateRegistration { registrant_id: Uuid, event_id: Uuid } =>
            "registrant {registrant_id} already registered for event {event_id}",
    }
}

/// Port for event responses. Storage enforces one response per
/// (registrant, event) pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    async fn exists(
        &self,
        registrant_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, ResponseRepositoryError>;

    /// Store the answers verbatim and return the new response id.
    ///
    /// A concurrent insert for the same pair surfaces as
    /// [`ResponseRepositoryError::DuplicateRegistration`].
    async fn insert(&self, response: &NewEventResponse) -> Result<Uuid, ResponseRepositoryError>;
}

/// Fixture implementation that accepts every response.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureResponseRepository;

#[async_trait]
impl ResponseRepository for FixtureResponseRepository {
    async fn exists(
        &self,
        _registrant_id: Uuid,
        _event_id: Uuid,
    ) -> Result<bool, ResponseRepositoryError> {
        Ok(false)
    }

    async fn insert(&self, _response: &NewEventResponse) -> Result<Uuid, ResponseRepositoryError> {
        Ok(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_names_both_ids() {
        let registrant = Uuid::nil();
        let event = Uuid::max();
        let message = ResponseRepositoryError::duplicate_registration(registrant, event).to_string();
        assert!(message.contains(&registrant.to_string()));
        assert!(message.contains(&event.to_string()));
    }
}
