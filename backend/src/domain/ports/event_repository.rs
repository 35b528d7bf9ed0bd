//! Port for reading events.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Event;

use super::define_port_error;

define_port_error! {
    /// Errors raised by event repository adapters.
    pub enum EventRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "event repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "event repository query failed: {message}",
    }
}

/// Read-only access to events, whatever their status.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, event_id: Uuid) -> Result<Option<Event>, EventRepositoryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, EventRepositoryError>;
}

/// Fixture implementation with no events.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventRepository;

#[async_trait]
impl EventRepository for FixtureEventRepository {
    async fn find_by_id(&self, _event_id: Uuid) -> Result<Option<Event>, EventRepositoryError> {
        Ok(None)
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Event>, EventRepositoryError> {
        Ok(None)
    }
}
