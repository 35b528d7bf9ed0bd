//! Port for the questions placed on each event's form.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{JoinedPlacement, PlacedQuestion};

use super::define_port_error;

define_port_error! {
    /// Errors raised by placement repository adapters.
    pub enum PlacementRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "placement repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "placement repository query failed: {message}",
        /// A placement referenced a master row that does not exist.
        MissingMaster { message: String } =>
            "placement references an unknown master question: {message}",
    }
}

/// Port for reading and replacing an event's form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacementRepository: Send + Sync {
    /// Replace every placement of `event_id` with `placements`, atomically.
    ///
    /// Either the old form survives untouched or the new one is stored in
    /// full; readers never observe an empty intermediate form.
    async fn replace_for_event(
        &self,
        event_id: Uuid,
        placements: &[PlacedQuestion],
    ) -> Result<(), PlacementRepositoryError>;

    /// Every placement of `event_id` with its master joined, ordered by
    /// page, row, column and order-in-cell.
    async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<JoinedPlacement>, PlacementRepositoryError>;
}

/// Fixture implementation holding no forms.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePlacementRepository;

#[async_trait]
impl PlacementRepository for FixturePlacementRepository {
    async fn replace_for_event(
        &self,
        _event_id: Uuid,
        _placements: &[PlacedQuestion],
    ) -> Result<(), PlacementRepositoryError> {
        Ok(())
    }

    async fn list_for_event(
        &self,
        _event_id: Uuid,
    ) -> Result<Vec<JoinedPlacement>, PlacementRepositoryError> {
        Ok(Vec::new())
    }
}
