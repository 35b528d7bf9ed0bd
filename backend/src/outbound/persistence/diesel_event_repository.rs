//! PostgreSQL-backed `EventRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{Event, EventStatus};

use super::error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::EventRow;
use super::pool::{DbPool, PoolError};
use super::schema::events;

/// Diesel-backed read access to events.
#[derive(Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EventRepositoryError {
    map_basic_pool_error(error, EventRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> EventRepositoryError {
    map_basic_diesel_error(
        error,
        EventRepositoryError::query,
        EventRepositoryError::connection,
    )
}

fn row_to_event(row: EventRow) -> Event {
    Event {
        id: row.id,
        organization_id: row.organization_id,
        name: row.name,
        slug: row.slug,
        description: row.description,
        location: row.location,
        starts_at: row.event_date_start,
        ends_at: row.event_date_end,
        banner_url: row.banner_url,
        status: EventStatus::from_stored(&row.status),
    }
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn find_by_id(&self, event_id: Uuid) -> Result<Option<Event>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = events::table
            .filter(events::id.eq(event_id))
            .select(EventRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_event))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = events::table
            .filter(events::slug.eq(slug))
            .select(EventRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_event))
    }
}
