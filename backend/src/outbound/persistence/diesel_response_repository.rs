//! PostgreSQL-backed `ResponseRepository`.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::NewEventResponse;
use crate::domain::ports::{ResponseRepository, ResponseRepositoryError};

use super::error_mapping::{is_unique_violation, map_basic_diesel_error, map_basic_pool_error};
use super::json_codec::answers_to_json;
use super::models::NewEventResponseRow;
use super::pool::{DbPool, PoolError};
use super::schema::event_responses;

const USER_EVENT_UNIQUE: &str = "event_responses_user_event_unique";

/// Diesel-backed store of submitted answers.
#[derive(Clone)]
pub struct DieselResponseRepository {
    pool: DbPool,
}

impl DieselResponseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ResponseRepositoryError {
    map_basic_pool_error(error, ResponseRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ResponseRepositoryError {
    map_basic_diesel_error(
        error,
        ResponseRepositoryError::query,
        ResponseRepositoryError::connection,
    )
}

#[async_trait]
impl ResponseRepository for DieselResponseRepository {
    async fn exists(
        &self,
        registrant_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, ResponseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(
            event_responses::table
                .filter(event_responses::user_id.eq(registrant_id))
                .filter(event_responses::event_id.eq(event_id)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn insert(&self, response: &NewEventResponse) -> Result<Uuid, ResponseRepositoryError> {
        let answers = answers_to_json(&response.answers).map_err(ResponseRepositoryError::query)?;
        let new_row = NewEventResponseRow {
            user_id: response.registrant_id,
            event_id: response.event_id,
            answers,
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(event_responses::table)
            .values(&new_row)
            .returning(event_responses::id)
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err, Some(USER_EVENT_UNIQUE)) {
                    debug!(
                        registrant_id = %response.registrant_id,
                        event_id = %response.event_id,
                        "response insert hit the per-event uniqueness constraint"
                    );
                    ResponseRepositoryError::duplicate_registration(
                        response.registrant_id,
                        response.event_id,
                    )
                } else {
                    map_diesel_error(err)
                }
            })
    }
}
