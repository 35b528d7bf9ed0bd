//! PostgreSQL-backed `RegistrantRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RegistrantRepository, RegistrantRepositoryError};
use crate::domain::{Identity, NewRegistrant, Registrant};

use super::error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed registrant store over the `users` table.
#[derive(Clone)]
pub struct DieselRegistrantRepository {
    pool: DbPool,
}

impl DieselRegistrantRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RegistrantRepositoryError {
    map_basic_pool_error(error, RegistrantRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RegistrantRepositoryError {
    map_basic_diesel_error(
        error,
        RegistrantRepositoryError::query,
        RegistrantRepositoryError::connection,
    )
}

fn row_to_registrant(row: UserRow) -> Registrant {
    Registrant {
        id: row.id,
        email: row.email,
        phone: row.phone_number,
        name: row.name,
    }
}

#[async_trait]
impl RegistrantRepository for DieselRegistrantRepository {
    async fn find_by_contact(
        &self,
        contact: &Identity,
    ) -> Result<Option<Registrant>, RegistrantRepositoryError> {
        let query = users::table
            .select(UserRow::as_select())
            .order(users::created_at.asc())
            .into_boxed();
        let query = match (contact.email.as_deref(), contact.phone.as_deref()) {
            (Some(email), Some(phone)) => {
                query.filter(users::email.eq(email).or(users::phone_number.eq(phone)))
            }
            (Some(email), None) => query.filter(users::email.eq(email)),
            (None, Some(phone)) => query.filter(users::phone_number.eq(phone)),
            (None, None) => return Ok(None),
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = query
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_registrant))
    }

    async fn insert(
        &self,
        registrant: &NewRegistrant,
    ) -> Result<Registrant, RegistrantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            email: registrant.email.as_deref(),
            phone_number: registrant.phone.as_deref(),
            name: registrant.name.as_deref(),
        };

        let row = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_registrant(row))
    }
}
