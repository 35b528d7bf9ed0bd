//! PostgreSQL-backed `MasterQuestionRepository`.
//!
//! Global rows may repeat a (type, text) pair with different options, so
//! global lookups return the oldest match. Organization rows are unique per
//! (organization, type, text), enforced by a partial unique index.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{MasterQuestionRepository, MasterQuestionRepositoryError};
use crate::domain::{MasterQuestion, MasterScope, MasterSignature, QuestionType};

use super::error_mapping::{is_unique_violation, map_basic_diesel_error, map_basic_pool_error};
use super::json_codec::{json_to_options, options_to_json};
use super::models::{MasterQuestionRow, NewMasterQuestionRow};
use super::pool::{DbPool, PoolError};
use super::schema::questions_master;

const ORGANIZATION_UNIQUE_INDEX: &str = "questions_master_organization_unique_idx";

/// Diesel-backed master question catalog.
#[derive(Clone)]
pub struct DieselMasterQuestionRepository {
    pool: DbPool,
}

impl DieselMasterQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MasterQuestionRepositoryError {
    map_basic_pool_error(error, MasterQuestionRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> MasterQuestionRepositoryError {
    map_basic_diesel_error(
        error,
        MasterQuestionRepositoryError::query,
        MasterQuestionRepositoryError::connection,
    )
}

/// Decode a catalog row. Shared with the placement adapter, which joins
/// masters onto placements.
pub(super) fn decode_master_row(row: MasterQuestionRow) -> Result<MasterQuestion, String> {
    let question_type = row
        .question_type
        .parse::<QuestionType>()
        .map_err(|err| err.to_string())?;
    let options = json_to_options(row.options)?;
    let scope = match (row.is_global, row.organization_id) {
        (true, _) => MasterScope::Global,
        (false, Some(organization_id)) => MasterScope::Organization(organization_id),
        (false, None) => return Err(format!("master question {} has no owner", row.id)),
    };
    Ok(MasterQuestion {
        id: row.id,
        question_type,
        text: row.text,
        options,
        scope,
    })
}

fn row_to_master(row: MasterQuestionRow) -> Result<MasterQuestion, MasterQuestionRepositoryError> {
    decode_master_row(row).map_err(MasterQuestionRepositoryError::query)
}

#[async_trait]
impl MasterQuestionRepository for DieselMasterQuestionRepository {
    async fn find_global(
        &self,
        question_type: QuestionType,
        text: &str,
    ) -> Result<Option<MasterQuestion>, MasterQuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = questions_master::table
            .filter(questions_master::question_type.eq(question_type.as_str()))
            .filter(questions_master::text.eq(text))
            .filter(questions_master::is_global.eq(true))
            .order(questions_master::created_at.asc())
            .select(MasterQuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_master).transpose()
    }

    async fn find_for_organization(
        &self,
        question_type: QuestionType,
        text: &str,
        organization_id: Uuid,
    ) -> Result<Option<MasterQuestion>, MasterQuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = questions_master::table
            .filter(questions_master::question_type.eq(question_type.as_str()))
            .filter(questions_master::text.eq(text))
            .filter(questions_master::is_global.eq(false))
            .filter(questions_master::organization_id.eq(organization_id))
            .select(MasterQuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_master).transpose()
    }

    async fn insert_for_organization(
        &self,
        signature: &MasterSignature,
        organization_id: Uuid,
    ) -> Result<MasterQuestion, MasterQuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewMasterQuestionRow {
            question_type: signature.question_type.as_str(),
            text: signature.text.as_str(),
            options: options_to_json(signature.options.as_deref()),
            is_global: false,
            organization_id: Some(organization_id),
        };

        let row = diesel::insert_into(questions_master::table)
            .values(&new_row)
            .returning(MasterQuestionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err, Some(ORGANIZATION_UNIQUE_INDEX)) {
                    debug!(%organization_id, "master question insert lost a race");
                    MasterQuestionRepositoryError::duplicate_master(signature.text.as_str())
                } else {
                    map_diesel_error(err)
                }
            })?;

        row_to_master(row)
    }
}
