//! PostgreSQL-backed `PlacementRepository`.
//!
//! A save replaces the whole form: the event's rows are deleted and the new
//! set inserted inside one transaction. Reads left-join each placement to its
//! master so the codec can layer overrides on top.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{PlacementRepository, PlacementRepositoryError};
use crate::domain::{JoinedPlacement, Layout, PlacedQuestion, PlacementOrigin, QuestionType};

use super::diesel_master_question_repository::decode_master_row;
use super::error_mapping::{constraint_violation, map_basic_diesel_error, map_basic_pool_error};
use super::json_codec::{custom_options_to_json, json_to_custom_options};
use super::models::{MasterQuestionRow, PlacementRow};
use super::pool::{DbPool, PoolError};
use super::schema::{event_questions, questions_master};

const MASTER_FOREIGN_KEY: &str = "question_master_id_fkey";

/// Diesel-backed store of event form placements.
#[derive(Clone)]
pub struct DieselPlacementRepository {
    pool: DbPool,
}

impl DieselPlacementRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PlacementRepositoryError {
    map_basic_pool_error(error, PlacementRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PlacementRepositoryError {
    if let Some((DatabaseErrorKind::ForeignKeyViolation, constraint)) = constraint_violation(&error)
        && constraint.is_none_or(|name| name.contains(MASTER_FOREIGN_KEY))
    {
        let constraint = constraint.unwrap_or(MASTER_FOREIGN_KEY).to_owned();
        debug!(%constraint, "placement insert rejected by foreign key");
        return PlacementRepositoryError::missing_master(constraint);
    }
    map_basic_diesel_error(
        error,
        PlacementRepositoryError::query,
        PlacementRepositoryError::connection,
    )
}

fn to_column(value: u32) -> Result<i32, PlacementRepositoryError> {
    i32::try_from(value)
        .map_err(|_| PlacementRepositoryError::query(format!("layout value {value} out of range")))
}

fn from_column(value: i32) -> Result<u32, PlacementRepositoryError> {
    u32::try_from(value)
        .map_err(|_| PlacementRepositoryError::query(format!("stored layout value {value} is negative")))
}

fn placement_to_row(placement: &PlacedQuestion) -> Result<PlacementRow, PlacementRepositoryError> {
    let (question_master_id, question_type) = match placement.origin {
        PlacementOrigin::Master { master_id } => (Some(master_id), None),
        PlacementOrigin::Custom { question_type } => (None, Some(question_type.as_str().to_owned())),
    };
    let custom_options = placement
        .custom_options
        .as_ref()
        .map(custom_options_to_json)
        .transpose()
        .map_err(PlacementRepositoryError::query)?;

    Ok(PlacementRow {
        id: placement.id,
        event_id: placement.event_id,
        question_master_id,
        question_type,
        required: placement.required,
        page_number: to_column(placement.layout.page())?,
        row_number: to_column(placement.layout.row())?,
        column_number: to_column(placement.layout.column())?,
        order_in_cell: to_column(placement.layout.order())?,
        custom_text: placement.custom_text.clone(),
        custom_options,
    })
}

fn row_to_placement(row: PlacementRow) -> Result<PlacedQuestion, PlacementRepositoryError> {
    let origin = match (row.question_master_id, row.question_type.as_deref()) {
        (Some(master_id), _) => PlacementOrigin::Master { master_id },
        (None, Some(stored)) => PlacementOrigin::Custom {
            question_type: stored
                .parse::<QuestionType>()
                .map_err(|err| PlacementRepositoryError::query(err.to_string()))?,
        },
        (None, None) => {
            return Err(PlacementRepositoryError::query(format!(
                "placement {} has neither a type nor a master",
                row.id
            )));
        }
    };
    let layout = Layout::new(
        from_column(row.page_number)?,
        from_column(row.row_number)?,
        from_column(row.column_number)?,
        from_column(row.order_in_cell)?,
    )
    .map_err(|err| PlacementRepositoryError::query(err.to_string()))?;
    let custom_options =
        json_to_custom_options(row.custom_options).map_err(PlacementRepositoryError::query)?;

    Ok(PlacedQuestion {
        id: row.id,
        event_id: row.event_id,
        origin,
        required: row.required,
        layout,
        custom_text: row.custom_text,
        custom_options,
    })
}

fn join_row(
    (placement, master): (PlacementRow, Option<MasterQuestionRow>),
) -> Result<JoinedPlacement, PlacementRepositoryError> {
    let placement = row_to_placement(placement)?;
    let master = master
        .map(decode_master_row)
        .transpose()
        .map_err(PlacementRepositoryError::query)?;
    Ok(JoinedPlacement { placement, master })
}

#[async_trait]
impl PlacementRepository for DieselPlacementRepository {
    async fn replace_for_event(
        &self,
        event_id: Uuid,
        placements: &[PlacedQuestion],
    ) -> Result<(), PlacementRepositoryError> {
        let rows = placements
            .iter()
            .map(placement_to_row)
            .collect::<Result<Vec<_>, _>>()?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                diesel::delete(event_questions::table.filter(event_questions::event_id.eq(event_id)))
                    .execute(conn)
                    .await?;

                if !rows.is_empty() {
                    diesel::insert_into(event_questions::table)
                        .values(&rows)
                        .execute(conn)
                        .await?;
                }
                Ok::<_, diesel::result::Error>(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<JoinedPlacement>, PlacementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(PlacementRow, Option<MasterQuestionRow>)> = event_questions::table
            .left_join(questions_master::table)
            .filter(event_questions::event_id.eq(event_id))
            .order((
                event_questions::page_number.asc(),
                event_questions::row_number.asc(),
                event_questions::column_number.asc(),
                event_questions::order_in_cell.asc(),
            ))
            .select((
                PlacementRow::as_select(),
                Option::<MasterQuestionRow>::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(join_row).collect()
    }
}
