//! PostgreSQL-backed `SelectionHistoryRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{SelectionHistoryRepository, SelectionHistoryRepositoryError};
use crate::domain::{CycleToken, ListId, NewSelectionRecord, SelectionRecord};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewSelectionHistoryRow, SelectionHistoryRow};
use super::pool::{DbPool, PoolError};
use super::schema::selection_history;

/// Diesel-backed implementation of the ledger port.
#[derive(Clone)]
pub struct DieselSelectionHistoryRepository {
    pool: DbPool,
}

impl DieselSelectionHistoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SelectionHistoryRepositoryError {
    map_basic_pool_error(error, SelectionHistoryRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> SelectionHistoryRepositoryError {
    map_basic_diesel_error(
        error,
        SelectionHistoryRepositoryError::query,
        SelectionHistoryRepositoryError::connection,
    )
}

fn row_to_record(row: SelectionHistoryRow) -> SelectionRecord {
    SelectionRecord {
        id: row.id,
        list_id: ListId::from_uuid(row.list_id),
        selected_item: row.selected_item,
        selection_cycle: CycleToken::from_uuid(row.selection_cycle),
        created_at: row.created_at,
    }
}

#[async_trait]
impl SelectionHistoryRepository for DieselSelectionHistoryRepository {
    async fn selected_items(
        &self,
        list_id: &ListId,
        cycle: &CycleToken,
    ) -> Result<Vec<String>, SelectionHistoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        selection_history::table
            .filter(
                selection_history::list_id
                    .eq(list_id.as_uuid())
                    .and(selection_history::selection_cycle.eq(cycle.as_uuid())),
            )
            .select(selection_history::selected_item)
            .load::<String>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn append(
        &self,
        record: &NewSelectionRecord,
    ) -> Result<SelectionRecord, SelectionHistoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(selection_history::table)
            .values(&NewSelectionHistoryRow {
                id: Uuid::new_v4(),
                list_id: *record.list_id.as_uuid(),
                selected_item: &record.selected_item,
                selection_cycle: *record.selection_cycle.as_uuid(),
            })
            .returning(SelectionHistoryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_record(row))
    }

    async fn entries_for_cycle(
        &self,
        cycle: &CycleToken,
    ) -> Result<Vec<SelectionRecord>, SelectionHistoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<SelectionHistoryRow> = selection_history::table
            .filter(selection_history::selection_cycle.eq(cycle.as_uuid()))
            .order((selection_history::created_at.asc(), selection_history::id.asc()))
            .select(SelectionHistoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_record).collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion.

    use chrono::Utc;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn row_conversion_preserves_value_copy() {
        let list_id = Uuid::new_v4();
        let cycle = Uuid::new_v4();
        let record = row_to_record(SelectionHistoryRow {
            id: Uuid::new_v4(),
            list_id,
            selected_item: "Al-Fatiha".to_owned(),
            selection_cycle: cycle,
            created_at: Utc::now(),
        });
        assert_eq!(*record.list_id.as_uuid(), list_id);
        assert_eq!(*record.selection_cycle.as_uuid(), cycle);
        assert_eq!(record.selected_item, "Al-Fatiha");
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::build("invalid URL"));
        assert!(matches!(err, SelectionHistoryRepositoryError::Connection { .. }));
    }
}
