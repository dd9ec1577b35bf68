//! PostgreSQL-backed `SelectionCycleRepository` using Diesel.
//!
//! The table carries a unique index on a constant expression, so a second
//! insert can never create another row. Racing first inserts resolve to the
//! row that won.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{SelectionCycleRepository, SelectionCycleRepositoryError};
use crate::domain::{CycleToken, SelectionCycle};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewSelectionCycleRow, SelectionCycleRow};
use super::pool::{DbPool, PoolError};
use super::schema::selection_cycle;

/// Diesel-backed implementation of the cycle repository port.
#[derive(Clone)]
pub struct DieselSelectionCycleRepository {
    pool: DbPool,
}

impl DieselSelectionCycleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SelectionCycleRepositoryError {
    map_basic_pool_error(error, SelectionCycleRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> SelectionCycleRepositoryError {
    map_basic_diesel_error(
        error,
        SelectionCycleRepositoryError::query,
        SelectionCycleRepositoryError::connection,
    )
}

fn row_to_cycle(row: SelectionCycleRow) -> SelectionCycle {
    SelectionCycle {
        id: row.id,
        current_cycle: CycleToken::from_uuid(row.current_cycle),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[async_trait]
impl SelectionCycleRepository for DieselSelectionCycleRepository {
    async fn find_current(&self) -> Result<Option<SelectionCycle>, SelectionCycleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = selection_cycle::table
            .order(selection_cycle::created_at.asc())
            .select(SelectionCycleRow::as_select())
            .first::<SelectionCycleRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_cycle))
    }

    async fn insert(
        &self,
        token: CycleToken,
    ) -> Result<SelectionCycle, SelectionCycleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted = diesel::insert_into(selection_cycle::table)
            .values(&NewSelectionCycleRow {
                id: Uuid::new_v4(),
                current_cycle: *token.as_uuid(),
            })
            .on_conflict_do_nothing()
            .returning(SelectionCycleRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let row = match inserted {
            Some(row) => row,
            None => selection_cycle::table
                .select(SelectionCycleRow::as_select())
                .first::<SelectionCycleRow>(&mut conn)
                .await
                .map_err(map_diesel_error)?,
        };
        Ok(row_to_cycle(row))
    }

    async fn replace_token(
        &self,
        cycle_id: &Uuid,
        token: CycleToken,
    ) -> Result<(), SelectionCycleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(selection_cycle::table.filter(selection_cycle::id.eq(cycle_id)))
            .set((
                selection_cycle::current_cycle.eq(token.as_uuid()),
                selection_cycle::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(SelectionCycleRepositoryError::query(format!(
                "selection cycle {cycle_id} no longer exists"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion.

    use chrono::Utc;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn row_conversion_wraps_token() {
        let now = Utc::now();
        let token = Uuid::new_v4();
        let cycle = row_to_cycle(SelectionCycleRow {
            id: Uuid::new_v4(),
            current_cycle: token,
            created_at: now,
            updated_at: now,
        });
        assert_eq!(*cycle.current_cycle.as_uuid(), token);
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let err = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ));
        assert!(matches!(err, SelectionCycleRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn missing_row_maps_to_query_error() {
        let err = map_diesel_error(DieselError::NotFound);
        assert!(matches!(err, SelectionCycleRepositoryError::Query { .. }));
    }
}
