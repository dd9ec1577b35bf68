//! PostgreSQL-backed `SelectionListRepository` using Diesel.
//!
//! Items are stored as a JSON array so a list round-trips in one row.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{SelectionListRepository, SelectionListRepositoryError};
use crate::domain::{ListId, SelectionList};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewSelectionListRow, SelectionListRow};
use super::pool::{DbPool, PoolError};
use super::schema::selection_lists;

/// Diesel-backed implementation of the list repository port.
#[derive(Clone)]
pub struct DieselSelectionListRepository {
    pool: DbPool,
}

impl DieselSelectionListRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SelectionListRepositoryError {
    map_basic_pool_error(error, SelectionListRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> SelectionListRepositoryError {
    map_basic_diesel_error(
        error,
        SelectionListRepositoryError::query,
        SelectionListRepositoryError::connection,
    )
}

fn encode_items(items: &[String]) -> Result<serde_json::Value, SelectionListRepositoryError> {
    serde_json::to_value(items)
        .map_err(|err| SelectionListRepositoryError::query(format!("encode items: {err}")))
}

fn row_to_list(row: SelectionListRow) -> Result<SelectionList, SelectionListRepositoryError> {
    let SelectionListRow { id, name, items } = row;
    let items: Vec<String> = serde_json::from_value(items)
        .map_err(|err| SelectionListRepositoryError::query(format!("decode items: {err}")))?;
    Ok(SelectionList::new(ListId::from_uuid(id), name, items))
}

#[async_trait]
impl SelectionListRepository for DieselSelectionListRepository {
    async fn list_all(&self) -> Result<Vec<SelectionList>, SelectionListRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<SelectionListRow> = selection_lists::table
            .order((selection_lists::name.asc(), selection_lists::id.asc()))
            .select(SelectionListRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_list).collect()
    }

    async fn find_by_id(
        &self,
        id: &ListId,
    ) -> Result<Option<SelectionList>, SelectionListRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = selection_lists::table
            .filter(selection_lists::id.eq(id.as_uuid()))
            .select(SelectionListRow::as_select())
            .first::<SelectionListRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_list).transpose()
    }

    async fn create(
        &self,
        name: &str,
        items: &[String],
    ) -> Result<SelectionList, SelectionListRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let items = encode_items(items)?;

        let row = diesel::insert_into(selection_lists::table)
            .values(&NewSelectionListRow {
                id: Uuid::new_v4(),
                name,
                items: &items,
            })
            .returning(SelectionListRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_list(row)
    }

    async fn save_items(
        &self,
        id: &ListId,
        items: &[String],
    ) -> Result<Option<SelectionList>, SelectionListRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let items = encode_items(items)?;

        let row = diesel::update(selection_lists::table.filter(selection_lists::id.eq(id.as_uuid())))
            .set(selection_lists::items.eq(&items))
            .returning(SelectionListRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_list).transpose()
    }

    async fn rename(
        &self,
        id: &ListId,
        name: &str,
    ) -> Result<Option<SelectionList>, SelectionListRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(selection_lists::table.filter(selection_lists::id.eq(id.as_uuid())))
            .set(selection_lists::name.eq(name))
            .returning(SelectionListRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_list).transpose()
    }

    async fn delete(&self, id: &ListId) -> Result<bool, SelectionListRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed =
            diesel::delete(selection_lists::table.filter(selection_lists::id.eq(id.as_uuid())))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
