//! Driving port for list reads.

use async_trait::async_trait;

use crate::domain::{Error, ListId, SelectionList};

/// Driving port for list read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SelectionListQuery: Send + Sync {
    /// Every stored list.
    async fn list_all(&self) -> Result<Vec<SelectionList>, Error>;

    /// A single list, or `NotFound`.
    async fn get_list(&self, id: ListId) -> Result<SelectionList, Error>;
}

/// Fixture query with no stored lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSelectionListQuery;

#[async_trait]
impl SelectionListQuery for FixtureSelectionListQuery {
    async fn list_all(&self) -> Result<Vec<SelectionList>, Error> {
        Ok(Vec::new())
    }

    async fn get_list(&self, id: ListId) -> Result<SelectionList, Error> {
        Err(Error::not_found(format!("list {id} not found")))
    }
}
