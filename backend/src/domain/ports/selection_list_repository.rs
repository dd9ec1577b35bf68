//! Port for selection list persistence.

use async_trait::async_trait;

use crate::domain::{ListId, SelectionList};

use super::define_port_error;

define_port_error! {
    /// Errors raised by selection list repository adapters.
    pub enum SelectionListRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "selection list repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "selection list repository query failed: {message}",
    }
}

/// Port for reading and mutating stored lists.
///
/// Mutations that address a missing list return `Ok(None)` / `Ok(false)`
/// rather than an error so services can map absence to `NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SelectionListRepository: Send + Sync {
    /// Every stored list.
    async fn list_all(&self) -> Result<Vec<SelectionList>, SelectionListRepositoryError>;

    /// Fetch a list by id.
    async fn find_by_id(
        &self,
        id: &ListId,
    ) -> Result<Option<SelectionList>, SelectionListRepositoryError>;

    /// Store a new list and return it with its assigned id.
    async fn create(
        &self,
        name: &str,
        items: &[String],
    ) -> Result<SelectionList, SelectionListRepositoryError>;

    /// Replace the item sequence of a list.
    async fn save_items(
        &self,
        id: &ListId,
        items: &[String],
    ) -> Result<Option<SelectionList>, SelectionListRepositoryError>;

    /// Change the display name of a list.
    async fn rename(
        &self,
        id: &ListId,
        name: &str,
    ) -> Result<Option<SelectionList>, SelectionListRepositoryError>;

    /// Remove a list. History entries referencing it are left untouched.
    async fn delete(&self, id: &ListId) -> Result<bool, SelectionListRepositoryError>;
}
