//! Port for the append-only selection history ledger.

use async_trait::async_trait;

use crate::domain::{CycleToken, ListId, NewSelectionRecord, SelectionRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by selection history repository adapters.
    pub enum SelectionHistoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "selection history repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "selection history repository query failed: {message}",
    }
}

/// Port for recording and reading selections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SelectionHistoryRepository: Send + Sync {
    /// Item values recorded for `list_id` under `cycle`.
    async fn selected_items(
        &self,
        list_id: &ListId,
        cycle: &CycleToken,
    ) -> Result<Vec<String>, SelectionHistoryRepositoryError>;

    /// Append one entry to the ledger.
    async fn append(
        &self,
        record: &NewSelectionRecord,
    ) -> Result<SelectionRecord, SelectionHistoryRepositoryError>;

    /// Every entry recorded under `cycle`, oldest first.
    async fn entries_for_cycle(
        &self,
        cycle: &CycleToken,
    ) -> Result<Vec<SelectionRecord>, SelectionHistoryRepositoryError>;
}
