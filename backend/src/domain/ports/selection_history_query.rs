//! Driving port exposing progress through the active cycle.

use async_trait::async_trait;

use crate::domain::{CycleToken, Error, SelectionRecord};

/// History of the active cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleHistory {
    pub cycle: CycleToken,
    pub entries: Vec<SelectionRecord>,
}

/// Read-only view over the selection ledger.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SelectionHistoryQuery: Send + Sync {
    /// Entries recorded under the current cycle, oldest first.
    async fn current_cycle_history(&self) -> Result<CycleHistory, Error>;
}

/// Fixture query reporting an empty, freshly started cycle.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSelectionHistoryQuery;

#[async_trait]
impl SelectionHistoryQuery for FixtureSelectionHistoryQuery {
    async fn current_cycle_history(&self) -> Result<CycleHistory, Error> {
        Ok(CycleHistory {
            cycle: CycleToken::generate(),
            entries: Vec::new(),
        })
    }
}
