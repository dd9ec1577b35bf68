//! Tracker for the single active selection cycle.
//!
//! The cycle is one mutable pointer shared by every list, so the three lists
//! always advance and reset together.

use std::sync::Arc;

use tracing::info;

use crate::domain::Error;
use crate::domain::ports::{SelectionCycleRepository, SelectionCycleRepositoryError};
use crate::domain::{CycleToken, SelectionCycle};

pub(crate) fn map_cycle_error(error: SelectionCycleRepositoryError) -> Error {
    match error {
        SelectionCycleRepositoryError::Connection { message } => {
            Error::internal(format!("selection cycle repository unavailable: {message}"))
        }
        SelectionCycleRepositoryError::Query { message } => {
            Error::internal(format!("selection cycle repository error: {message}"))
        }
    }
}

/// Owns lookup, lazy creation and reset of the cycle singleton.
#[derive(Clone)]
pub struct CycleTracker<C> {
    cycle_repo: Arc<C>,
}

impl<C> CycleTracker<C> {
    /// Create a tracker over the cycle repository.
    pub fn new(cycle_repo: Arc<C>) -> Self {
        Self { cycle_repo }
    }
}

impl<C> CycleTracker<C>
where
    C: SelectionCycleRepository,
{
    async fn find(&self) -> Result<Option<SelectionCycle>, Error> {
        self.cycle_repo.find_current().await.map_err(map_cycle_error)
    }

    /// Return the active cycle token, creating the singleton row if absent.
    ///
    /// Two reads without an intervening reset return the same token.
    pub async fn current_cycle(&self) -> Result<CycleToken, Error> {
        if let Some(cycle) = self.find().await? {
            return Ok(cycle.current_cycle);
        }

        let cycle = self
            .cycle_repo
            .insert(CycleToken::generate())
            .await
            .map_err(map_cycle_error)?;
        info!(cycle = %cycle.current_cycle, "started first selection cycle");
        Ok(cycle.current_cycle)
    }

    /// Start a new cycle and return its token.
    ///
    /// Overwrites the token of the existing row, or inserts the row when none
    /// exists. Lists and history are left untouched.
    pub async fn reset_cycle(&self) -> Result<CycleToken, Error> {
        let token = CycleToken::generate();
        match self.find().await? {
            Some(existing) => {
                self.cycle_repo
                    .replace_token(&existing.id, token)
                    .await
                    .map_err(map_cycle_error)?;
                info!(
                    previous = %existing.current_cycle,
                    cycle = %token,
                    "selection cycle reset"
                );
                Ok(token)
            }
            None => {
                // The store keeps the first row on a racing insert.
                let cycle = self
                    .cycle_repo
                    .insert(token)
                    .await
                    .map_err(map_cycle_error)?;
                info!(cycle = %cycle.current_cycle, "selection cycle reset with no prior cycle");
                Ok(cycle.current_cycle)
            }
        }
    }
}
