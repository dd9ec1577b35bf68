//! Port for the singleton selection cycle row.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{CycleToken, SelectionCycle};

use super::define_port_error;

define_port_error! {
    /// Errors raised by selection cycle repository adapters.
    pub enum SelectionCycleRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "selection cycle repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "selection cycle repository query failed: {message}",
    }
}

/// Port for the single active cycle record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SelectionCycleRepository: Send + Sync {
    /// Read the cycle row, if one has been created.
    async fn find_current(&self) -> Result<Option<SelectionCycle>, SelectionCycleRepositoryError>;

    /// Insert the cycle row carrying `token`.
    async fn insert(&self, token: CycleToken)
    -> Result<SelectionCycle, SelectionCycleRepositoryError>;

    /// Overwrite the token of an existing row and bump its modification time.
    async fn replace_token(
        &self,
        cycle_id: &Uuid,
        token: CycleToken,
    ) -> Result<(), SelectionCycleRepositoryError>;
}
