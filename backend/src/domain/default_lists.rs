//! First-boot seeding of the managed lists.

use tracing::info;

use crate::domain::ports::{SelectionCycleRepository, SelectionListRepository};
use crate::domain::selection_list_service::map_list_error;
use crate::domain::{CycleTracker, Error, ListRole, ListRoleNames};

/// Result of the startup bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultListsOutcome {
    /// Number of role lists created by this run.
    pub lists_created: usize,
}

/// Create one empty list per role when the store holds no lists, then make
/// sure the cycle singleton exists.
///
/// Stores that already hold lists are left untouched, even when a role name
/// is missing, so user renames are never overwritten.
pub async fn ensure_default_lists<L, C>(
    list_repo: &L,
    tracker: &CycleTracker<C>,
    role_names: &ListRoleNames,
) -> Result<DefaultListsOutcome, Error>
where
    L: SelectionListRepository,
    C: SelectionCycleRepository,
{
    let existing = list_repo.list_all().await.map_err(map_list_error)?;
    let mut lists_created = 0;
    if existing.is_empty() {
        for role in ListRole::ALL {
            let list = list_repo
                .create(role_names.name_for(role), &[])
                .await
                .map_err(map_list_error)?;
            info!(role = %role, list_id = %list.id(), "created default list");
            lists_created += 1;
        }
    }

    tracker.current_cycle().await?;
    Ok(DefaultListsOutcome { lists_created })
}
