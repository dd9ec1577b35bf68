//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::{info, warn};

use recitation_backend::domain::ports::{
    SelectionCycleRepository, SelectionHistoryRepository, SelectionListRepository,
};
use recitation_backend::domain::{
    CycleTracker, ListRoleNames, SelectionListService, SelectionService, ThreadRandomSource,
    ensure_default_lists,
};
use recitation_backend::inbound::http::state::{HttpState, HttpStatePorts};
use recitation_backend::outbound::memory::InMemorySelectionStore;
use recitation_backend::outbound::persistence::{
    DieselSelectionCycleRepository, DieselSelectionHistoryRepository,
    DieselSelectionListRepository,
};

use super::ServerConfig;

/// Seed the default lists, then build the services over the repositories.
///
/// Seeding failures are logged rather than fatal; the first generate call
/// reports a missing list in that case.
async fn wire_services<L, C, H>(
    list_repo: Arc<L>,
    cycle_repo: Arc<C>,
    history_repo: Arc<H>,
    role_names: ListRoleNames,
) -> HttpState
where
    L: SelectionListRepository + 'static,
    C: SelectionCycleRepository + 'static,
    H: SelectionHistoryRepository + 'static,
{
    let tracker = CycleTracker::new(cycle_repo.clone());
    match ensure_default_lists(list_repo.as_ref(), &tracker, &role_names).await {
        Ok(outcome) => info!(
            lists_created = outcome.lists_created,
            "default lists ensured"
        ),
        Err(err) => warn!(error = %err, "failed to ensure default lists"),
    }

    let selections = Arc::new(
        SelectionService::new(
            list_repo.clone(),
            cycle_repo,
            history_repo,
            Arc::new(ThreadRandomSource),
        )
        .with_role_names(role_names),
    );
    let lists = Arc::new(SelectionListService::new(list_repo));

    HttpState::new(HttpStatePorts {
        selections: selections.clone(),
        history: selections,
        lists: lists.clone(),
        lists_query: lists,
    })
}

/// Build the HTTP state from configuration.
///
/// Uses the Diesel repositories when a pool is configured, otherwise a
/// process-local in-memory store.
pub(super) async fn build_http_state(config: &ServerConfig) -> HttpState {
    let role_names = config.role_names.clone();
    match &config.db_pool {
        Some(pool) => {
            wire_services(
                Arc::new(DieselSelectionListRepository::new(pool.clone())),
                Arc::new(DieselSelectionCycleRepository::new(pool.clone())),
                Arc::new(DieselSelectionHistoryRepository::new(pool.clone())),
                role_names,
            )
            .await
        }
        None => {
            let store = Arc::new(InMemorySelectionStore::new(Arc::new(DefaultClock)));
            wire_services(store.clone(), store.clone(), store, role_names).await
        }
    }
}
