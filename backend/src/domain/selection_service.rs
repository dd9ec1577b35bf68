//! Non-repeating selection engine.
//!
//! Draws one item per managed list so that no value is repeated inside a
//! cycle. When any list runs out of eligible items the shared cycle is reset
//! and every list becomes fully eligible again.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join_all;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::domain::eligibility::{any_exhausted, eligible_items};
use crate::domain::ports::{
    CycleHistory, GeneratedSelections, SelectionCommand, SelectionCycleRepository,
    SelectionHistoryQuery, SelectionHistoryRepository, SelectionHistoryRepositoryError,
    SelectionListRepository,
};
use crate::domain::random_source::pick;
use crate::domain::selection_list_service::map_list_error;
use crate::domain::{
    CycleToken, CycleTracker, Error, ListId, ListRole, ListRoleNames, NewSelectionRecord,
    RandomSource, RoleResolutionError, SelectionList,
};

fn map_history_error(error: SelectionHistoryRepositoryError) -> Error {
    match error {
        SelectionHistoryRepositoryError::Connection { message } => {
            Error::internal(format!("selection history repository unavailable: {message}"))
        }
        SelectionHistoryRepositoryError::Query { message } => {
            Error::internal(format!("selection history repository error: {message}"))
        }
    }
}

fn map_role_error(error: RoleResolutionError) -> Error {
    match error {
        RoleResolutionError::Missing { role } => {
            Error::not_found(error.to_string()).with_details(json!({ "role": role.as_str() }))
        }
        RoleResolutionError::Ambiguous { role, count } => Error::invalid_request(error.to_string())
            .with_details(json!({ "role": role.as_str(), "count": count })),
    }
}

/// A stored list bound to the role it plays.
struct RoleList<'a> {
    role: ListRole,
    list: &'a SelectionList,
}

/// The outcome of the draw for one role.
struct Pick {
    role: ListRole,
    list_id: ListId,
    item: String,
}

/// Selection engine implementing the generation and history driving ports.
///
/// Generations are serialised within the process by an async mutex so two
/// concurrent requests never observe the same pre-reset cycle.
pub struct SelectionService<L, C, H> {
    list_repo: Arc<L>,
    history_repo: Arc<H>,
    tracker: CycleTracker<C>,
    random: Arc<dyn RandomSource>,
    role_names: ListRoleNames,
    generation_gate: Mutex<()>,
}

impl<L, C, H> SelectionService<L, C, H> {
    /// Create an engine over the three repositories and a random source.
    pub fn new(
        list_repo: Arc<L>,
        cycle_repo: Arc<C>,
        history_repo: Arc<H>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            list_repo,
            history_repo,
            tracker: CycleTracker::new(cycle_repo),
            random,
            role_names: ListRoleNames::default(),
            generation_gate: Mutex::new(()),
        }
    }

    /// Bind roles to stored list names other than the defaults.
    #[must_use]
    pub fn with_role_names(mut self, role_names: ListRoleNames) -> Self {
        self.role_names = role_names;
        self
    }
}

impl<L, C, H> SelectionService<L, C, H>
where
    L: SelectionListRepository,
    C: SelectionCycleRepository,
    H: SelectionHistoryRepository,
{
    async fn load_lists(&self) -> Result<Vec<SelectionList>, Error> {
        self.list_repo.list_all().await.map_err(map_list_error)
    }

    fn resolve_roles<'a>(&self, lists: &'a [SelectionList]) -> Result<Vec<RoleList<'a>>, Error> {
        ListRole::ALL
            .into_iter()
            .map(|role| {
                self.role_names
                    .resolve(role, lists)
                    .map(|list| RoleList { role, list })
                    .map_err(map_role_error)
            })
            .collect()
    }

    fn ensure_non_empty(roles: &[RoleList<'_>]) -> Result<(), Error> {
        let Some(empty) = roles.iter().find(|entry| entry.list.is_empty()) else {
            return Ok(());
        };
        let counts: Vec<_> = roles
            .iter()
            .map(|entry| format!("{}={}", entry.role, entry.list.items().len()))
            .collect();
        warn!(role = %empty.role, counts = %counts.join(","), "empty lists detected");
        Err(
            Error::invalid_request(format!("list has no items: {}", empty.role))
                .with_details(json!({ "role": empty.role.as_str() })),
        )
    }

    async fn eligible_sets(
        &self,
        roles: &[RoleList<'_>],
        cycle: CycleToken,
    ) -> Result<Vec<Vec<String>>, Error> {
        let selected = try_join_all(roles.iter().map(|entry| async move {
            let list_id = entry.list.id();
            self.history_repo.selected_items(&list_id, &cycle).await
        }))
        .await
        .map_err(map_history_error)?;

        Ok(roles
            .iter()
            .zip(&selected)
            .map(|(entry, selected)| {
                let eligible = eligible_items(entry.list.items(), selected);
                debug!(
                    role = %entry.role,
                    items = entry.list.items().len(),
                    eligible = eligible.len(),
                    "computed eligible set"
                );
                eligible
            })
            .collect())
    }

    fn draw(&self, roles: &[RoleList<'_>], pools: &[Vec<String>]) -> Result<Vec<Pick>, Error> {
        roles
            .iter()
            .zip(pools)
            .map(|(entry, pool)| {
                let item = pick(self.random.as_ref(), pool).ok_or_else(|| {
                    Error::internal(format!("no eligible item to draw for {}", entry.role))
                })?;
                Ok(Pick {
                    role: entry.role,
                    list_id: entry.list.id(),
                    item: item.clone(),
                })
            })
            .collect()
    }

    async fn record(&self, picks: &[Pick], cycle: CycleToken) -> Result<(), Error> {
        try_join_all(picks.iter().map(|pick| async move {
            let record = NewSelectionRecord {
                list_id: pick.list_id,
                selected_item: pick.item.clone(),
                selection_cycle: cycle,
            };
            self.history_repo.append(&record).await.map_err(|err| {
                error!(role = %pick.role, cycle = %cycle, error = %err, "failed to record selection");
                map_history_error(err)
            })
        }))
        .await?;
        Ok(())
    }
}

#[async_trait]
impl<L, C, H> SelectionCommand for SelectionService<L, C, H>
where
    L: SelectionListRepository,
    C: SelectionCycleRepository,
    H: SelectionHistoryRepository,
{
    async fn generate_selections(&self) -> Result<GeneratedSelections, Error> {
        let _gate = self.generation_gate.lock().await;

        let (lists, cycle) =
            futures_util::try_join!(self.load_lists(), self.tracker.current_cycle())?;
        let roles = self.resolve_roles(&lists)?;
        Self::ensure_non_empty(&roles)?;

        let eligible = self.eligible_sets(&roles, cycle).await?;
        let (cycle, pools, cycle_reset) = if any_exhausted(eligible.iter().map(Vec::as_slice)) {
            let fresh = self.tracker.reset_cycle().await?;
            let full = roles.iter().map(|entry| entry.list.items().to_vec()).collect();
            (fresh, full, true)
        } else {
            (cycle, eligible, false)
        };

        let picks = self.draw(&roles, &pools)?;
        self.record(&picks, cycle).await?;

        let mut items = picks.into_iter().map(|pick| pick.item);
        let (Some(list1), Some(list2), Some(list3)) = (items.next(), items.next(), items.next())
        else {
            return Err(Error::internal("selection produced fewer picks than roles"));
        };
        Ok(GeneratedSelections {
            list1,
            list2,
            list3,
            cycle,
            cycle_reset,
        })
    }
}

#[async_trait]
impl<L, C, H> SelectionHistoryQuery for SelectionService<L, C, H>
where
    L: SelectionListRepository,
    C: SelectionCycleRepository,
    H: SelectionHistoryRepository,
{
    async fn current_cycle_history(&self) -> Result<CycleHistory, Error> {
        let _gate = self.generation_gate.lock().await;
        let cycle = self.tracker.current_cycle().await?;
        let entries = self
            .history_repo
            .entries_for_cycle(&cycle)
            .await
            .map_err(map_history_error)?;
        Ok(CycleHistory { cycle, entries })
    }
}

#[cfg(test)]
#[path = "selection_service_tests.rs"]
mod tests;
