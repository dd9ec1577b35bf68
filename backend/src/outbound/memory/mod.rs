//! In-process store implementing every selection port.
//!
//! Used when no database URL is configured and by behaviour tests. All state
//! sits behind one mutex, so each port call is atomic, matching the
//! per-statement guarantees of the PostgreSQL adapters.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    SelectionCycleRepository, SelectionCycleRepositoryError, SelectionHistoryRepository,
    SelectionHistoryRepositoryError, SelectionListRepository, SelectionListRepositoryError,
};
use crate::domain::{
    CycleToken, ListId, NewSelectionRecord, SelectionCycle, SelectionList, SelectionRecord,
};

#[derive(Default)]
struct MemoryState {
    lists: Vec<SelectionList>,
    cycle: Option<SelectionCycle>,
    history: Vec<SelectionRecord>,
}

/// Volatile store for lists, the cycle singleton and the ledger.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use recitation_backend::domain::ports::SelectionListRepository;
/// use recitation_backend::outbound::memory::InMemorySelectionStore;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let store = InMemorySelectionStore::new(Arc::new(DefaultClock));
/// let list = store.create("short", &["Al-Ikhlas".to_owned()]).await.expect("created");
/// assert_eq!(store.list_all().await.expect("listed"), vec![list]);
/// # });
/// ```
pub struct InMemorySelectionStore {
    state: Mutex<MemoryState>,
    clock: Arc<dyn Clock>,
}

impl InMemorySelectionStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            clock,
        }
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every ledger entry across all cycles, oldest first.
    pub fn history(&self) -> Vec<SelectionRecord> {
        self.state().history.clone()
    }

    fn update_list<F>(&self, id: &ListId, apply: F) -> Option<SelectionList>
    where
        F: FnOnce(&SelectionList) -> SelectionList,
    {
        let mut state = self.state();
        let slot = state.lists.iter_mut().find(|list| list.id() == *id)?;
        *slot = apply(slot);
        Some(slot.clone())
    }
}

#[async_trait]
impl SelectionListRepository for InMemorySelectionStore {
    async fn list_all(&self) -> Result<Vec<SelectionList>, SelectionListRepositoryError> {
        let mut lists = self.state().lists.clone();
        lists.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));
        Ok(lists)
    }

    async fn find_by_id(
        &self,
        id: &ListId,
    ) -> Result<Option<SelectionList>, SelectionListRepositoryError> {
        Ok(self
            .state()
            .lists
            .iter()
            .find(|list| list.id() == *id)
            .cloned())
    }

    async fn create(
        &self,
        name: &str,
        items: &[String],
    ) -> Result<SelectionList, SelectionListRepositoryError> {
        let list = SelectionList::new(ListId::random(), name, items.to_vec());
        self.state().lists.push(list.clone());
        Ok(list)
    }

    async fn save_items(
        &self,
        id: &ListId,
        items: &[String],
    ) -> Result<Option<SelectionList>, SelectionListRepositoryError> {
        Ok(self.update_list(id, |list| {
            SelectionList::new(list.id(), list.name(), items.to_vec())
        }))
    }

    async fn rename(
        &self,
        id: &ListId,
        name: &str,
    ) -> Result<Option<SelectionList>, SelectionListRepositoryError> {
        Ok(self.update_list(id, |list| {
            SelectionList::new(list.id(), name, list.items().to_vec())
        }))
    }

    async fn delete(&self, id: &ListId) -> Result<bool, SelectionListRepositoryError> {
        let mut state = self.state();
        let before = state.lists.len();
        state.lists.retain(|list| list.id() != *id);
        Ok(state.lists.len() != before)
    }
}

#[async_trait]
impl SelectionCycleRepository for InMemorySelectionStore {
    async fn find_current(&self) -> Result<Option<SelectionCycle>, SelectionCycleRepositoryError> {
        Ok(self.state().cycle.clone())
    }

    async fn insert(
        &self,
        token: CycleToken,
    ) -> Result<SelectionCycle, SelectionCycleRepositoryError> {
        let now = self.clock.utc();
        let mut state = self.state();
        let cycle = state.cycle.get_or_insert_with(|| SelectionCycle {
            id: Uuid::new_v4(),
            current_cycle: token,
            created_at: now,
            updated_at: now,
        });
        Ok(cycle.clone())
    }

    async fn replace_token(
        &self,
        cycle_id: &Uuid,
        token: CycleToken,
    ) -> Result<(), SelectionCycleRepositoryError> {
        let now = self.clock.utc();
        let mut state = self.state();
        match state.cycle.as_mut() {
            Some(cycle) if cycle.id == *cycle_id => {
                cycle.current_cycle = token;
                cycle.updated_at = now;
                Ok(())
            }
            _ => Err(SelectionCycleRepositoryError::query(format!(
                "selection cycle {cycle_id} no longer exists"
            ))),
        }
    }
}

#[async_trait]
impl SelectionHistoryRepository for InMemorySelectionStore {
    async fn selected_items(
        &self,
        list_id: &ListId,
        cycle: &CycleToken,
    ) -> Result<Vec<String>, SelectionHistoryRepositoryError> {
        Ok(self
            .state()
            .history
            .iter()
            .filter(|entry| entry.list_id == *list_id && entry.selection_cycle == *cycle)
            .map(|entry| entry.selected_item.clone())
            .collect())
    }

    async fn append(
        &self,
        record: &NewSelectionRecord,
    ) -> Result<SelectionRecord, SelectionHistoryRepositoryError> {
        let entry = SelectionRecord {
            id: Uuid::new_v4(),
            list_id: record.list_id,
            selected_item: record.selected_item.clone(),
            selection_cycle: record.selection_cycle,
            created_at: self.clock.utc(),
        };
        self.state().history.push(entry.clone());
        Ok(entry)
    }

    async fn entries_for_cycle(
        &self,
        cycle: &CycleToken,
    ) -> Result<Vec<SelectionRecord>, SelectionHistoryRepositoryError> {
        Ok(self
            .state()
            .history
            .iter()
            .filter(|entry| entry.selection_cycle == *cycle)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    //! Port contract checks for the volatile store.
    use chrono::{TimeZone, Utc};
    use mockable::MockClock;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn store() -> InMemorySelectionStore {
        let mut clock = MockClock::new();
        clock
            .expect_utc()
            .returning(|| Utc.with_ymd_and_hms(2025, 3, 1, 6, 0, 0).single().expect("valid"));
        InMemorySelectionStore::new(Arc::new(clock))
    }

    #[rstest]
    #[tokio::test]
    async fn second_cycle_insert_keeps_first_row(store: InMemorySelectionStore) {
        let first = store.insert(CycleToken::generate()).await.expect("insert");
        let second = store.insert(CycleToken::generate()).await.expect("insert");
        assert_eq!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn replace_token_keeps_row_identity(store: InMemorySelectionStore) {
        let cycle = store.insert(CycleToken::generate()).await.expect("insert");
        let token = CycleToken::generate();
        store.replace_token(&cycle.id, token).await.expect("replace");

        let current = store.find_current().await.expect("read").expect("row");
        assert_eq!(current.id, cycle.id);
        assert_eq!(current.current_cycle, token);
    }

    #[rstest]
    #[tokio::test]
    async fn history_is_scoped_by_list_and_cycle(store: InMemorySelectionStore) {
        let list = ListId::random();
        let other = ListId::random();
        let cycle = CycleToken::generate();
        for (list_id, item, selection_cycle) in [
            (list, "a", cycle),
            (other, "b", cycle),
            (list, "c", CycleToken::generate()),
        ] {
            store
                .append(&NewSelectionRecord {
                    list_id,
                    selected_item: item.to_owned(),
                    selection_cycle,
                })
                .await
                .expect("append");
        }

        let selected = store.selected_items(&list, &cycle).await.expect("query");
        assert_eq!(selected, vec!["a".to_owned()]);
        assert_eq!(store.entries_for_cycle(&cycle).await.expect("query").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_a_list_keeps_its_history(store: InMemorySelectionStore) {
        let list = store.create("short", &["a".to_owned()]).await.expect("create");
        store
            .append(&NewSelectionRecord {
                list_id: list.id(),
                selected_item: "a".to_owned(),
                selection_cycle: CycleToken::generate(),
            })
            .await
            .expect("append");

        assert!(store.delete(&list.id()).await.expect("delete"));
        assert!(!store.delete(&list.id()).await.expect("delete"));
        assert_eq!(store.history().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn mutations_on_missing_list_return_none(store: InMemorySelectionStore) {
        let missing = ListId::random();
        assert!(store.save_items(&missing, &[]).await.expect("save").is_none());
        assert!(store.rename(&missing, "x").await.expect("rename").is_none());
    }
}
