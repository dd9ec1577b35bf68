//! Tests for the selection engine against mocked ports.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::*;
use crate::domain::ports::{
    MockSelectionCycleRepository, MockSelectionHistoryRepository, MockSelectionListRepository,
    SelectionCycleRepositoryError,
};
use crate::domain::random_source::MockRandomSource;
use crate::domain::{ErrorCode, SelectionCycle, SelectionRecord, SeededRandomSource};

type Service = SelectionService<
    MockSelectionListRepository,
    MockSelectionCycleRepository,
    MockSelectionHistoryRepository,
>;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn role_list(role: ListRole, items: &[&str]) -> SelectionList {
    SelectionList::new(ListId::random(), role.default_name(), strings(items))
}

#[fixture]
fn managed_lists() -> Vec<SelectionList> {
    vec![
        role_list(ListRole::ShortItems, &["x", "y"]),
        role_list(ListRole::LongItems, &["p"]),
        role_list(ListRole::MemorizationSuggestions, &["m", "n"]),
    ]
}

fn cycle_repo_with(token: CycleToken) -> MockSelectionCycleRepository {
    let mut repo = MockSelectionCycleRepository::new();
    repo.expect_find_current().returning(move || {
        let now = Utc::now();
        Ok(Some(SelectionCycle {
            id: Uuid::nil(),
            current_cycle: token,
            created_at: now,
            updated_at: now,
        }))
    });
    repo
}

fn list_repo_with(lists: Vec<SelectionList>) -> MockSelectionListRepository {
    let mut repo = MockSelectionListRepository::new();
    repo.expect_list_all().returning(move || Ok(lists.clone()));
    repo
}

fn echo_append(record: &NewSelectionRecord) -> Result<SelectionRecord, SelectionHistoryRepositoryError> {
    Ok(SelectionRecord {
        id: Uuid::new_v4(),
        list_id: record.list_id,
        selected_item: record.selected_item.clone(),
        selection_cycle: record.selection_cycle,
        created_at: Utc::now(),
    })
}

fn make_service(
    lists: MockSelectionListRepository,
    cycle: MockSelectionCycleRepository,
    history: MockSelectionHistoryRepository,
) -> Service {
    SelectionService::new(
        Arc::new(lists),
        Arc::new(cycle),
        Arc::new(history),
        Arc::new(SeededRandomSource::new(11)),
    )
}

#[rstest]
#[tokio::test]
async fn draws_one_item_per_list_and_records_three_entries(managed_lists: Vec<SelectionList>) {
    let token = CycleToken::generate();
    let mut history = MockSelectionHistoryRepository::new();
    history
        .expect_selected_items()
        .times(3)
        .returning(|_, _| Ok(Vec::new()));
    history
        .expect_append()
        .withf(move |record| record.selection_cycle == token)
        .times(3)
        .returning(echo_append);

    let service = make_service(list_repo_with(managed_lists), cycle_repo_with(token), history);
    let picks = service.generate_selections().await.expect("generated");

    assert!(["x", "y"].contains(&picks.list1.as_str()));
    assert_eq!(picks.list2, "p");
    assert!(["m", "n"].contains(&picks.list3.as_str()));
    assert_eq!(picks.cycle, token);
    assert!(!picks.cycle_reset);
}

#[rstest]
#[tokio::test]
async fn draws_only_from_eligible_items(managed_lists: Vec<SelectionList>) {
    let token = CycleToken::generate();
    let short_id = managed_lists[0].id();
    let mut history = MockSelectionHistoryRepository::new();
    history
        .expect_selected_items()
        .times(3)
        .returning(move |list_id, _| {
            if *list_id == short_id {
                Ok(strings(&["x"]))
            } else {
                Ok(Vec::new())
            }
        });
    history.expect_append().times(3).returning(echo_append);

    let mut random = MockRandomSource::new();
    random.expect_pick_index().returning(|len| len - 1);

    let service: Service = SelectionService::new(
        Arc::new(list_repo_with(managed_lists)),
        Arc::new(cycle_repo_with(token)),
        Arc::new(history),
        Arc::new(random),
    );
    let picks = service.generate_selections().await.expect("generated");
    assert_eq!(picks.list1, "y");
    assert!(!picks.cycle_reset);
}

#[tokio::test]
async fn draws_are_uniform_over_the_eligible_set() {
    const DRAWS: usize = 3_000;
    let lists = vec![
        role_list(ListRole::ShortItems, &["u", "v", "w", "x"]),
        role_list(ListRole::LongItems, &["p", "q"]),
        role_list(ListRole::MemorizationSuggestions, &["m"]),
    ];
    let short_id = lists[0].id();
    let mut history = MockSelectionHistoryRepository::new();
    history.expect_selected_items().returning(move |list_id, _| {
        if *list_id == short_id {
            Ok(strings(&["x"]))
        } else {
            Ok(Vec::new())
        }
    });
    history.expect_append().returning(echo_append);

    let service = make_service(
        list_repo_with(lists),
        cycle_repo_with(CycleToken::generate()),
        history,
    );
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..DRAWS {
        let picks = service.generate_selections().await.expect("generated");
        assert!(!picks.cycle_reset);
        *counts.entry(picks.list1).or_default() += 1;
    }

    assert!(!counts.contains_key("x"), "ineligible value drawn: {counts:?}");
    let expected = DRAWS / 3;
    for item in ["u", "v", "w"] {
        let seen = counts.get(item).copied().unwrap_or_default();
        assert!(
            seen.abs_diff(expected) < expected / 10,
            "{item} drawn {seen} times, expected about {expected}"
        );
    }
}

#[rstest]
#[tokio::test]
async fn exhausting_one_list_resets_every_list(managed_lists: Vec<SelectionList>) {
    let old = CycleToken::generate();
    let long_id = managed_lists[1].id();
    let short_id = managed_lists[0].id();

    let mut cycle = cycle_repo_with(old);
    cycle
        .expect_replace_token()
        .withf(move |_, token| *token != old)
        .times(1)
        .return_once(|_, _| Ok(()));

    let mut history = MockSelectionHistoryRepository::new();
    history
        .expect_selected_items()
        .times(3)
        .returning(move |list_id, _| {
            if *list_id == long_id {
                Ok(strings(&["p"]))
            } else if *list_id == short_id {
                Ok(strings(&["x"]))
            } else {
                Ok(Vec::new())
            }
        });
    history
        .expect_append()
        .withf(move |record| record.selection_cycle != old)
        .times(3)
        .returning(echo_append);

    let mut random = MockRandomSource::new();
    random.expect_pick_index().returning(|_| 0);

    let service: Service = SelectionService::new(
        Arc::new(list_repo_with(managed_lists)),
        Arc::new(cycle),
        Arc::new(history),
        Arc::new(random),
    );
    let picks = service.generate_selections().await.expect("generated");

    assert!(picks.cycle_reset);
    assert_ne!(picks.cycle, old);
    // "x" was selected under the old cycle but is eligible again.
    assert_eq!(picks.list1, "x");
    assert_eq!(picks.list2, "p");
}

#[rstest]
#[tokio::test]
async fn empty_list_aborts_without_writes(mut managed_lists: Vec<SelectionList>) {
    managed_lists[2] = role_list(ListRole::MemorizationSuggestions, &[]);
    let mut cycle = cycle_repo_with(CycleToken::generate());
    cycle.expect_replace_token().times(0);
    cycle.expect_insert().times(0);
    let mut history = MockSelectionHistoryRepository::new();
    history.expect_selected_items().times(0);
    history.expect_append().times(0);

    let service = make_service(list_repo_with(managed_lists), cycle, history);
    let err = service.generate_selections().await.expect_err("empty list");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "list has no items: memorization_suggestions");
    assert_eq!(
        err.details(),
        Some(&serde_json::json!({ "role": "memorization_suggestions" }))
    );
}

#[rstest]
#[tokio::test]
async fn missing_list_is_not_found(mut managed_lists: Vec<SelectionList>) {
    managed_lists.remove(1);
    let mut history = MockSelectionHistoryRepository::new();
    history.expect_selected_items().times(0);
    history.expect_append().times(0);

    let service = make_service(
        list_repo_with(managed_lists),
        cycle_repo_with(CycleToken::generate()),
        history,
    );
    let err = service.generate_selections().await.expect_err("missing list");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "required list missing: long_items");
}

#[rstest]
#[tokio::test]
async fn duplicate_role_names_are_rejected(mut managed_lists: Vec<SelectionList>) {
    managed_lists.push(role_list(ListRole::ShortItems, &["z"]));
    let mut history = MockSelectionHistoryRepository::new();
    history.expect_append().times(0);

    let service = make_service(
        list_repo_with(managed_lists),
        cycle_repo_with(CycleToken::generate()),
        history,
    );
    let err = service.generate_selections().await.expect_err("ambiguous");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn lists_are_resolved_through_configured_names() {
    let lists = vec![
        SelectionList::new(ListId::random(), "Short", strings(&["a"])),
        SelectionList::new(ListId::random(), "Long", strings(&["b"])),
        SelectionList::new(ListId::random(), "Memorise", strings(&["c"])),
    ];
    let mut history = MockSelectionHistoryRepository::new();
    history
        .expect_selected_items()
        .returning(|_, _| Ok(Vec::new()));
    history.expect_append().times(3).returning(echo_append);

    let names = ListRoleNames::default()
        .with_name(ListRole::ShortItems, "Short")
        .with_name(ListRole::LongItems, "Long")
        .with_name(ListRole::MemorizationSuggestions, "Memorise");
    let service = make_service(
        list_repo_with(lists),
        cycle_repo_with(CycleToken::generate()),
        history,
    )
    .with_role_names(names);

    let picks = service.generate_selections().await.expect("generated");
    assert_eq!(
        (picks.list1.as_str(), picks.list2.as_str(), picks.list3.as_str()),
        ("a", "b", "c")
    );
}

#[rstest]
#[tokio::test]
async fn failed_append_surfaces_error(managed_lists: Vec<SelectionList>) {
    let mut history = MockSelectionHistoryRepository::new();
    history
        .expect_selected_items()
        .returning(|_, _| Ok(Vec::new()));
    history
        .expect_append()
        .returning(|_| Err(SelectionHistoryRepositoryError::query("disk full")));

    let service = make_service(
        list_repo_with(managed_lists),
        cycle_repo_with(CycleToken::generate()),
        history,
    );
    let err = service.generate_selections().await.expect_err("append failed");
    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn unreachable_cycle_store_is_internal_error(managed_lists: Vec<SelectionList>) {
    let mut cycle = MockSelectionCycleRepository::new();
    cycle
        .expect_find_current()
        .returning(|| Err(SelectionCycleRepositoryError::connection("refused")));
    let mut history = MockSelectionHistoryRepository::new();
    history.expect_append().times(0);

    let service = make_service(list_repo_with(managed_lists), cycle, history);
    let err = service.generate_selections().await.expect_err("unavailable");
    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn history_reports_entries_of_active_cycle() {
    let token = CycleToken::generate();
    let list_id = ListId::random();
    let mut history = MockSelectionHistoryRepository::new();
    history
        .expect_entries_for_cycle()
        .withf(move |cycle| *cycle == token)
        .times(1)
        .return_once(move |cycle| {
            Ok(vec![SelectionRecord {
                id: Uuid::new_v4(),
                list_id,
                selected_item: "Al-Fatiha".to_owned(),
                selection_cycle: *cycle,
                created_at: Utc::now(),
            }])
        });

    let service = make_service(
        MockSelectionListRepository::new(),
        cycle_repo_with(token),
        history,
    );
    let report = service.current_cycle_history().await.expect("history");
    assert_eq!(report.cycle, token);
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].selected_item, "Al-Fatiha");
}
