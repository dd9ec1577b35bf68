//! Internal Diesel row structs.
//!
//! These types never leave the persistence module; repositories convert them
//! into domain values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{selection_cycle, selection_history, selection_lists};

/// Row read from `selection_lists`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = selection_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SelectionListRow {
    pub id: Uuid,
    pub name: String,
    pub items: serde_json::Value,
}

/// Insertable list row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = selection_lists)]
pub(crate) struct NewSelectionListRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub items: &'a serde_json::Value,
}

/// Row read from `selection_cycle`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = selection_cycle)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SelectionCycleRow {
    pub id: Uuid,
    pub current_cycle: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable cycle row; timestamps default in the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = selection_cycle)]
pub(crate) struct NewSelectionCycleRow {
    pub id: Uuid,
    pub current_cycle: Uuid,
}

/// Row read from `selection_history`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = selection_history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SelectionHistoryRow {
    pub id: Uuid,
    pub list_id: Uuid,
    pub selected_item: String,
    pub selection_cycle: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Insertable ledger entry.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = selection_history)]
pub(crate) struct NewSelectionHistoryRow<'a> {
    pub id: Uuid,
    pub list_id: Uuid,
    pub selected_item: &'a str,
    pub selection_cycle: Uuid,
}
