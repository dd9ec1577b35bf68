//! Append-only selection history ledger entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CycleToken, ListId};

/// A stored history entry. The selected item is a copy of the value, not a
/// reference into the list, so later list edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRecord {
    pub id: Uuid,
    pub list_id: ListId,
    pub selected_item: String,
    pub selection_cycle: CycleToken,
    pub created_at: DateTime<Utc>,
}

/// Entry to append to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSelectionRecord {
    pub list_id: ListId,
    pub selected_item: String,
    pub selection_cycle: CycleToken,
}
