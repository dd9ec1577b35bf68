//! Driving port for the non-repeating selection engine.

use async_trait::async_trait;

use crate::domain::{CycleToken, Error, ListRole};

/// One pick per role, plus the cycle the picks were recorded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSelections {
    pub list1: String,
    pub list2: String,
    pub list3: String,
    /// Cycle token the history entries were written under.
    pub cycle: CycleToken,
    /// Whether this call started a new cycle.
    pub cycle_reset: bool,
}

impl GeneratedSelections {
    /// The pick made for `role`.
    pub fn for_role(&self, role: ListRole) -> &str {
        match role {
            ListRole::ShortItems => &self.list1,
            ListRole::LongItems => &self.list2,
            ListRole::MemorizationSuggestions => &self.list3,
        }
    }
}

/// Driving port producing exactly one pick per managed list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SelectionCommand: Send + Sync {
    /// Draw one item per list without repeating a value inside a cycle.
    ///
    /// Fails with `NotFound` when a role has no list and `InvalidRequest`
    /// when any list is empty; in both cases nothing is written.
    async fn generate_selections(&self) -> Result<GeneratedSelections, Error>;
}

/// Fixture command returning constant picks for handler tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSelectionCommand;

#[async_trait]
impl SelectionCommand for FixtureSelectionCommand {
    async fn generate_selections(&self) -> Result<GeneratedSelections, Error> {
        Ok(GeneratedSelections {
            list1: "Al-Ikhlas".to_owned(),
            list2: "Al-Mulk".to_owned(),
            list3: "Ayat al-Kursi".to_owned(),
            cycle: CycleToken::generate(),
            cycle_reset: false,
        })
    }
}
