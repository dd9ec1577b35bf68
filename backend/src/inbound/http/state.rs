//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised against fixtures without any storage.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureSelectionCommand, FixtureSelectionHistoryQuery, FixtureSelectionListCommand,
    FixtureSelectionListQuery, SelectionCommand, SelectionHistoryQuery, SelectionListCommand,
    SelectionListQuery,
};

/// Driving ports handed to [`HttpState::new`].
pub struct HttpStatePorts {
    pub selections: Arc<dyn SelectionCommand>,
    pub history: Arc<dyn SelectionHistoryQuery>,
    pub lists: Arc<dyn SelectionListCommand>,
    pub lists_query: Arc<dyn SelectionListQuery>,
}

/// Port implementations backing the HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub selections: Arc<dyn SelectionCommand>,
    pub history: Arc<dyn SelectionHistoryQuery>,
    pub lists: Arc<dyn SelectionListCommand>,
    pub lists_query: Arc<dyn SelectionListQuery>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            selections,
            history,
            lists,
            lists_query,
        } = ports;
        Self {
            selections,
            history,
            lists,
            lists_query,
        }
    }

    /// State wired entirely to fixture ports.
    ///
    /// # Examples
    /// ```
    /// use recitation_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::fixtures();
    /// let _selections = state.selections.clone();
    /// ```
    pub fn fixtures() -> Self {
        Self::new(HttpStatePorts {
            selections: Arc::new(FixtureSelectionCommand),
            history: Arc::new(FixtureSelectionHistoryQuery),
            lists: Arc::new(FixtureSelectionListCommand),
            lists_query: Arc::new(FixtureSelectionListQuery),
        })
    }
}
