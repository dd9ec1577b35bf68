//! Domain primitives, services and ports.
//!
//! Purpose: model the three managed lists, the cycle singleton and the
//! selection ledger, and implement the non-repeating draw over them. Nothing
//! here depends on actix-web or Diesel; adapters reach the domain through
//! [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode — transport agnostic failure payload.
//! - ListRole / ListRoleNames — role to list-name binding.
//! - SelectionList / ListItem / ListId — list aggregate and values.
//! - CycleToken / SelectionCycle — active cycle state.
//! - SelectionService / SelectionListService / CycleTracker — use-cases.

mod cycle_tracker;
mod default_lists;
pub mod eligibility;
pub mod error;
mod list_role;
pub mod ports;
mod random_source;
mod selection_cycle;
mod selection_history;
mod selection_list;
mod selection_list_service;
mod selection_service;
mod trace_id;

pub use self::cycle_tracker::CycleTracker;
pub use self::default_lists::{DefaultListsOutcome, ensure_default_lists};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::list_role::{ListRole, ListRoleNames, ParseListRoleError, RoleResolutionError};
pub use self::random_source::{RandomSource, SeededRandomSource, ThreadRandomSource, pick};
pub use self::selection_cycle::{CycleToken, SelectionCycle};
pub use self::selection_history::{NewSelectionRecord, SelectionRecord};
pub use self::selection_list::{
    ListId, ListItem, SelectionList, SelectionListValidationError, validate_list_name,
};
pub use self::selection_list_service::SelectionListService;
pub use self::selection_service::SelectionService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
