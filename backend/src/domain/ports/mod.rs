//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe how the domain reaches storage.
//! Driving ports (`*Command`, `*Query`) are the use-cases inbound adapters
//! call. Each driven port exposes a typed error generated by
//! `define_port_error!` so adapters map their failures into predictable
//! variants.

mod macros;
pub(crate) use macros::define_port_error;

mod selection_command;
mod selection_cycle_repository;
mod selection_history_query;
mod selection_history_repository;
mod selection_list_command;
mod selection_list_query;
mod selection_list_repository;

#[cfg(test)]
pub use selection_command::MockSelectionCommand;
pub use selection_command::{FixtureSelectionCommand, GeneratedSelections, SelectionCommand};
#[cfg(test)]
pub use selection_cycle_repository::MockSelectionCycleRepository;
pub use selection_cycle_repository::{SelectionCycleRepository, SelectionCycleRepositoryError};
#[cfg(test)]
pub use selection_history_query::MockSelectionHistoryQuery;
pub use selection_history_query::{
    CycleHistory, FixtureSelectionHistoryQuery, SelectionHistoryQuery,
};
#[cfg(test)]
pub use selection_history_repository::MockSelectionHistoryRepository;
pub use selection_history_repository::{
    SelectionHistoryRepository, SelectionHistoryRepositoryError,
};
#[cfg(test)]
pub use selection_list_command::MockSelectionListCommand;
pub use selection_list_command::{
    AddItemRequest, CreateListRequest, FixtureSelectionListCommand, RemoveItemRequest,
    SelectionListCommand, UpdateListRequest,
};
#[cfg(test)]
pub use selection_list_query::MockSelectionListQuery;
pub use selection_list_query::{FixtureSelectionListQuery, SelectionListQuery};
#[cfg(test)]
pub use selection_list_repository::MockSelectionListRepository;
pub use selection_list_repository::{SelectionListRepository, SelectionListRepositoryError};
