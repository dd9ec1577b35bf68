//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories are thin translators between Diesel rows and domain values;
//! no selection logic lives here. Row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use recitation_backend::outbound::persistence::{
//!     DbPool, DieselSelectionListRepository, PoolConfig,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/recitation")).await?;
//! let lists = DieselSelectionListRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_selection_cycle_repository;
mod diesel_selection_history_repository;
mod diesel_selection_list_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_selection_cycle_repository::DieselSelectionCycleRepository;
pub use diesel_selection_history_repository::DieselSelectionHistoryRepository;
pub use diesel_selection_list_repository::DieselSelectionListRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
