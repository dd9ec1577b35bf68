//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: volatile store used without a database and in tests.
//!
//! Adapters translate between domain types and storage representations and
//! contain no selection logic.

pub mod memory;
pub mod persistence;
