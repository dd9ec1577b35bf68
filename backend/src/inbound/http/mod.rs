//! HTTP inbound adapter.
//!
//! Handlers translate JSON requests into driving port calls and map domain
//! errors onto status codes. They never touch storage directly.

pub mod error;
pub mod health;
pub mod history;
pub mod lists;
pub mod schemas;
pub mod selections;
pub mod state;
pub(crate) mod validation;

pub use error::ApiResult;
