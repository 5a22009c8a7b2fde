//! Application layer
//!
//! Orchestrates use cases and coordinates domain objects.

pub mod query;
pub mod service;

pub use query::*;
pub use service::FormService;
