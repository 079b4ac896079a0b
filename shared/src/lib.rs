//! Shared types and models for the weather history service
//!
//! Holds the archive models and the pure aggregation logic so the server
//! and any offline tooling compute identical statistics.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
