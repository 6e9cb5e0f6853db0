//! Application layer: name-resolving queries over the domain
//!
//! Orchestrates domain operations for the CLI and carries configuration.

pub mod error;
pub mod lineage;

pub use error::{ApplicationError, ApplicationResult};
pub use lineage::{Census, LineageService, Millennials, Seniority};
