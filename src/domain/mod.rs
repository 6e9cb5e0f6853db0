//! Domain layer: the genealogy arena and its queries
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;

pub use arena::{Coven, LineageIterator, VampireId, VampireNode};
pub use builder::{demo_coven, LineageBuilder};
pub use entities::{Vampire, MILLENNIAL_THRESHOLD};
pub use error::{DomainError, DomainResult};
