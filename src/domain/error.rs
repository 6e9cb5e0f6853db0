//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent failed genealogy queries.
/// Malformed trees (cycles, double attachment) are not detected here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown vampire handle: {0:?}")]
    UnknownVampire(Index),

    #[error("no vampire named '{name}' in the lineage of {root}")]
    NameNotFound { root: String, name: String },

    #[error("{left} and {right} share no common ancestor")]
    NoCommonAncestor { left: String, right: String },

    #[error("creator '{creator}' of '{name}' has not been declared")]
    UnknownCreator { name: String, creator: String },
}

impl DomainError {
    /// True for the "not found" kind: missing names and disjoint lineages.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::NameNotFound { .. } | DomainError::NoCommonAncestor { .. }
        )
    }
}

/// Result type for genealogy operations.
pub type DomainResult<T> = Result<T, DomainError>;
