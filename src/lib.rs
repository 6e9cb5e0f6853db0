//! Vampire genealogy trees.
//!
//! A [`domain::Coven`] is an arena of vampires linked creator → offspring.
//! Queries cover seniority, closest common ancestor, name lookup,
//! descendant counts and filtering by conversion year.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{
    demo_coven, Coven, DomainError, DomainResult, LineageBuilder, Vampire, VampireId,
    MILLENNIAL_THRESHOLD,
};
