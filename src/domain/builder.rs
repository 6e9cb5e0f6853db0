//! Lineage builder for declaring genealogies in code.

use std::collections::HashMap;

use tracing::instrument;

use crate::domain::arena::{Coven, VampireId};
use crate::domain::entities::Vampire;
use crate::domain::error::DomainError;

/// Result type for builder operations.
pub type BuildResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone)]
struct Declaration {
    vampire: Vampire,
    creator: Option<String>,
}

/// Constructs a [`Coven`] from declarations in creation order.
///
/// A creator is referenced by name and resolves to the most recent earlier
/// declaration carrying that name, so every built coven is acyclic.
#[derive(Debug, Default)]
pub struct LineageBuilder {
    declarations: Vec<Declaration>,
}

impl LineageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a vampire without a creator.
    pub fn original(mut self, name: &str, year_converted: Option<i32>) -> Self {
        self.declarations.push(Declaration {
            vampire: Vampire::new(name, year_converted),
            creator: None,
        });
        self
    }

    /// Declare a vampire turned by an already declared `creator`.
    pub fn sired(mut self, name: &str, year_converted: Option<i32>, creator: &str) -> Self {
        self.declarations.push(Declaration {
            vampire: Vampire::new(name, year_converted),
            creator: Some(creator.to_string()),
        });
        self
    }

    #[instrument(level = "debug", skip(self))]
    pub fn build(self) -> BuildResult<Coven> {
        let mut coven = Coven::new();
        let mut latest_by_name: HashMap<String, VampireId> = HashMap::new();

        for declaration in self.declarations {
            let creator_idx = match &declaration.creator {
                Some(creator) => Some(*latest_by_name.get(creator).ok_or_else(|| {
                    DomainError::UnknownCreator {
                        name: declaration.vampire.name.clone(),
                        creator: creator.clone(),
                    }
                })?),
                None => None,
            };

            let name = declaration.vampire.name.clone();
            let idx = coven.spawn(declaration.vampire);
            if let Some(creator_idx) = creator_idx {
                coven.add_offspring(creator_idx, idx)?;
            }
            latest_by_name.insert(name, idx);
        }

        Ok(coven)
    }
}

/// The demonstration genealogy: `root` sired `a` and `b`, `b` sired `c`.
pub fn demo_coven() -> BuildResult<Coven> {
    LineageBuilder::new()
        .original("root", None)
        .sired("a", Some(1899), "root")
        .sired("b", Some(1981), "root")
        .sired("c", Some(2004), "b")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_undeclared_creator_when_building_then_unknown_creator() {
        let result = LineageBuilder::new()
            .original("root", None)
            .sired("child", Some(1990), "nobody")
            .build();

        assert_eq!(
            result.unwrap_err(),
            DomainError::UnknownCreator {
                name: "child".to_string(),
                creator: "nobody".to_string(),
            }
        );
    }

    #[test]
    fn given_creator_declared_later_when_building_then_fails() {
        let result = LineageBuilder::new()
            .sired("child", None, "late")
            .original("late", None)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn given_duplicate_names_when_building_then_latest_declaration_is_creator() {
        let coven = LineageBuilder::new()
            .original("twin", Some(1400))
            .original("twin", Some(1500))
            .sired("child", Some(1600), "twin")
            .build()
            .unwrap();

        let originals = coven.originals();
        assert_eq!(originals.len(), 2);
        assert_eq!(coven.number_of_offspring(originals[0]).unwrap(), 0);
        assert_eq!(coven.number_of_offspring(originals[1]).unwrap(), 1);
    }

    #[test]
    fn given_demo_coven_when_built_then_has_four_vampires_one_original() {
        let coven = demo_coven().unwrap();
        assert_eq!(coven.len(), 4);
        assert_eq!(coven.originals().len(), 1);
    }
}
