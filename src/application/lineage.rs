//! Name-based queries over a coven, as used by the CLI.

use tracing::{debug, instrument};

use crate::config::Settings;
use crate::domain::{Coven, DomainError, Vampire, VampireId};
use crate::tree_traits::LineageTree;

use super::error::{ApplicationError, ApplicationResult};

/// Seniority comparison between two named vampires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seniority {
    pub left: String,
    pub right: String,
    pub left_distance: usize,
    pub right_distance: usize,
    pub left_is_more_senior: bool,
}

/// Offspring and descendant counts of a named vampire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Census {
    pub name: String,
    pub offspring: usize,
    pub descendants: usize,
}

/// Descendants turned after `year`, the threshold actually applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Millennials<'a> {
    pub year: i32,
    pub vampires: Vec<&'a Vampire>,
}

/// Resolves names against the first original of a coven and runs queries.
pub struct LineageService {
    coven: Coven,
    root: Option<VampireId>,
    settings: Settings,
}

impl LineageService {
    pub fn new(coven: Coven, settings: Settings) -> Self {
        let root = coven.originals().first().copied();
        Self {
            coven,
            root,
            settings,
        }
    }

    pub fn coven(&self) -> &Coven {
        &self.coven
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn root_or_err(&self, name: &str) -> ApplicationResult<VampireId> {
        self.root.ok_or_else(|| {
            DomainError::NameNotFound {
                root: "<empty coven>".to_string(),
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Locate a vampire by name, searching the lineage of the first original.
    pub fn resolve(&self, name: &str) -> ApplicationResult<VampireId> {
        let root = self.root_or_err(name)?;
        Ok(self.coven.vampire_with_name(root, name)?)
    }

    pub fn find(&self, name: &str) -> ApplicationResult<&Vampire> {
        let idx = self.resolve(name)?;
        Ok(self.coven.vampire(idx)?)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn closest_common_ancestor(&self, left: &str, right: &str) -> ApplicationResult<&Vampire> {
        let left_idx = self.resolve(left)?;
        let right_idx = self.resolve(right)?;
        let ancestor = self.coven.closest_common_ancestor(left_idx, right_idx)?;
        let vampire = self.coven.vampire(ancestor)?;
        debug!(ancestor = %vampire.name, "resolved");
        Ok(vampire)
    }

    pub fn seniority(&self, left: &str, right: &str) -> ApplicationResult<Seniority> {
        let left_idx = self.resolve(left)?;
        let right_idx = self.resolve(right)?;
        Ok(Seniority {
            left: left.to_string(),
            right: right.to_string(),
            left_distance: self.coven.number_of_vampires_from_original(left_idx)?,
            right_distance: self.coven.number_of_vampires_from_original(right_idx)?,
            left_is_more_senior: self.coven.is_more_senior_than(left_idx, right_idx)?,
        })
    }

    /// Counts for `name`, or for the first original when no name is given.
    pub fn census(&self, name: Option<&str>) -> ApplicationResult<Census> {
        let idx = match name {
            Some(name) => self.resolve(name)?,
            None => self.root_or_err("<original>")?,
        };
        Ok(Census {
            name: self.coven.vampire(idx)?.name.clone(),
            offspring: self.coven.number_of_offspring(idx)?,
            descendants: self.coven.total_descendents(idx)?,
        })
    }

    /// Descendants of the first original turned after `after`, or after the
    /// configured year when not given.
    pub fn millennials(&self, after: Option<i32>) -> ApplicationResult<Millennials<'_>> {
        let root = self.root_or_err("<original>")?;
        let year = after.unwrap_or(self.settings.millennial_after);
        let vampires = self
            .coven
            .converted_after(root, year)?
            .into_iter()
            .map(|idx| self.coven.vampire(idx).map_err(ApplicationError::from))
            .collect::<ApplicationResult<Vec<_>>>()?;
        Ok(Millennials { year, vampires })
    }

    /// Rendered trees for every original in the coven.
    pub fn render(&self) -> ApplicationResult<Vec<String>> {
        self.coven
            .originals()
            .into_iter()
            .map(|root| {
                self.coven
                    .to_tree_string(root, self.settings.show_years)
                    .map(|tree| tree.to_string())
                    .map_err(ApplicationError::from)
            })
            .collect()
    }
}
