//! Domain entities: the vampire record carried by every genealogy node

use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversion year after which a descendant counts as a millennial.
pub const MILLENNIAL_THRESHOLD: i32 = 1980;

/// A single vampire entity.
///
/// Names are not guaranteed to be unique within a coven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vampire {
    pub name: String,
    /// Year the vampire was turned; originals may have none.
    pub year_converted: Option<i32>,
}

impl Vampire {
    pub fn new(name: impl Into<String>, year_converted: Option<i32>) -> Self {
        Self {
            name: name.into(),
            year_converted,
        }
    }

    /// True if the vampire was turned strictly after `year`.
    ///
    /// A vampire without a conversion year never qualifies.
    pub fn converted_after(&self, year: i32) -> bool {
        self.year_converted.is_some_and(|converted| converted > year)
    }

    pub fn is_millennial(&self) -> bool {
        self.converted_after(MILLENNIAL_THRESHOLD)
    }
}

impl fmt::Display for Vampire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year_converted {
            Some(year) => write!(f, "{} ({})", self.name, year),
            None => write!(f, "{}", self.name),
        }
    }
}
