//! # Reporting Categories — Single Source of Truth
//!
//! Defines the [`Category`] enum with the four top-level activity groupings.
//! Every breakdown, ranking, and factor table keys on this enum, so adding a
//! category forces each exhaustive `match` in the workspace to address it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A top-level activity grouping in an emissions breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Personal travel by car, bus, train, or plane.
    Transport,
    /// Metered household electricity consumption.
    Electricity,
    /// Household garbage sent to landfill.
    Waste,
    /// Money spent on food, weighted by where it was eaten.
    Food,
}

impl Category {
    /// All categories in canonical reporting order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Transport,
            Self::Electricity,
            Self::Waste,
            Self::Food,
        ]
    }

    /// The total number of categories.
    pub const COUNT: usize = 4;

    /// Wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Electricity => "electricity",
            Self::Waste => "waste",
            Self::Food => "food",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parse a category name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}
