use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BarnError;

/// The closed set of maintenance categories.
///
/// Adding a variant forces every exhaustive `match` (the cycle policy table
/// included) to be extended before the workspace compiles again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Farrier,
    Vet,
    Deworming,
    Dental,
}

impl EventCategory {
    /// Total number of categories.
    pub const COUNT: usize = 4;

    /// All variants in declaration order.
    pub const ALL: [EventCategory; Self::COUNT] =
        [Self::Farrier, Self::Vet, Self::Deworming, Self::Dental];

    /// Position in [`Self::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Farrier => 0,
            Self::Vet => 1,
            Self::Deworming => 2,
            Self::Dental => 3,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Farrier => "Farrier",
            Self::Vet => "Vet",
            Self::Deworming => "Deworming",
            Self::Dental => "Dental",
        }
    }
}

// `ALL` must list every variant at its `index()`.
const _: () = {
    assert!(EventCategory::ALL.len() == EventCategory::COUNT);
    let mut i = 0;
    while i < EventCategory::COUNT {
        assert!(EventCategory::ALL[i].index() == i);
        i += 1;
    }
};

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventCategory {
    type Err = BarnError;

    /// Case-insensitive parse of a category label coming from a collaborator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| BarnError::UnknownCategory {
                name: s.to_string(),
            })
    }
}
