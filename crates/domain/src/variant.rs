//! Stat variant — the closed set of stat card flavours.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Selects the styling modifier and icon of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatVariant {
    TotalProjects,
    RecentProjects,
    PendingAssignment,
    InEvaluation,
}

impl StatVariant {
    /// Every variant, in the order the welcome section shows them.
    pub const ALL: [Self; 4] = [
        Self::TotalProjects,
        Self::RecentProjects,
        Self::PendingAssignment,
        Self::InEvaluation,
    ];

    /// The kebab-case key, also used as the CSS modifier suffix.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TotalProjects => "total-projects",
            Self::RecentProjects => "recent-projects",
            Self::PendingAssignment => "pending-assignment",
            Self::InEvaluation => "in-evaluation",
        }
    }
}

impl fmt::Display for StatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatVariant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant(s.to_string()))
    }
}
