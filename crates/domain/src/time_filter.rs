//! Reporting period selected in the header bar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::field::{SelectOption, SelectOptions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFilter {
    #[default]
    All,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeFilter {
    pub const ALL: [Self; 5] = [Self::All, Self::Week, Self::Month, Self::Quarter, Self::Year];

    /// Placeholder of the period select; never selected since a filter is always set.
    pub const PLACEHOLDER: &'static str = "Seleccione un período";

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todo el período",
            Self::Week => "Última semana",
            Self::Month => "Último mes",
            Self::Quarter => "Último trimestre",
            Self::Year => "Último año",
        }
    }

    /// Choices for the header bar select, in [`TimeFilter::ALL`] order.
    #[must_use]
    pub fn options() -> SelectOptions {
        let options = Self::ALL
            .into_iter()
            .map(|filter| SelectOption::new(filter.as_str(), filter.label()))
            .collect();
        // values come from a closed enum and are unique
        SelectOptions::new(options).unwrap_or_default()
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownTimeFilter(s.to_string()))
    }
}
