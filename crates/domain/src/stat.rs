//! Stat entries and their rendering keys.

use serde::{Deserialize, Serialize};

use crate::icon::Icon;
use crate::variant::StatVariant;

/// Base class of every stat card.
pub const STAT_CARD_CLASS: &str = "project-admin-stat-card";

/// Class of the container laying the cards out.
pub const STATS_GRID_CLASS: &str = "project-admin-stats-grid";

/// One `{value, label, variant}` triple shown by a stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub value: u64,
    pub label: String,
    pub variant: StatVariant,
}

impl StatEntry {
    #[must_use]
    pub fn new(value: u64, label: impl Into<String>, variant: StatVariant) -> Self {
        Self {
            value,
            label: label.into(),
            variant,
        }
    }

    /// Class attribute of the card: base class plus the variant modifier.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("{STAT_CARD_CLASS} {STAT_CARD_CLASS}--{}", self.variant)
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        Icon::for_variant(self.variant)
    }
}

/// Stable identity of a card within a grid.
///
/// `occurrence` counts the earlier entries sharing the same variant, so keys
/// stay unique even when a caller repeats a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatKey {
    pub variant: StatVariant,
    pub occurrence: usize,
}

/// Pair each entry with its [`StatKey`], preserving input order.
#[must_use]
pub fn keyed(entries: Vec<StatEntry>) -> Vec<(StatKey, StatEntry)> {
    let mut seen: Vec<StatVariant> = Vec::with_capacity(entries.len());
    entries
        .into_iter()
        .map(|entry| {
            let occurrence = seen.iter().filter(|v| **v == entry.variant).count();
            seen.push(entry.variant);
            let key = StatKey {
                variant: entry.variant,
                occurrence,
            };
            (key, entry)
        })
        .collect()
}
