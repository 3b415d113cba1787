//! Welcome section — the four canonical stats built from scalar counts.

use serde::{Deserialize, Serialize};

use crate::stat::StatEntry;
use crate::variant::StatVariant;

/// Heading shown above the stats grid.
pub const WELCOME_TITLE: &str = "Panel de Administración de Proyectos";

/// Caption under the heading.
pub const WELCOME_SUBTITLE: &str = "Resumen general del estado de los proyectos";

/// Pre-aggregated project counts supplied by the owner page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WelcomeCounts {
    pub total_projects: u64,
    pub recent_projects: u64,
    pub pending_assignment: u64,
    pub in_evaluation: u64,
}

impl WelcomeCounts {
    /// Label shown on the card of a variant.
    #[must_use]
    pub fn label(variant: StatVariant) -> &'static str {
        match variant {
            StatVariant::TotalProjects => "Total de Proyectos",
            StatVariant::RecentProjects => "Proyectos Recientes",
            StatVariant::PendingAssignment => "Sin Evaluadores Asignados",
            StatVariant::InEvaluation => "En Evaluación",
        }
    }

    /// Count carried for a variant.
    #[must_use]
    pub fn count(&self, variant: StatVariant) -> u64 {
        match variant {
            StatVariant::TotalProjects => self.total_projects,
            StatVariant::RecentProjects => self.recent_projects,
            StatVariant::PendingAssignment => self.pending_assignment,
            StatVariant::InEvaluation => self.in_evaluation,
        }
    }

    /// Build counts from raw text values (e.g. URL query parameters).
    ///
    /// Missing or malformed values become 0.
    #[must_use]
    pub fn from_raw<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &str| {
            lookup(key)
                .and_then(|raw| raw.trim().parse::<u64>().ok())
                .unwrap_or_default()
        };
        Self {
            total_projects: parse("total_projects"),
            recent_projects: parse("recent_projects"),
            pending_assignment: parse("pending_assignment"),
            in_evaluation: parse("in_evaluation"),
        }
    }

    /// The four entries, always ordered total → recent → pending → in evaluation.
    #[must_use]
    pub fn stat_entries(&self) -> Vec<StatEntry> {
        StatVariant::ALL
            .into_iter()
            .map(|variant| StatEntry::new(self.count(variant), Self::label(variant), variant))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_fixed_sequence_from_counts() {
        let counts = WelcomeCounts {
            total_projects: 10,
            recent_projects: 2,
            pending_assignment: 1,
            in_evaluation: 3,
        };

        assert_eq!(
            counts.stat_entries(),
            vec![
                StatEntry::new(10, "Total de Proyectos", StatVariant::TotalProjects),
                StatEntry::new(2, "Proyectos Recientes", StatVariant::RecentProjects),
                StatEntry::new(1, "Sin Evaluadores Asignados", StatVariant::PendingAssignment),
                StatEntry::new(3, "En Evaluación", StatVariant::InEvaluation),
            ]
        );
    }

    #[test]
    fn should_default_every_count_to_zero() {
        let entries = WelcomeCounts::default().stat_entries();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.value == 0));
        let variants: Vec<_> = entries.iter().map(|e| e.variant).collect();
        assert_eq!(variants, StatVariant::ALL);
    }

    #[test]
    fn should_keep_order_regardless_of_field_assignment_order() {
        let counts = WelcomeCounts {
            in_evaluation: 4,
            pending_assignment: 0,
            recent_projects: 0,
            total_projects: 9,
        };
        let entries = counts.stat_entries();
        assert_eq!(entries[0].value, 9);
        assert_eq!(entries[3].value, 4);
    }

    #[test]
    fn should_parse_raw_values_and_zero_out_bad_ones() {
        let counts = WelcomeCounts::from_raw(|key| match key {
            "total_projects" => Some(" 12 ".to_string()),
            "recent_projects" => Some("abc".to_string()),
            "in_evaluation" => Some("-3".to_string()),
            _ => None,
        });
        assert_eq!(
            counts,
            WelcomeCounts {
                total_projects: 12,
                ..WelcomeCounts::default()
            }
        );
    }

    #[test]
    fn should_fill_missing_fields_with_zero_when_deserializing() {
        let counts: WelcomeCounts = serde_json::from_str(r#"{"recent_projects":5}"#).unwrap();
        assert_eq!(
            counts,
            WelcomeCounts {
                recent_projects: 5,
                ..WelcomeCounts::default()
            }
        );
    }
}
