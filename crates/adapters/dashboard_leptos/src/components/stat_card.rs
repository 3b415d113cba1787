//! Stat card component for displaying one project counter.

use evalboard_domain::stat::StatEntry;
use leptos::prelude::*;

use super::IconView;

/// A card showing the variant icon, the value and its label.
///
/// The variant drives the `project-admin-stat-card--<variant>` modifier used
/// for per-variant theming.
#[component]
pub fn StatCard(
    /// The entry to display.
    entry: StatEntry,
) -> impl IntoView {
    let class = entry.css_class();
    let icon = entry.icon();

    view! {
        <div class=class>
            <div class="project-admin-stat-card__icon">
                <IconView icon/>
            </div>
            <div class="project-admin-stat-card__content">
                <span class="project-admin-stat-card__value">{entry.value}</span>
                <span class="project-admin-stat-card__label">{entry.label}</span>
            </div>
        </div>
    }
}
