//! Grid of stat cards.

use evalboard_domain::stat::{self, STATS_GRID_CLASS, StatEntry};
use leptos::prelude::*;

use super::StatCard;

/// Lays out one [`StatCard`] per entry, in input order.
///
/// Cards are keyed by variant and occurrence rather than position, so a
/// reordered list moves cards instead of rebuilding them. The value and
/// label are part of the key so a changed count re-renders its card.
#[component]
pub fn StatsGrid(
    /// Entries to render; an empty list renders an empty grid.
    #[prop(into)]
    entries: Signal<Vec<StatEntry>>,
) -> impl IntoView {
    view! {
        <div class=STATS_GRID_CLASS>
            <For
                each=move || stat::keyed(entries.get())
                key=|(key, entry)| (*key, entry.value, entry.label.clone())
                children=|(_, entry)| view! { <StatCard entry/> }
            />
        </div>
    }
}
