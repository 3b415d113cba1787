//! Welcome section shown at the top of the administration dashboard.

use evalboard_domain::welcome::{WELCOME_SUBTITLE, WELCOME_TITLE, WelcomeCounts};
use leptos::prelude::*;

use super::StatsGrid;

/// Header caption plus the four canonical project stats.
///
/// Counts are expected pre-aggregated by the owner; each defaults to 0.
#[component]
pub fn WelcomeSection(
    #[prop(default = Signal::stored(0), into)] total_projects: Signal<u64>,
    #[prop(default = Signal::stored(0), into)] recent_projects: Signal<u64>,
    #[prop(default = Signal::stored(0), into)] pending_assignment: Signal<u64>,
    #[prop(default = Signal::stored(0), into)] in_evaluation: Signal<u64>,
) -> impl IntoView {
    let entries = Signal::derive(move || {
        WelcomeCounts {
            total_projects: total_projects.get(),
            recent_projects: recent_projects.get(),
            pending_assignment: pending_assignment.get(),
            in_evaluation: in_evaluation.get(),
        }
        .stat_entries()
    });

    view! {
        <section class="project-admin-welcome">
            <header class="project-admin-welcome__header">
                <h1>{WELCOME_TITLE}</h1>
                <p>{WELCOME_SUBTITLE}</p>
            </header>
            <StatsGrid entries/>
        </section>
    }
}
