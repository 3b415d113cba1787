//! Project administration home page.
//!
//! Owns every piece of mutable state and threads it down to the widgets.

use evalboard_domain::button::{ButtonType, ButtonVariant};
use evalboard_domain::field::{SelectOption, SelectOptions};
use evalboard_domain::icon::Icon;
use evalboard_domain::time_filter::TimeFilter;
use evalboard_domain::welcome::WelcomeCounts;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::{Button, HeaderBar, InputField, SelectField, WelcomeSection};

const REQUIRED_MESSAGE: &str = "Campo requerido";

fn evaluator_options() -> SelectOptions {
    SelectOptions::new(vec![
        SelectOption::new("ana-perez", "Ana Pérez"),
        SelectOption::new("luis-gomez", "Luis Gómez"),
        SelectOption::new("maria-ruiz", "María Ruiz"),
    ])
    .unwrap_or_default()
}

/// Dashboard home: welcome stats, the reports header and an evaluator
/// assignment form.
///
/// Counts are read from the query string, e.g.
/// `/?total_projects=10&recent_projects=2`.
#[component]
pub fn Home() -> impl IntoView {
    let query = use_query_map();
    let counts = Memo::new(move |_| {
        query.with(|params| WelcomeCounts::from_raw(|key| params.get(key)))
    });

    let (search_term, set_search_term) = signal(String::new());
    let (time_filter, set_time_filter) = signal(TimeFilter::default());

    let (project_name, set_project_name) = signal(String::new());
    let (evaluator, set_evaluator) = signal(String::new());
    let (submitted, set_submitted) = signal(false);

    let required_error = move |value: ReadSignal<String>| {
        Signal::derive(move || {
            (submitted.get() && value.with(|v| v.trim().is_empty()))
                .then(|| REQUIRED_MESSAGE.to_string())
        })
    };
    let name_error = required_error(project_name);
    let evaluator_error = required_error(evaluator);

    let on_export = move |_: ev::MouseEvent| {
        leptos::logging::log!(
            "export requested: filter={} search={:?}",
            time_filter.get_untracked(),
            search_term.get_untracked()
        );
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(true);
    };

    view! {
        <div class="project-admin">
            <WelcomeSection
                total_projects=Signal::derive(move || counts.get().total_projects)
                recent_projects=Signal::derive(move || counts.get().recent_projects)
                pending_assignment=Signal::derive(move || counts.get().pending_assignment)
                in_evaluation=Signal::derive(move || counts.get().in_evaluation)
            />
            <HeaderBar
                title="Reportes"
                search_term=search_term
                set_search_term=move |term: String| set_search_term.set(term)
                time_filter=time_filter
                set_time_filter=move |filter: TimeFilter| set_time_filter.set(filter)
                on_export=on_export
            />
            <p class="reports-summary">
                {move || time_filter.get().label()}
                {move || {
                    let term = search_term.get();
                    (!term.is_empty()).then(|| format!(" \u{00B7} \u{201C}{term}\u{201D}"))
                }}
            </p>
            <form class="assignment-form" on:submit=on_submit>
                <InputField
                    label="Proyecto"
                    name="project"
                    icon=Icon::ProjectDiagram
                    required=true
                    value=project_name
                    on_change=move |ev: ev::Event| set_project_name.set(event_target_value(&ev))
                    error=name_error
                />
                <SelectField
                    label="Evaluador"
                    name="evaluator"
                    icon=Icon::User
                    required=true
                    value=evaluator
                    options=evaluator_options()
                    on_change=move |ev: ev::Event| set_evaluator.set(event_target_value(&ev))
                    error=evaluator_error
                />
                <Button button_type=ButtonType::Submit variant=ButtonVariant::Primary>
                    "Asignar"
                </Button>
                {move || {
                    if !submitted.get() || project_name.with(|name| name.trim().is_empty()) {
                        return None;
                    }
                    let chosen = evaluator.get();
                    evaluator_options().label_of(&chosen).map(|label| {
                        let text = format!("Asignado a {label}");
                        view! { <p class="assignment-form__confirmation">{text}</p> }
                    })
                }}
            </form>
        </div>
    }
}
