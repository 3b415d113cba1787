//! Reports header bar: title, search, period filter and export.

use evalboard_domain::button::ButtonVariant;
use evalboard_domain::field::InputKind;
use evalboard_domain::icon::Icon;
use evalboard_domain::time_filter::TimeFilter;
use leptos::ev;
use leptos::prelude::*;

use super::{Button, InputField, SelectField};

/// Header of the reports view.
///
/// Search and filter changes are reported as derived values; the owner
/// holds both.
#[component]
pub fn HeaderBar(
    #[prop(into)] title: String,
    #[prop(into)] search_term: Signal<String>,
    /// Receives the search box's current text on every keystroke.
    #[prop(into)]
    set_search_term: Callback<String>,
    #[prop(into)] time_filter: Signal<TimeFilter>,
    /// Receives the chosen period. Unknown values are ignored.
    #[prop(into)]
    set_time_filter: Callback<TimeFilter>,
    #[prop(into)] on_export: Callback<ev::MouseEvent>,
    /// Shows the export button in its loading state.
    #[prop(optional, into)]
    exporting: Signal<bool>,
) -> impl IntoView {
    let on_search = move |ev: ev::Event| set_search_term.run(event_target_value(&ev));
    let on_filter = move |ev: ev::Event| {
        if let Ok(filter) = event_target_value(&ev).parse::<TimeFilter>() {
            set_time_filter.run(filter);
        }
    };
    let filter_value = Signal::derive(move || time_filter.get().as_str().to_string());

    view! {
        <header class="reports-header">
            <h2 class="reports-header__title">{title}</h2>
            <div class="reports-header__controls">
                <InputField
                    label="Buscar"
                    name="search"
                    kind=InputKind::Search
                    icon=Icon::Search
                    placeholder="Buscar proyectos\u{2026}"
                    value=search_term
                    on_change=on_search
                />
                <SelectField
                    label="Período"
                    name="time-filter"
                    icon=Icon::Calendar
                    value=filter_value
                    options=TimeFilter::options()
                    placeholder=TimeFilter::PLACEHOLDER
                    on_change=on_filter
                />
                <Button
                    variant=ButtonVariant::Secondary
                    icon=Icon::Download
                    loading=exporting
                    on_click=on_export
                >
                    "Exportar"
                </Button>
            </div>
        </header>
    }
}
