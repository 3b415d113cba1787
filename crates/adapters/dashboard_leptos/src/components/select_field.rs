//! Labeled select bound to owner state.

use evalboard_domain::field::{
    DEFAULT_SELECT_PLACEHOLDER, FieldError, SelectOptions, field_class, select_entries,
};
use evalboard_domain::icon::Icon;
use leptos::ev;
use leptos::prelude::*;

use super::IconView;

/// A labeled `<select>` listing a disabled placeholder followed by the
/// caller's options in the given order.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    /// Currently selected value; empty selects the placeholder.
    #[prop(into)]
    value: Signal<String>,
    /// Receives every native `change` event.
    #[prop(into)]
    on_change: Callback<ev::Event>,
    /// Choices, already checked for unique values.
    #[prop(into)]
    options: Signal<SelectOptions>,
    #[prop(default = DEFAULT_SELECT_PLACEHOLDER.into(), into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] icon: Option<Icon>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] on_focus: Option<Callback<ev::FocusEvent>>,
    #[prop(optional, into)] on_blur: Option<Callback<ev::FocusEvent>>,
) -> impl IntoView {
    let id = format!("field-{name}");
    let visible_error = Memo::new(move |_| FieldError::visible(error.get().as_deref()));

    let rendered_options = move || {
        let current = value.get();
        options
            .with(|options| select_entries(options, &placeholder, &current))
            .into_iter()
            .map(|entry| {
                view! {
                    <option value=entry.value disabled=entry.disabled selected=entry.selected>
                        {entry.label}
                    </option>
                }
            })
            .collect_view()
    };

    view! {
        <div class=move || field_class(visible_error.with(Option::is_some))>
            <label class="form-field__label" for=id.clone()>
                {icon.map(|icon| view! { <IconView icon/> })}
                {label}
                {required.then(|| view! { <span class="form-field__required">"*"</span> })}
            </label>
            <select
                id=id
                name=name
                class="form-field__control"
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(ev)
                on:focus=move |ev| {
                    if let Some(on_focus) = on_focus {
                        on_focus.run(ev);
                    }
                }
                on:blur=move |ev| {
                    if let Some(on_blur) = on_blur {
                        on_blur.run(ev);
                    }
                }
            >
                {rendered_options}
            </select>
            {move || {
                visible_error
                    .get()
                    .map(|err| view! { <span class="form-field__error">{err.to_string()}</span> })
            }}
        </div>
    }
}
