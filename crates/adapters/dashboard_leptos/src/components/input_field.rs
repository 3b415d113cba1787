//! Labeled text input bound to owner state.

use evalboard_domain::field::{FieldError, InputKind, field_class};
use evalboard_domain::icon::Icon;
use leptos::ev;
use leptos::prelude::*;

use super::IconView;

/// A labeled `<input>` whose value and validation message belong to the owner.
///
/// Native `input`, `focus` and `blur` events are forwarded unmodified; the
/// widget keeps no state of its own.
#[component]
pub fn InputField(
    /// Text of the `<label>`.
    #[prop(into)]
    label: String,
    /// Form name; also used to derive the element id.
    #[prop(into)]
    name: String,
    /// Current value, owned by the caller.
    #[prop(into)]
    value: Signal<String>,
    /// Receives every native `input` event.
    #[prop(into)]
    on_change: Callback<ev::Event>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] kind: InputKind,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] icon: Option<Icon>,
    /// Validation message; blank messages are not shown.
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)] on_focus: Option<Callback<ev::FocusEvent>>,
    #[prop(optional, into)] on_blur: Option<Callback<ev::FocusEvent>>,
) -> impl IntoView {
    let id = format!("field-{name}");
    let visible_error = Memo::new(move |_| FieldError::visible(error.get().as_deref()));

    view! {
        <div class=move || field_class(visible_error.with(Option::is_some))>
            <label class="form-field__label" for=id.clone()>
                {icon.map(|icon| view! { <IconView icon/> })}
                {label}
                {required.then(|| view! { <span class="form-field__required">"*"</span> })}
            </label>
            <input
                id=id
                name=name
                type=kind.as_str()
                class="form-field__control"
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(ev)
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
            />
            {move || {
                visible_error
                    .get()
                    .map(|err| view! { <span class="form-field__error">{err.to_string()}</span> })
            }}
        </div>
    }
}
