//! Button with variant styling and a loading state.

use evalboard_domain::button::{
    ButtonSize, ButtonStyle, ButtonType, ButtonVariant, LOADING_TEXT, is_inert,
};
use evalboard_domain::icon::Icon;
use leptos::ev;
use leptos::prelude::*;

use super::IconView;

/// A styled `<button>`.
///
/// While `loading` is set the button is disabled and shows a spinner in
/// place of its children.
#[component]
pub fn Button(
    children: ChildrenFn,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Leading icon, hidden while loading.
    #[prop(optional)]
    icon: Option<Icon>,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
) -> impl IntoView {
    let style = ButtonStyle {
        variant,
        size,
        full_width,
    };

    let content = move || {
        if loading.get() {
            view! {
                <IconView icon=Icon::Spinner/>
                <span>{LOADING_TEXT}</span>
            }
            .into_any()
        } else {
            view! {
                {icon.map(|icon| view! { <IconView icon/> })}
                {children()}
            }
            .into_any()
        }
    };

    view! {
        <button
            type=button_type.as_str()
            class=move || style.class(loading.get())
            disabled=move || is_inert(disabled.get(), loading.get())
            aria-busy=move || loading.get().to_string()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {content}
        </button>
    }
}
