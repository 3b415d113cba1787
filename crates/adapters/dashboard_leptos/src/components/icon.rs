use evalboard_domain::icon::Icon;
use leptos::prelude::*;

/// A Font Awesome glyph. Decorative only, hidden from assistive technology.
#[component]
pub fn IconView(icon: Icon) -> impl IntoView {
    view! {
        <i class=icon.css_class() aria-hidden="true"></i>
    }
}
