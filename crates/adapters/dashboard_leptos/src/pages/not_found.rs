use leptos::prelude::*;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Página no encontrada"</h1>
            <p>"La página que busca no existe."</p>
            <p>
                <a href="/">"Volver al inicio"</a>
            </p>
        </div>
    }
}
