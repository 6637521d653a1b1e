use dioxus::prelude::*;

use crate::Route;

/// Redirect `/` to `/projects`
#[component]
pub fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::projects());
    rsx! {}
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route");
    rsx! {
        div {
            class: "hero min-h-screen bg-base-200",
            div {
                class: "hero-content text-center flex-col",
                h1 { class: "text-4xl font-bold", "Página não encontrada" }
                Link { class: "link link-primary", to: Route::projects(), "Voltar para os projetos" }
            }
        }
    }
}
