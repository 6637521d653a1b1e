use dioxus::prelude::*;

use ui::{AuthProvider, ErrorBanner, FlashBox};
use views::{
    AuthGuard, Dashboard, Login, PageNotFound, ProjectCreate, ProjectList, ProjectPage, Root,
    TaskCreate,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/")]
    Root {},
    #[layout(AuthGuard)]
        #[layout(Dashboard)]
            #[route("/projects?:page")]
            ProjectList { page: u32 },
            #[route("/projects/create")]
            ProjectCreate {},
            #[route("/projects/:id")]
            ProjectPage { id: u64 },
            #[route("/projects/:project_id/tasks/create")]
            TaskCreate { project_id: u64 },
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    /// First page of the project list.
    pub fn projects() -> Self {
        Route::ProjectList { page: 1 }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.14/dist/full.min.css";
const TAILWIND_JS: &str = "https://cdn.tailwindcss.com";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // make_backend runs once, so the branch below is stable across renders.
    let backend = use_hook(ui::make_backend);
    use_context_provider(FlashBox::default);

    let body = match backend {
        Ok(backend) => {
            use_context_provider(move || backend);
            rsx! {
                AuthProvider {
                    Router::<Route> {}
                }
            }
        }
        Err(e) => {
            tracing::error!("invalid API configuration: {e}");
            rsx! {
                div {
                    class: "p-8",
                    ErrorBanner { message: "Configuração da API inválida." }
                }
            }
        }
    };

    rsx! {
        // Global app resources
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        document::Stylesheet { href: MAIN_CSS }

        {body}
    }
}
