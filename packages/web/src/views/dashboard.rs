use dioxus::prelude::*;

use ui::{use_session, LogoutButton};

use crate::Route;

const DRAWER_ID: &str = "dashboard-drawer";

/// Sidebar shell around the project pages.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let user = session().user;

    rsx! {
        div {
            class: "drawer lg:drawer-open",
            input { id: DRAWER_ID, r#type: "checkbox", class: "drawer-toggle" }

            div {
                class: "drawer-content flex flex-col",
                div {
                    class: "navbar bg-base-100 lg:hidden",
                    div {
                        class: "flex-none",
                        label {
                            r#for: DRAWER_ID,
                            aria_label: "abrir menu",
                            class: "btn btn-square btn-ghost",
                            "☰"
                        }
                    }
                    div {
                        class: "flex-1",
                        span { class: "btn btn-ghost text-xl", "Plan Marketing" }
                    }
                }
                div {
                    class: "flex-1 p-8 bg-base-200",
                    Outlet::<Route> {}
                }
            }

            div {
                class: "drawer-side",
                label { r#for: DRAWER_ID, aria_label: "fechar menu", class: "drawer-overlay" }
                ul {
                    class: "menu bg-base-100 text-base-content min-h-full w-80 p-4",
                    li { class: "text-2xl font-bold p-4", "Plan Marketing" }
                    li {
                        Link { to: Route::projects(), "Projetos" }
                    }
                    div {
                        class: "mt-auto",
                        if let Some(user) = user {
                            div {
                                class: "p-4",
                                p { class: "font-bold", "{user.name}" }
                                p { class: "text-sm text-gray-500", "{user.email}" }
                            }
                        }
                        LogoutButton {
                            class: "btn btn-outline w-full",
                            on_logged_out: move |_| {
                                nav.push(Route::Login {});
                            },
                        }
                    }
                }
            }
        }
    }
}
