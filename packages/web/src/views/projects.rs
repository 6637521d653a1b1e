use dioxus::prelude::*;
use ui::{
    format_datetime, use_flash_toast, use_project_list, AppBackend, ErrorBanner, Fetch,
    Pagination, ProgressBar, Spinner, ToastView,
};

use crate::Route;

const LIST_FAILED: &str = "Falha ao buscar projetos.";

/// Paginated project table. `page` comes from the `?page=` query; missing or
/// `0` means the first page.
#[component]
pub fn ProjectList(page: u32) -> Element {
    let nav = use_navigator();
    let toast = use_flash_toast();
    let projects = use_project_list::<AppBackend>(page.max(1));

    let content = match &*projects.read() {
        Fetch::Loading => rsx! { Spinner {} },
        Fetch::Failed => rsx! { ErrorBanner { message: LIST_FAILED } },
        Fetch::Ready(listing) => {
            let rows = listing.data.clone();
            let links = listing.links.clone();
            rsx! {
                h1 { class: "text-2xl font-bold mb-4", "Projetos" }
                div {
                    class: "flex justify-end mb-4",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            nav.push(Route::ProjectCreate {});
                        },
                        "Criar Novo Projeto"
                    }
                }

                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table w-full",
                        thead {
                            tr {
                                th { "Nome" }
                                th { "Progresso" }
                                th { "Criado" }
                                th { "Atualizado" }
                            }
                        }
                        tbody {
                            for project in rows {
                                tr {
                                    key: "{project.id}",
                                    class: "cursor-pointer hover:bg-base-300",
                                    onclick: move |_| {
                                        nav.push(Route::ProjectPage { id: project.id });
                                    },
                                    td { "{project.name}" }
                                    td { ProgressBar { progress: project.progress } }
                                    td { "{format_datetime(&project.created_at)}" }
                                    td { "{format_datetime(&project.updated_at)}" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "flex justify-end mt-8",
                    Pagination {
                        links,
                        on_page: move |page| {
                            nav.push(Route::ProjectList { page });
                        },
                    }
                }
            }
        }
    };

    rsx! {
        ToastView { toast }
        div { {content} }
    }
}
