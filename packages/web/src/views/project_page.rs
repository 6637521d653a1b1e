use api::{ApiError, Backend, ProjectDetail, ProjectId, TaskId};
use dioxus::prelude::*;
use ui::{
    format_percent, toggle_task, use_backend, use_flash_toast, use_view_lifetime,
    DifficultyBadge, ErrorBanner, Spinner, TaskPager, Toast, ToastView, ToggleOutcome,
};

use crate::Route;

const DETAIL_FAILED: &str = "Falha ao buscar detalhes do projeto.";
const NOT_FOUND: &str = "Projeto não encontrado.";
const TOGGLE_OK: &str = "Status da tarefa atualizado!";
const TOGGLE_FAILED: &str = "Falha ao atualizar a tarefa.";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Load {
    Loading,
    Ready,
    Failed,
}

/// Project header, progress stats and the paged task table with toggles.
#[component]
pub fn ProjectPage(id: ProjectId) -> Element {
    let backend = use_backend();
    let lifetime = use_view_lifetime();
    let mut detail: Signal<Option<ProjectDetail>> = use_signal(|| None);
    let mut load = use_signal(|| Load::Loading);
    let mut pager = use_signal(TaskPager::default);
    let mut toast = use_flash_toast();

    let loader_backend = backend.clone();
    let loader_lifetime = lifetime.clone();
    let _loader = use_resource(use_reactive!(|(id,)| {
        let backend = loader_backend.clone();
        let lifetime = loader_lifetime.clone();
        async move {
            load.set(Load::Loading);
            let Some(result) = lifetime.guard(backend.project(id)).await else {
                return;
            };
            match result {
                Ok(fresh) => {
                    detail.set(Some(fresh));
                    load.set(Load::Ready);
                }
                Err(ApiError::NotFound) => {
                    tracing::warn!(id, "project not found");
                    detail.set(None);
                    load.set(Load::Ready);
                }
                Err(e) => {
                    tracing::error!(id, "loading project failed: {e}");
                    load.set(Load::Failed);
                }
            }
        }
    }));

    let on_toggle = use_callback({
        let backend = backend.clone();
        let lifetime = lifetime.clone();
        move |task_id: TaskId| {
            let backend = backend.clone();
            let lifetime = lifetime.clone();
            spawn(async move {
                let Some(outcome) = lifetime.guard(toggle_task(&backend, &detail, task_id)).await
                else {
                    return;
                };
                match outcome {
                    ToggleOutcome::Skipped => {}
                    ToggleOutcome::Confirmed { refresh } => {
                        toast.set(Some(Toast::success(TOGGLE_OK)));
                        if refresh.is_err() {
                            load.set(Load::Failed);
                        }
                    }
                    ToggleOutcome::RolledBack(_) => {
                        toast.set(Some(Toast::error(TOGGLE_FAILED)));
                    }
                }
            });
        }
    });

    let content = match (load(), detail()) {
        (Load::Loading, _) => rsx! { Spinner {} },
        (Load::Failed, _) => rsx! { ErrorBanner { message: DETAIL_FAILED } },
        (Load::Ready, None) => rsx! { ErrorBanner { message: NOT_FOUND } },
        (Load::Ready, Some(project)) => {
            let total = project.tasks.len();
            let completed = project.completed_tasks();
            let completed_desc = match project.completed_percent() {
                Some(percent) => format!("{percent}% das tarefas"),
                None => "Nenhuma tarefa".to_string(),
            };
            let current = pager();
            let page = current.current(total);
            let has_prev = current.has_prev(total);
            let has_next = current.has_next(total);
            let pages: Vec<usize> = current.pages(total).collect();
            let visible = current.slice(&project.tasks).to_vec();
            let progress = project.project.progress;

            rsx! {
                div {
                    class: "mb-6",
                    Link {
                        class: "link link-hover text-sm mb-2",
                        to: Route::projects(),
                        "← Voltar para todos os projetos"
                    }
                    h1 { class: "text-4xl font-bold", "{project.project.name}" }
                }

                div {
                    class: "stats shadow w-full mb-8",
                    div {
                        class: "stat",
                        div { class: "stat-title", "Progresso do Projeto" }
                        div { class: "stat-value", "{format_percent(progress)}" }
                        div {
                            class: "stat-desc",
                            progress {
                                class: "progress progress-primary w-full",
                                value: "{progress}",
                                max: "100",
                            }
                        }
                    }
                    div {
                        class: "stat flex flex-col items-end",
                        div { class: "stat-title", "Tarefas Concluídas" }
                        div { class: "stat-value", "{completed} / {total}" }
                        div { class: "stat-desc", "{completed_desc}" }
                    }
                }

                div {
                    class: "flex justify-between items-center mb-4",
                    h2 { class: "text-2xl font-bold", "Tarefas" }
                    Link {
                        class: "btn btn-primary",
                        to: Route::TaskCreate { project_id: id },
                        "Criar Nova Tarefa"
                    }
                }

                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table w-full",
                        thead {
                            tr {
                                th { class: "w-12", "Status" }
                                th { "Título" }
                                th { class: "w-32", "Dificuldade" }
                            }
                        }
                        tbody {
                            for task in visible {
                                tr {
                                    key: "{task.id}",
                                    td {
                                        input {
                                            r#type: "checkbox",
                                            checked: task.completed,
                                            class: if task.completed { "toggle toggle-success" } else { "toggle toggle-error" },
                                            onchange: move |_| on_toggle.call(task.id),
                                        }
                                    }
                                    td { "{task.title}" }
                                    td { DifficultyBadge { raw: task.difficulty } }
                                }
                            }
                            if total == 0 {
                                tr {
                                    td {
                                        colspan: "3",
                                        class: "text-center",
                                        "Nenhuma tarefa encontrada para este projeto."
                                    }
                                }
                            }
                        }
                    }
                }

                if pages.len() > 1 {
                    div {
                        class: "flex justify-end mt-8",
                        div {
                            class: "join",
                            button {
                                class: "join-item btn",
                                disabled: !has_prev,
                                onclick: move |_| pager.write().go_to(page - 1),
                                "«"
                            }
                            for n in pages {
                                button {
                                    key: "{n}",
                                    class: if n == page { "join-item btn btn-active" } else { "join-item btn" },
                                    onclick: move |_| pager.write().go_to(n),
                                    "{n}"
                                }
                            }
                            button {
                                class: "join-item btn",
                                disabled: !has_next,
                                onclick: move |_| pager.write().go_to(page + 1),
                                "»"
                            }
                        }
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
