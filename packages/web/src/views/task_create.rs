use api::{Difficulty, NewTask, ProjectId};
use dioxus::prelude::*;
use ui::{create_task, use_backend, use_flash, use_view_lifetime, FormState};

use crate::Route;

#[component]
pub fn TaskCreate(project_id: ProjectId) -> Element {
    let backend = use_backend();
    let lifetime = use_view_lifetime();
    let flash = use_flash();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut difficulty = use_signal(Difficulty::default);
    let mut state = use_signal(FormState::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let lifetime = lifetime.clone();
        let flash = flash.clone();
        async move {
            state.write().begin();
            let request = NewTask {
                title: title(),
                difficulty: difficulty(),
                project_id,
            };
            let Some(result) = lifetime.guard(create_task(&backend, &flash, &request)).await
            else {
                return;
            };
            state.write().finish(&result);
            if result.is_ok() {
                nav.push(Route::ProjectPage { id: project_id });
            }
        }
    };
    let FormState { pending, error } = state();

    rsx! {
        div {
            div {
                class: "mb-6",
                Link {
                    class: "link link-hover text-sm mb-2",
                    to: Route::ProjectPage { id: project_id },
                    "← Voltar para o projeto"
                }
                h1 { class: "text-4xl font-bold", "Criar Nova Tarefa" }
            }

            div {
                class: "card bg-base-100 shadow-xl max-w-lg",
                div {
                    class: "card-body",
                    if let Some(message) = error {
                        div { class: "alert alert-error mb-4", "{message}" }
                    }
                    form {
                        onsubmit: onsubmit,
                        div {
                            class: "form-control",
                            label { class: "label", span { class: "label-text", "Título da Tarefa" } }
                            input {
                                r#type: "text",
                                placeholder: "Digite o título da tarefa",
                                class: "input input-bordered w-full",
                                value: "{title}",
                                oninput: move |evt| title.set(evt.value()),
                                required: true,
                            }
                        }
                        div {
                            class: "form-control mt-4",
                            label { class: "label", span { class: "label-text", "Dificuldade" } }
                            select {
                                class: "select select-bordered w-full",
                                value: "{difficulty().value()}",
                                onchange: move |evt| match evt.value().parse::<Difficulty>() {
                                    Ok(choice) => difficulty.set(choice),
                                    Err(e) => tracing::warn!("ignoring difficulty: {e}"),
                                },
                                for choice in Difficulty::ALL {
                                    option {
                                        value: "{choice.value()}",
                                        selected: choice == difficulty(),
                                        "{choice.label()}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "form-control mt-6",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: pending,
                                if pending {
                                    span { class: "loading loading-spinner" }
                                } else {
                                    "Criar Tarefa"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
