use api::NewProject;
use dioxus::prelude::*;
use ui::{create_project, use_backend, use_flash, use_view_lifetime, FormState};

use crate::Route;

#[component]
pub fn ProjectCreate() -> Element {
    let backend = use_backend();
    let lifetime = use_view_lifetime();
    let flash = use_flash();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut state = use_signal(FormState::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let lifetime = lifetime.clone();
        let flash = flash.clone();
        async move {
            state.write().begin();
            let request = NewProject { name: name() };
            let Some(result) = lifetime.guard(create_project(&backend, &flash, &request)).await
            else {
                return;
            };
            state.write().finish(&result);
            if result.is_ok() {
                nav.push(Route::projects());
            }
        }
    };
    let FormState { pending, error } = state();

    rsx! {
        div {
            h1 { class: "text-4xl font-bold mb-6", "Criar Novo Projeto" }

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
                            label { class: "label", span { class: "label-text", "Nome do Projeto" } }
                            input {
                                r#type: "text",
                                placeholder: "Digite o nome do projeto",
                                class: "input input-bordered w-full",
                                value: "{name}",
                                oninput: move |evt| name.set(evt.value()),
                                required: true,
                            }
                        }
                        div {
                            class: "card-actions justify-end mt-6",
                            button {
                                r#type: "button",
                                class: "btn btn-ghost",
                                onclick: move |_| {
                                    nav.push(Route::projects());
                                },
                                "Cancelar"
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: pending,
                                if pending {
                                    span { class: "loading loading-spinner" }
                                } else {
                                    "Criar Projeto"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
