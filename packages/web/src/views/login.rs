//! Login page view.

use api::Credentials;
use dioxus::prelude::*;
use ui::{use_backend, use_session, use_session_store};

use crate::Route;

const LOGIN_FAILED: &str = "Falha no login. Verifique suas credenciais.";

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let store = use_session_store();
    let backend = use_backend();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);
    let mut pending = use_signal(|| false);

    // If already logged in, go straight to the projects
    use_effect(move || {
        let current = session();
        if !current.loading && current.is_authenticated() {
            nav.replace(Route::projects());
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        let backend = backend.clone();
        async move {
            pending.set(true);
            error.set(None);
            let credentials = Credentials::new(email(), password());
            let result = store.sign_in(&backend, &credentials).await;
            pending.set(false);
            match result {
                Ok(_) => {
                    nav.push(Route::Root {});
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    error.set(Some(LOGIN_FAILED));
                }
            }
        }
    };

    rsx! {
        div {
            class: "hero min-h-screen bg-base-200",
            div {
                class: "hero-content flex-col lg:flex-row lg:gap-24",
                div {
                    class: "text-center lg:text-left",
                    h1 { class: "text-5xl font-bold", "Plan Marketing Project Manager" }
                    p {
                        class: "py-6",
                        "Faça o login para gerenciar seus projetos de marketing de forma eficiente e organizada."
                    }
                }
                div {
                    class: "card bg-base-100 w-full max-w-sm shrink-0 shadow-2xl p-4",
                    form {
                        class: "card-body",
                        onsubmit: onsubmit,
                        if let Some(message) = error() {
                            div { class: "alert alert-error", "{message}" }
                        }
                        div {
                            class: "form-control",
                            label { class: "label", span { class: "label-text", "Email" } }
                            input {
                                r#type: "email",
                                placeholder: "email",
                                class: "input input-bordered w-full",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                                required: true,
                            }
                        }
                        div {
                            class: "form-control",
                            label { class: "label", span { class: "label-text", "Senha" } }
                            input {
                                r#type: "password",
                                placeholder: "senha",
                                class: "input input-bordered w-full",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                                required: true,
                            }
                        }
                        div {
                            class: "form-control mt-6",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: pending(),
                                if pending() {
                                    span { class: "loading loading-spinner" }
                                } else {
                                    "Entrar"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
