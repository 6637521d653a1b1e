//! Small presentational components shared by the views.

use api::Difficulty;
use dioxus::prelude::*;

use crate::format::format_percent;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center h-full",
            span { class: "loading loading-spinner loading-lg" }
        }
    }
}

/// Spinner covering the viewport, shown while the session probe runs.
#[component]
pub fn FullScreenSpinner() -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center h-screen",
            span { class: "loading loading-spinner loading-lg" }
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert", "{message}" }
    }
}

/// Badge for a raw difficulty code; unknown codes render as `N/A`.
#[component]
pub fn DifficultyBadge(raw: i64) -> Element {
    let (label, class) = match Difficulty::from_raw(raw) {
        Some(difficulty) => (difficulty.label(), difficulty.badge_class()),
        None => ("N/A", "badge-ghost"),
    };
    rsx! {
        span { class: "badge {class}", "{label}" }
    }
}

#[component]
pub fn ProgressBar(
    progress: f64,
    #[props(default = "w-56".to_string())] class: String,
    #[props(default = true)] show_value: bool,
) -> Element {
    rsx! {
        progress {
            class: "progress progress-primary {class}",
            value: "{progress}",
            max: "100",
        }
        if show_value {
            span { class: "ml-2 text-sm", "{format_percent(progress)}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_difficulty_badges() {
        fn app() -> Element {
            rsx! {
                DifficultyBadge { raw: 1 }
                DifficultyBadge { raw: 2 }
                DifficultyBadge { raw: 3 }
                DifficultyBadge { raw: 7 }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"class="badge badge-success">Baixa"#));
        assert!(html.contains(r#"class="badge badge-warning">Média"#));
        assert!(html.contains(r#"class="badge badge-error">Alta"#));
        assert!(html.contains(r#"class="badge badge-ghost">N/A"#));
    }

    #[test]
    fn test_error_banner() {
        fn app() -> Element {
            rsx! { ErrorBanner { message: "Falha ao buscar projetos." } }
        }
        let html = render(app);
        assert!(html.contains("alert-error"));
        assert!(html.contains("Falha ao buscar projetos."));
    }

    #[test]
    fn test_progress_bar_value() {
        fn app() -> Element {
            rsx! { ProgressBar { progress: 33.333 } }
        }
        let html = render(app);
        assert!(html.contains("33.33%"));
        assert!(html.contains(r#"max="100""#));
    }
}
