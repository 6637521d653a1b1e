use api::PaginationLink;
use dioxus::prelude::*;

/// Display text for a server pagination link: HTML arrows decoded and the
/// English labels translated.
pub fn link_label(label: &str) -> String {
    let label = label.replace("&laquo;", "«").replace("&raquo;", "»");
    if label.contains("Previous") {
        label.replace("Previous", "Anterior")
    } else if label.contains("Next") {
        label.replace("Next", "Próximo")
    } else {
        label
    }
}

/// Button row for a Laravel `links` array. Links without a URL are disabled.
#[component]
pub fn Pagination(links: Vec<PaginationLink>, on_page: EventHandler<u32>) -> Element {
    rsx! {
        div {
            class: "join",
            for (index, link) in links.into_iter().enumerate() {
                button {
                    key: "{index}",
                    class: if link.active { "join-item btn btn-active" } else { "join-item btn" },
                    disabled: link.url.is_none(),
                    onclick: {
                        let target = link.page();
                        move |_| {
                            if let Some(page) = target {
                                on_page.call(page);
                            }
                        }
                    },
                    "{link_label(&link.label)}"
                }
            }
        }
    }
}
