use dioxus::prelude::*;

/// A compact metric tile: a big value over a small label.
#[component]
pub fn StatCard(value: String, label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
