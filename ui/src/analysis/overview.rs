use dioxus::prelude::*;

use crate::t;

/// Backend-authored summary text, rendered as-is.
#[component]
pub fn DataOverview(result: String) -> Element {
    rsx! {
        section { class: "results-card overview",
            div { class: "results-card__header",
                h2 { {t!("overview-title")} }
            }
            if result.trim().is_empty() {
                p { class: "results-card__placeholder", {t!("overview-empty")} }
            } else {
                div { class: "overview__body", "{result}" }
            }
        }
    }
}
