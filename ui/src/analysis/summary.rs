use dioxus::prelude::*;

use crate::core::format;
use crate::t;

#[component]
pub fn DatasetSummary(total_rows: u64, total_cols: u64) -> Element {
    rsx! {
        div { class: "results-highlights dataset-summary",
            div { class: "results-highlight",
                span { class: "results-highlight__label", {t!("summary-total-rows")} }
                strong { class: "results-highlight__value", "{format::format_count(total_rows)}" }
            }
            div { class: "results-highlight",
                span { class: "results-highlight__label", {t!("summary-total-columns")} }
                strong { class: "results-highlight__value", "{format::format_count(total_cols)}" }
            }
        }
    }
}
