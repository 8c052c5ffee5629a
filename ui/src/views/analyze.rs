use dioxus::prelude::*;

use crate::upload::FileUploadPanel;

#[component]
pub fn Analyze() -> Element {
    // Hidden marker keeps a reactive dependency on the global language signal.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-analyze",
            FileUploadPanel {}
        }
    }
}
