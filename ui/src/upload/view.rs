use std::sync::Arc;

use api::{UploadClient, UploadConfig, UploadFile};
use dioxus::html::FileEngine;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::analysis::{DataOverview, DatasetSummary, NullValueChart};
use crate::core::auth::use_auth;
use crate::core::session::TokenSource;
use crate::t;

use super::state::{display_name, SubmitOutcome, UploadPanelState, ValidationError};

const ACCEPTED_FORMATS: &str = ".csv, .xlsx";
const INPUT_ID: &str = "file-upload";

/// The picked file as the platform reported it. `key` is what `read_file` expects
/// (a full path on desktop), which may differ from the name shown to the user.
#[derive(Clone)]
struct PickedFile {
    engine: Arc<dyn FileEngine>,
    key: String,
}

#[component]
pub fn FileUploadPanel() -> Element {
    let mut panel = use_signal(UploadPanelState::default);
    let mut picked = use_signal(|| Option::<PickedFile>::None);
    let is_authenticated = use_auth();
    let config = try_use_context::<UploadConfig>().unwrap_or_default();
    let tokens = try_use_context::<TokenSource>().unwrap_or_else(TokenSource::platform_default);

    let on_change = move |evt: FormEvent| {
        let engine = evt.files();
        let first = engine
            .as_ref()
            .and_then(|files| files.files().into_iter().next());

        match (engine, first) {
            (Some(engine), Some(key)) => {
                let name = display_name(&key).to_string();
                debug!(file = %name, "dataset selected");
                picked.set(Some(PickedFile { engine, key }));
                panel.with_mut(|p| p.select_file(Some(name)));
            }
            _ => {
                picked.set(None);
                panel.with_mut(|p| p.select_file(None));
                // The empty file list has been handled; the picker can take input again.
                panel.with_mut(|p| p.release_picker());
            }
        }
    };

    let on_clear = move |_| {
        picked.set(None);
        panel.with_mut(|p| p.clear_selection());
    };

    let on_submit = move |_| {
        let ticket = match panel.with_mut(|p| p.begin_submit()) {
            Ok(ticket) => ticket,
            Err(rejection) => {
                debug!(?rejection, "submit refused");
                return;
            }
        };

        let file = picked();
        let client = UploadClient::new(config.clone());
        let token = tokens.current_token();

        spawn(async move {
            let outcome = run_upload(&client, file, &ticket.file_name, token).await;
            panel.with_mut(|p| p.finish_submit(ticket.attempt, outcome));
        });
    };

    let state = panel();
    let submit_disabled = state.submit_disabled(is_authenticated);
    let loading = state.is_loading();
    let picker_locked = state.picker_locked();
    let generation = state.input_generation();
    let file_name = state.file_name().map(str::to_string);
    let error_text = state.validation_error().map(|err| match err {
        ValidationError::NoFileSelected => t!("upload-error-no-file"),
        ValidationError::Server(message) => message.clone(),
    });
    let failure_text = state
        .failure()
        .map(|detail| t!("upload-error-failed", detail = detail));
    let result = state.result().filter(|_| state.is_success()).cloned();

    let remove_label = t!("upload-remove-file");
    let loading_label = t!("upload-loading-short");
    let submit_class = if submit_disabled {
        "button button--primary upload__submit upload__submit--disabled"
    } else {
        "button button--primary upload__submit"
    };

    rsx! {
        section { class: "upload",
            div { class: "upload__card",
                h2 { class: "upload__title", {t!("upload-title")} }
                p { class: "upload__formats", {t!("upload-accepted-formats")} }

                div { class: "upload__picker",
                    label { r#for: INPUT_ID, class: "upload__dropzone",
                        span { class: "upload__icon", aria_hidden: "true", "☁" }
                        if let Some(name) = file_name {
                            span { class: "upload__file-name", "{name}" }
                            button {
                                r#type: "button",
                                class: "upload__remove",
                                aria_label: "{remove_label}",
                                title: "{remove_label}",
                                onclick: on_clear,
                                "🗑"
                            }
                        } else {
                            span { class: "upload__browse", {t!("upload-browse")} }
                        }
                    }
                    PickerSlot {
                        generation,
                        locked: picker_locked,
                        onchange: on_change,
                        onready: move |_| panel.with_mut(|p| p.release_picker()),
                    }
                }

                if let Some(message) = error_text {
                    p { class: "upload__error", role: "alert", "{message}" }
                }
                if let Some(message) = failure_text {
                    p { class: "upload__error upload__error--failure", role: "alert", "{message}" }
                }

                button {
                    r#type: "button",
                    class: submit_class,
                    disabled: submit_disabled,
                    onclick: on_submit,
                    if loading {
                        span { class: "upload__spinner", role: "status", aria_label: "{loading_label}" }
                    } else {
                        {t!("upload-submit")}
                    }
                }
            }

            div { class: "upload__results",
                if loading {
                    div { class: "upload__loading",
                        div { class: "upload__dots", aria_hidden: "true",
                            span {}
                            span {}
                            span {}
                        }
                        p { {t!("upload-loading")} }
                    }
                }

                if let Some(result) = result {
                    DatasetSummary { total_rows: result.total_rows, total_cols: result.total_cols }
                    NullValueChart {
                        data: result.missing_value_counts.clone(),
                        labels: result.column_names.clone(),
                    }
                    DataOverview { result: result.result_text.clone() }
                }
            }
        }
    }
}

/// The native file input. A new `generation` replaces the element with a fresh
/// one, which empties its value; `onready` fires once the replacement is mounted.
#[component]
fn PickerSlot(
    generation: u64,
    locked: bool,
    onchange: EventHandler<FormEvent>,
    onready: EventHandler<()>,
) -> Element {
    rsx! {
        // Single-item keyed list: a changed key fails the keyed diff and forces a remount.
        for generation in std::iter::once(generation) {
            input {
                key: "{generation}",
                id: INPUT_ID,
                class: "visually-hidden",
                r#type: "file",
                accept: ACCEPTED_FORMATS,
                disabled: locked,
                onchange: move |evt| onchange.call(evt),
                onmounted: move |_| onready.call(()),
            }
        }
    }
}

async fn run_upload(
    client: &UploadClient,
    file: Option<PickedFile>,
    name: &str,
    token: Option<String>,
) -> SubmitOutcome {
    let Some(file) = file else {
        warn!(file = %name, "no file handle for the current selection");
        return SubmitOutcome::Failed(t!("upload-error-unreadable", name = name));
    };

    match file.engine.read_file(&file.key).await {
        Some(bytes) => client
            .upload(UploadFile::new(name, bytes), token.as_deref())
            .await
            .into(),
        None => {
            warn!(file = %name, "could not read selected file");
            SubmitOutcome::Failed(t!("upload-error-unreadable", name = name))
        }
    }
}
