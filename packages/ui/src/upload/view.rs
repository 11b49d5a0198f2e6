use std::time::Duration;

use api::{ApiClient, UploadFile};
use dioxus::prelude::*;
use store::ClientConfig;

use super::pipeline::{FileKind, UploadTask};
use super::preview;
use crate::auth::use_session;
use crate::phase_timer::{sleep, use_timer_handle, TimerHandle};
use crate::summary::UploadResultView;

const ACCEPTED_MEDIA: &str = "video/*,audio/*";

/// Pick a lecture recording, upload it, and show the generated summary inline.
///
/// Requires a [`ClientConfig`] and an [`ApiClient`] in context.
#[component]
pub fn UploaderView(on_open_summary: EventHandler<i64>) -> Element {
    let session = use_session();
    let base_api = use_context::<ApiClient>();
    let config = use_context::<ClientConfig>();
    let mut task = use_signal(UploadTask::default);
    let timer = use_timer_handle();

    use_drop(move || {
        if let Some(url) = task.peek().preview_url() {
            preview::revoke(url);
        }
    });

    let on_file = move |file: UploadFile| {
        let url = preview::create(&file);
        let stale = task.write().select(file, url);
        if let Some(stale) = stale {
            preview::revoke(&stale);
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let token = session.peek().token().map(str::to_string);
        let client = base_api.with_token(token.as_deref());
        submit_upload(task, &timer, client, config.summarizing_delay());
    };

    let on_upload_another = move |_| {
        let stale = task.write().reset();
        if let Some(stale) = stale {
            preview::revoke(&stale);
        }
    };

    let (phase, kind, file_name, preview_url, error, result) = {
        let state = task.read();
        (
            state.phase(),
            state.kind(),
            state.selected().map(|f| f.name.clone()),
            state.preview_url().map(str::to_string),
            state.error().map(str::to_string),
            state.result().cloned(),
        )
    };

    rsx! {
        div { class: "container uploader",
            if let Some(result) = result {
                UploadResultView {
                    result,
                    on_open_summary,
                    on_upload_another,
                }
            } else {
                form { class: "card uploader-card", onsubmit: on_submit,
                    h2 { "Upload a lecture" }
                    if let Some(label) = phase.label() {
                        UploadStatus { label }
                    } else {
                        if let Some(error) = error {
                            div { class: "alert alert-danger", "{error}" }
                        }
                        FilePicker { file_name, kind, preview_url, on_file }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: phase.is_in_flight(),
                            "Upload"
                        }
                    }
                }
            }
        }
    }
}

/// Dispatch the selected file and settle `task` with the outcome.
///
/// Arms the label timer for `delay` and cancels it once the request settles.
/// Returns `false` when nothing was sent (no selection, or already in flight).
fn submit_upload(
    mut task: Signal<UploadTask>,
    timer: &TimerHandle,
    client: ApiClient,
    delay: Duration,
) -> bool {
    let begun = task.write().begin();
    let Some((file, ticket)) = begun else {
        return false;
    };
    tracing::info!(name = %file.name, size = file.size(), "uploading media");

    timer.replace(spawn(async move {
        sleep(delay).await;
        task.write().timer_elapsed(ticket);
    }));

    let timer = timer.clone();
    spawn(async move {
        let outcome = client.upload(file).await;
        timer.cancel();
        match outcome {
            Ok(result) => {
                let stale = task.write().resolve(result);
                if let Some(stale) = stale {
                    preview::revoke(&stale);
                }
            }
            Err(err) => {
                tracing::error!("upload failed: {err}");
                task.write().fail(err.to_string());
            }
        }
    });
    true
}

#[component]
fn UploadStatus(label: &'static str) -> Element {
    rsx! {
        div { class: "upload-status",
            div { class: "spinner" }
            p { class: "upload-label", "{label}" }
        }
    }
}

#[component]
fn FilePicker(
    file_name: Option<String>,
    kind: FileKind,
    preview_url: Option<String>,
    on_file: EventHandler<UploadFile>,
) -> Element {
    let onchange = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        let content_type = file.content_type().unwrap_or_default();
        match file.read_bytes().await {
            Ok(bytes) => on_file.call(UploadFile::new(name, content_type, bytes.to_vec())),
            Err(err) => tracing::error!("could not read {name}: {err}"),
        }
    };

    rsx! {
        div { class: "file-picker",
            label { class: "btn btn-outline",
                input {
                    r#type: "file",
                    accept: ACCEPTED_MEDIA,
                    class: "hidden",
                    onchange,
                }
                "Choose File"
            }
            span { class: "file-name",
                match &file_name {
                    Some(name) => rsx! { "{name}" },
                    None => rsx! { "No file chosen" },
                }
            }
        }
        if let Some(url) = preview_url {
            match kind {
                FileKind::Video => rsx! {
                    video { class: "preview", src: "{url}", controls: true }
                },
                FileKind::Audio => rsx! {
                    audio { class: "preview", src: "{url}", controls: true }
                },
                FileKind::None => rsx! {},
            }
        }
    }
}
