use api::UploadResult;
use dioxus::prelude::*;

use super::{SummarySections, TitleEditor};
use crate::auth::use_api;
use crate::icons::{FaArrowUpRightFromSquare, FaCheck, FaChevronDown, FaChevronUp, FaPen, FaXmark};
use crate::Icon;

/// Result card shown in place of the uploader once an upload resolves.
#[component]
pub fn UploadResultView(
    result: UploadResult,
    on_open_summary: EventHandler<i64>,
    on_upload_another: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut editor = use_signal({
        let initial = result.title.clone().unwrap_or_default();
        move || TitleEditor::new(initial)
    });
    let mut summary_open = use_signal(|| false);
    let mut transcript_open = use_signal(|| false);

    let id = result.id;
    let summary = result.structured_summary().unwrap_or_default();
    let transcript = result.transcript.clone().unwrap_or_default();

    let save_title = move |_| {
        let Some(id) = id else {
            return;
        };
        let pending = editor.write().start_save();
        let Some(title) = pending else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            match api.update_title(id, &title).await {
                Ok(()) => editor.write().saved(),
                Err(err) => {
                    tracing::error!(id, "title update failed: {err}");
                    editor.write().failed();
                }
            }
        });
    };

    let state = editor.read().clone();

    rsx! {
        div { class: "card result-card",
            h3 { class: "result-banner", "Upload Successful!" }
            div { class: "result-header",
                if state.is_editing() {
                    input {
                        class: "form-control title-input",
                        value: "{state.draft()}",
                        disabled: state.is_saving(),
                        oninput: move |evt: FormEvent| editor.write().set_draft(evt.value()),
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-icon",
                        title: "Save",
                        disabled: state.is_saving(),
                        onclick: save_title,
                        Icon { icon: FaCheck, width: 14, height: 14 }
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-icon",
                        title: "Cancel",
                        disabled: state.is_saving(),
                        onclick: move |_| editor.write().cancel(),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                } else {
                    h3 { class: "result-title", "{state.title()}" }
                    if id.is_some() {
                        button {
                            r#type: "button",
                            class: "btn btn-icon",
                            title: "Edit title",
                            onclick: move |_| editor.write().begin(),
                            Icon { icon: FaPen, width: 14, height: 14 }
                        }
                    }
                }
            }
            if let Some(error) = state.error() {
                div { class: "alert alert-danger", "{error}" }
            }

            div { class: "accordion",
                button {
                    r#type: "button",
                    class: "accordion-toggle",
                    onclick: move |_| summary_open.toggle(),
                    span { "Summary" }
                    if summary_open() {
                        Icon { icon: FaChevronUp, width: 12, height: 12 }
                    } else {
                        Icon { icon: FaChevronDown, width: 12, height: 12 }
                    }
                }
                if summary_open() {
                    div { class: "accordion-body",
                        SummarySections { summary }
                    }
                }

                button {
                    r#type: "button",
                    class: "accordion-toggle",
                    onclick: move |_| transcript_open.toggle(),
                    span { "Transcript" }
                    if transcript_open() {
                        Icon { icon: FaChevronUp, width: 12, height: 12 }
                    } else {
                        Icon { icon: FaChevronDown, width: 12, height: 12 }
                    }
                }
                if transcript_open() {
                    div { class: "accordion-body transcript", "{transcript}" }
                }
            }

            div { class: "result-actions",
                if let Some(id) = id {
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| on_open_summary.call(id),
                        Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                        " Open summary"
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| on_upload_another.call(()),
                    "Upload another"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::provide_session;
    use crate::test_support::memory_session;
    use api::ApiClient;
    use store::ApiConfig;

    #[component]
    fn ResolvedCard(result: UploadResult) -> Element {
        provide_session(|| memory_session(None));
        rsx! {
            UploadResultView {
                result,
                on_open_summary: move |_| {},
                on_upload_another: move |_| {},
            }
        }
    }

    fn render_card(result: UploadResult) -> String {
        let mut dom = VirtualDom::new_with_props(ResolvedCard, ResolvedCardProps { result })
            .with_root_context(ApiClient::new(&ApiConfig::default()));
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_card_announces_success_with_sections_collapsed() {
        let result = UploadResult {
            id: Some(3),
            title: Some("Thermodynamics".to_string()),
            transcript: Some("entropy rises".to_string()),
            transcript_summary: Some(serde_json::json!({
                "sections": [{ "heading": "Laws", "points": ["first law"] }]
            })),
            ..UploadResult::default()
        };
        let html = render_card(result);

        assert!(html.contains("Upload Successful!"), "{html}");
        assert!(html.contains("Thermodynamics"), "{html}");
        assert!(html.contains("Open summary"), "{html}");
        assert!(!html.contains("first law"), "{html}");
        assert!(!html.contains("entropy rises"), "{html}");
    }

    #[test]
    fn test_card_without_id_offers_no_link() {
        let html = render_card(UploadResult::default());
        assert!(html.contains("Upload Successful!"), "{html}");
        assert!(!html.contains("Open summary"), "{html}");
        assert!(!html.contains("Edit title"), "{html}");
    }
}
