//! One summary: video, structured summary and a collapsible transcript.

use api::ApiClient;
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::format::format_timestamp;
use crate::summary::SummarySections;

#[component]
pub fn SummaryDetailView(id: i64) -> Element {
    let session = use_session();
    let base_api = use_context::<ApiClient>();
    let mut show_transcript = use_signal(|| false);

    // Reactive copy of the prop so navigating between ids refetches
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let summary = use_resource(move || {
        let base_api = base_api.clone();
        async move {
            let id = id_signal();
            let token = session.read().token().map(str::to_string);
            let token = token?;
            let fetched = base_api.with_token(Some(&token)).get_summary(id).await;
            if let Err(err) = &fetched {
                tracing::error!(id, "fetching summary failed: {err}");
            }
            Some(fetched)
        }
    });

    let state = summary.read().clone();

    rsx! {
        div { class: "container summary-detail",
            match state {
                None => rsx! {
                    p { class: "muted", "Loading summary..." }
                },
                Some(None) => rsx! {
                    p { class: "muted", "Summary not found." }
                },
                Some(Some(Err(err))) => rsx! {
                    div { class: "alert alert-danger", "Error: {err}" }
                },
                Some(Some(Ok(summary))) => rsx! {
                    h2 { "{summary.title}" }
                    p { class: "card-date", "{format_timestamp(&summary.created_at)}" }
                    div { class: "detail-grid",
                        div { class: "card",
                            match summary.video_url.clone() {
                                Some(url) => rsx! {
                                    video { class: "preview", src: "{url}", controls: true }
                                },
                                None => rsx! {
                                    p { class: "muted", "No video available." }
                                },
                            }
                        }
                        div { class: "card",
                            h4 { "Summary" }
                            SummarySections { summary: summary.summary.clone(), show_title: true }
                        }
                    }
                    div { class: "card",
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| show_transcript.toggle(),
                            if show_transcript() { "Hide Transcript" } else { "Show Transcript" }
                        }
                        if show_transcript() {
                            div { class: "transcript", "{summary.transcript}" }
                        }
                    }
                },
            }
        }
    }
}
