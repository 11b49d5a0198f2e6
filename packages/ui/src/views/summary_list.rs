//! "My Summaries": the user's summaries as cards, with delete.

use api::{ApiClient, ApiError, SummaryListItem};
use dioxus::prelude::*;

use super::{ConfirmDialog, NoticeDialog};
use crate::auth::use_session;
use crate::format::format_timestamp;
use crate::icons::FaTrashCan;
use crate::Icon;

pub const DELETE_FAILED: &str = "Failed to delete the summary.";

/// Outcome dialog shown after a delete attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteNotice {
    Deleted,
    Failed,
}

impl DeleteNotice {
    pub fn title(&self) -> &'static str {
        match self {
            DeleteNotice::Deleted => "Deleted!",
            DeleteNotice::Failed => "Error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DeleteNotice::Deleted => "Your summary has been deleted.",
            DeleteNotice::Failed => DELETE_FAILED,
        }
    }
}

/// Summaries currently shown, newest as the backend orders them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryListState {
    items: Vec<SummaryListItem>,
}

impl SummaryListState {
    pub fn new(items: Vec<SummaryListItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[SummaryListItem] {
        &self.items
    }

    /// Apply the outcome of deleting `id`.
    ///
    /// The item only leaves the list once the server confirmed the delete.
    pub fn apply_delete(&mut self, id: i64, outcome: &Result<(), ApiError>) -> DeleteNotice {
        match outcome {
            Ok(()) => {
                self.items.retain(|item| item.id != id);
                DeleteNotice::Deleted
            }
            Err(_) => DeleteNotice::Failed,
        }
    }
}

#[component]
pub fn SummaryListView(on_open: EventHandler<i64>) -> Element {
    let session = use_session();
    let base_api = use_context::<ApiClient>();
    let mut list = use_signal(SummaryListState::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<i64>::None);
    let mut deleting = use_signal(|| false);
    let mut notice = use_signal(|| Option::<DeleteNotice>::None);

    let list_api = base_api.clone();
    let _summaries = use_resource(move || {
        let list_api = list_api.clone();
        async move {
            let token = session.read().token().map(str::to_string);
            let Some(token) = token else {
                return;
            };
            match list_api.with_token(Some(&token)).list_summaries().await {
                Ok(items) => {
                    error.set(None);
                    list.set(SummaryListState::new(items));
                }
                Err(err) => {
                    tracing::error!("fetching summaries failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let confirm_delete = move |_| {
        let Some(id) = pending_delete() else {
            return;
        };
        let client = base_api.with_token(session.peek().token());
        spawn(async move {
            deleting.set(true);
            let outcome = client.delete_summary(id).await;
            if let Err(err) = &outcome {
                tracing::error!(id, "deleting summary failed: {err}");
            }
            let result = list.write().apply_delete(id, &outcome);
            deleting.set(false);
            pending_delete.set(None);
            notice.set(Some(result));
        });
    };

    let items = list.read().items().to_vec();

    rsx! {
        div { class: "container",
            h2 { "My Summaries" }
            if loading() {
                p { class: "muted", "Loading summaries..." }
            } else if let Some(err) = error() {
                div { class: "alert alert-danger", "Error: {err}" }
            } else if items.is_empty() {
                p { class: "muted", "No summaries found." }
            } else {
                div { class: "summary-grid",
                    for item in items {
                        div {
                            key: "{item.id}",
                            class: "card summary-card",
                            onclick: move |_| on_open.call(item.id),
                            h5 { class: "card-title", "{item.title}" }
                            p { class: "card-date", "{format_timestamp(&item.created_at)}" }
                            button {
                                class: "btn btn-icon btn-danger",
                                title: "Delete",
                                onclick: move |evt: Event<MouseData>| {
                                    evt.stop_propagation();
                                    pending_delete.set(Some(item.id));
                                },
                                Icon { icon: FaTrashCan, width: 14, height: 14 }
                            }
                        }
                    }
                }
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                title: "Are you sure?",
                message: "You won't be able to revert this!",
                busy: deleting(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }

        if let Some(shown) = notice() {
            NoticeDialog {
                title: shown.title(),
                message: shown.message(),
                on_close: move |_| notice.set(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<SummaryListItem> {
        (1..=3)
            .map(|id| SummaryListItem {
                id,
                title: format!("Lecture {id}"),
                created_at: "2024-01-05T14:03:09Z".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_confirmed_delete_removes_item() {
        let mut state = SummaryListState::new(items());
        let notice = state.apply_delete(2, &Ok(()));
        assert_eq!(notice, DeleteNotice::Deleted);
        let ids: Vec<i64> = state.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_failed_delete_keeps_list() {
        let mut state = SummaryListState::new(items());
        let outcome = Err(ApiError::Status {
            status: 404,
            message: "Failed to delete".to_string(),
        });
        let notice = state.apply_delete(2, &outcome);
        assert_eq!(notice, DeleteNotice::Failed);
        assert_eq!(notice.message(), DELETE_FAILED);
        assert_eq!(state.items().len(), 3);
    }
}
