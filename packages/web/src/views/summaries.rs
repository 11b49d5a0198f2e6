use dioxus::prelude::*;
use ui::views::{SummaryDetailView, SummaryListView};

use super::Protected;
use crate::Route;

#[component]
pub fn Summaries() -> Element {
    let nav = use_navigator();

    rsx! {
        Protected {
            SummaryListView {
                on_open: move |id: i64| {
                    nav.push(Route::SummaryDetail { id });
                },
            }
        }
    }
}

#[component]
pub fn SummaryDetail(id: i64) -> Element {
    rsx! {
        Protected {
            SummaryDetailView { id }
        }
    }
}
