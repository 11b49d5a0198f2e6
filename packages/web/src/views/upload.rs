use dioxus::prelude::*;
use ui::UploaderView;

use crate::Route;

#[component]
pub fn Upload() -> Element {
    let nav = use_navigator();

    rsx! {
        UploaderView {
            on_open_summary: move |id: i64| {
                nav.push(Route::SummaryDetail { id });
            },
        }
    }
}
