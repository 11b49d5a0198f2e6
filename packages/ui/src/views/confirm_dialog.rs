use dioxus::prelude::*;

use super::ModalOverlay;

/// Two-button confirmation. `busy` disables both buttons while the
/// confirmed action runs.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Yes, delete it!".to_string())] confirm_label: String,
    #[props(default = false)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay { on_close: move |_| if !busy { on_cancel.call(()) },
            div { class: "modal-body",
                h4 { class: "modal-title", "{title}" }
                p { "{message}" }
            }
            div { class: "modal-actions",
                button {
                    class: "btn btn-outline",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy { "Deleting..." } else { "{confirm_label}" }
                }
            }
        }
    }
}

/// One-button notice, e.g. the outcome of a delete.
#[component]
pub fn NoticeDialog(title: String, message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay { on_close,
            div { class: "modal-body",
                h4 { class: "modal-title", "{title}" }
                p { "{message}" }
            }
            div { class: "modal-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_close.call(()),
                    "OK"
                }
            }
        }
    }
}
