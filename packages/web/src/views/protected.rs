use dioxus::prelude::*;
use ui::{Access, AccessGate};

use crate::Route;

/// Route-level gate: anonymous visitors go to the login page.
///
/// Children are never mounted without access, so they never fetch anything.
#[component]
pub fn Protected(#[props(default)] access: Access, children: Element) -> Element {
    let nav = use_navigator();

    rsx! {
        AccessGate {
            access,
            on_redirect: move |_| {
                nav.replace(Route::Login {});
            },
            {children}
        }
    }
}
