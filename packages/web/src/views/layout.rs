use dioxus::prelude::*;
use ui::{use_session, LogoutButton, Navbar};

use crate::Route;

/// Shared page chrome: navbar above the routed page.
#[component]
pub fn AppLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let (authenticated, admin) = {
        let session = session.read();
        (session.is_authenticated(), session.is_admin())
    };

    rsx! {
        div { class: "page",
            Navbar {
                brand: rsx! {
                    Link { to: Route::Upload {}, "NoteZilla" }
                },
                if authenticated {
                    Link { to: Route::Summaries {}, "Your Summaries" }
                    Link { to: Route::Profile {}, "Profile" }
                    if admin {
                        Link { to: Route::Admin {}, "Admin" }
                    }
                    LogoutButton {
                        class: "btn btn-outline",
                        on_logout: move |_| {
                            nav.push(Route::Login {});
                        },
                    }
                } else {
                    Link { to: Route::Login {}, "Login" }
                    Link { to: Route::Register {}, "Register" }
                }
            }
            main { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}
