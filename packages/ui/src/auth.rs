//! Session context and hooks for the UI.
//!
//! The session is one explicit [`SessionStore`] object, created once at the
//! root and injected into every consumer through the Dioxus context. Its
//! storage is a boxed [`SessionStorage`], so an app (or a test harness) can
//! hand in whatever backend it wants with [`provide_session`].

use api::ApiClient;
use dioxus::prelude::*;
use store::{SessionStorage, SessionStore};

use crate::storage::make_storage;

/// The injected session object shared by every screen.
pub type AppSession = Signal<SessionStore<Box<dyn SessionStorage>>>;

/// Get the current session. Re-renders the caller on login and logout.
pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

/// Share the session built by `restore` with the current scope's children.
///
/// `restore` runs once, on the first render.
pub fn provide_session(
    restore: impl FnOnce() -> SessionStore<Box<dyn SessionStorage>>,
) -> AppSession {
    use_context_provider(move || Signal::new(restore()))
}

/// Backend client carrying the current session's token, if any.
///
/// Requires an [`ApiClient`] in context (provided by the app root).
pub fn use_api() -> ApiClient {
    let session = use_session();
    let base = use_context::<ApiClient>();
    let token = session.read().token().map(str::to_string);
    base.with_token(token.as_deref())
}

/// Provider component that restores the persisted session and shares it.
///
/// Restoring happens synchronously here, so children already see the right
/// state on their first render.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    provide_session(|| SessionStore::restore(make_storage()));

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Clears the session locally; there is no server call. `on_logout` runs
/// afterwards so the caller can navigate away.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.write().logout();
        tracing::info!("logged out");
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
