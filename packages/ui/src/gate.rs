//! Route protection decisions.
//!
//! The decision is a pure function of the session snapshot, so a gate never
//! issues a request of its own and a protected child that is not allowed to
//! render never mounts (and therefore never fetches).

use dioxus::prelude::*;
use store::{AuthSnapshot, Role};

use crate::auth::use_session;

pub const ACCESS_DENIED: &str = "Access denied. Admin privileges required.";

/// What a protected view requires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    #[default]
    Authenticated,
    /// Authenticated with the `admin` role, as cached in the session.
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectToLogin,
    Forbidden,
}

pub fn check_access(snapshot: &AuthSnapshot, access: Access) -> GateDecision {
    if !snapshot.is_authenticated {
        return GateDecision::RedirectToLogin;
    }
    match access {
        Access::Authenticated => GateDecision::Render,
        Access::Admin if snapshot.role() == Some(Role::Admin) => GateDecision::Render,
        Access::Admin => GateDecision::Forbidden,
    }
}

/// Renders `children` only when the injected session grants `access`.
///
/// `on_redirect` runs when there is no session at all; the caller decides
/// where to send the visitor. Signed-in users without the role get
/// [`ACCESS_DENIED`].
#[component]
pub fn AccessGate(
    #[props(default)] access: Access,
    on_redirect: EventHandler<()>,
    children: Element,
) -> Element {
    let session = use_session();
    let decision = check_access(&session.read().snapshot(), access);

    match decision {
        GateDecision::Render => rsx! {
            {children}
        },
        GateDecision::RedirectToLogin => {
            on_redirect.call(());
            rsx! {}
        }
        GateDecision::Forbidden => rsx! {
            div { class: "container access-denied",
                div { class: "alert alert-danger", "{ACCESS_DENIED}" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::auth::provide_session;
    use crate::test_support::memory_session;
    use store::{MemoryStorage, Session, SessionStore, SessionUser};

    fn snapshot_for(role: Option<Role>) -> AuthSnapshot {
        let mut store = SessionStore::restore(MemoryStorage::new());
        if let Some(role) = role {
            store.login(Session {
                user: SessionUser {
                    id: 1,
                    role,
                    ..SessionUser::default()
                },
                token: "t1".to_string(),
            });
        }
        store.snapshot()
    }

    #[test]
    fn test_anonymous_is_redirected() {
        let snapshot = snapshot_for(None);
        assert_eq!(check_access(&snapshot, Access::Authenticated), GateDecision::RedirectToLogin);
        assert_eq!(check_access(&snapshot, Access::Admin), GateDecision::RedirectToLogin);
    }

    #[test]
    fn test_user_renders_but_cannot_reach_admin() {
        let snapshot = snapshot_for(Some(Role::User));
        assert_eq!(check_access(&snapshot, Access::Authenticated), GateDecision::Render);
        assert_eq!(check_access(&snapshot, Access::Admin), GateDecision::Forbidden);
    }

    #[test]
    fn test_admin_renders_everything() {
        let snapshot = snapshot_for(Some(Role::Admin));
        assert_eq!(check_access(&snapshot, Access::Authenticated), GateDecision::Render);
        assert_eq!(check_access(&snapshot, Access::Admin), GateDecision::Render);
    }

    #[derive(Clone, Default)]
    struct Observed {
        mounted: Rc<Cell<bool>>,
        redirects: Rc<Cell<u32>>,
    }

    #[component]
    fn Secret() -> Element {
        use_context::<Observed>().mounted.set(true);
        rsx! {
            p { "secret stats" }
        }
    }

    #[component]
    fn Gated(persisted: Option<String>, access: Access) -> Element {
        let seen = use_context::<Observed>();
        provide_session(|| memory_session(persisted.as_deref()));
        rsx! {
            AccessGate {
                access,
                on_redirect: move |_| seen.redirects.set(seen.redirects.get() + 1),
                Secret {}
            }
        }
    }

    fn render_gated(persisted: Option<&str>, access: Access) -> (String, Observed) {
        let seen = Observed::default();
        let props = GatedProps {
            persisted: persisted.map(str::to_string),
            access,
        };
        let mut dom = VirtualDom::new_with_props(Gated, props).with_root_context(seen.clone());
        dom.rebuild_in_place();
        (dioxus_ssr::render(&dom), seen)
    }

    const USER: &str = r#"{"id":1,"role":"user","token":"t1"}"#;
    const ADMIN: &str = r#"{"id":2,"role":"admin","token":"t2"}"#;

    #[test]
    fn test_admin_route_denies_regular_user_without_mounting() {
        let (html, seen) = render_gated(Some(USER), Access::Admin);
        assert!(html.contains(ACCESS_DENIED));
        assert!(!html.contains("secret stats"));
        assert!(!seen.mounted.get());
        assert_eq!(seen.redirects.get(), 0);
    }

    #[test]
    fn test_unknown_role_is_denied_admin() {
        let (html, seen) = render_gated(
            Some(r#"{"id":1,"role":"superuser","token":"t"}"#),
            Access::Admin,
        );
        assert!(html.contains(ACCESS_DENIED));
        assert!(!seen.mounted.get());
    }

    #[test]
    fn test_anonymous_visitor_is_redirected_without_mounting() {
        let (html, seen) = render_gated(None, Access::Authenticated);
        assert!(!html.contains("secret stats"));
        assert!(!seen.mounted.get());
        assert!(seen.redirects.get() >= 1);
    }

    #[test]
    fn test_admin_sees_child() {
        let (html, seen) = render_gated(Some(ADMIN), Access::Admin);
        assert!(html.contains("secret stats"));
        assert!(seen.mounted.get());
    }
}
