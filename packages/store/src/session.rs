//! # Client session: identity, bearer token and the Session Store
//!
//! The session is the only state shared between screens. It is created from a
//! login or register response, persisted through a [`SessionStorage`] under
//! [`SESSION_KEY`], restored synchronously at startup and destroyed on logout.
//! There is no expiry tracking and no renewal: the token is sent verbatim until
//! the user logs out, and the server alone decides whether it is still valid.
//!
//! ## Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Role`] | `user` or `admin`, as sent by the backend. |
//! | [`SessionUser`] | The user record returned alongside the token. |
//! | [`Session`] | User record + bearer token. Persisted flattened, `{ ...user, token }`. |
//! | [`SessionStore`] | Owns the current session and its storage; the single writer. |
//! | [`AuthSnapshot`] | Read-only view handed to gates and data-fetching views. |

use serde::{Deserialize, Serialize};

use crate::storage::{SessionStorage, SESSION_KEY};

/// Account role. Unknown or missing roles are treated as a regular user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// User record as returned by the login and register endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Authenticated identity: the user record merged with its bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(flatten)]
    pub user: SessionUser,
    pub token: String,
}

/// Read-only view of the session for gates and views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub user: Option<SessionUser>,
    pub token: Option<String>,
}

impl AuthSnapshot {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Owner of the current session and of its persisted copy.
///
/// Every other consumer only reads it; `login`, `register` and `logout` are the
/// only mutations.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Restore a previously persisted session, if any.
    ///
    /// Missing or undecodable data yields an unauthenticated store.
    pub fn restore(storage: S) -> Self {
        let current = storage
            .get(SESSION_KEY)
            .and_then(|raw| serde_json::from_str::<Session>(&raw).ok())
            .filter(|session| !session.token.is_empty());
        Self { storage, current }
    }

    /// Store the session produced by a successful login.
    pub fn login(&mut self, session: Session) {
        self.replace(session);
    }

    /// Store the session produced by a successful registration.
    pub fn register(&mut self, session: Session) {
        self.replace(session);
    }

    /// Forget the session in memory and in storage.
    pub fn logout(&mut self) {
        self.current = None;
        self.storage.remove(SESSION_KEY);
    }

    fn replace(&mut self, session: Session) {
        if let Ok(raw) = serde_json::to_string(&session) {
            self.storage.set(SESSION_KEY, &raw);
        }
        self.current = Some(session);
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            is_authenticated: self.is_authenticated(),
            user: self.user().cloned(),
            token: self.token().map(str::to_string),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}
