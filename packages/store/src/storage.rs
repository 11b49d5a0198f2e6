//! # Persistence boundary for the client session
//!
//! [`SessionStorage`] is the only way the rest of the workspace touches durable
//! client storage. It mirrors the shape of the browser's `localStorage` API
//! (string keys, string values) so the web implementation is a direct mapping,
//! while tests and native builds plug in [`crate::MemoryStorage`] or
//! [`crate::FileStorage`].
//!
//! Implementations never report errors. A read that fails is indistinguishable
//! from a missing key, and a failed write is dropped. The server stays the
//! source of truth for whether a token is still valid, so losing the persisted
//! copy only means the user signs in again.

/// The single key under which the current session is persisted.
pub const SESSION_KEY: &str = "notezilla.session";

/// Synchronous key/value storage for the persisted session.
///
/// Synchronous: the session must be restored before the first
/// render, and `localStorage` offers no async API anyway.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: SessionStorage + ?Sized> SessionStorage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
