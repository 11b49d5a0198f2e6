//! Helpers for driving a `VirtualDom` in tests.

use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use store::{MemoryStorage, SessionStorage, SessionStore, SESSION_KEY};

/// A session store over memory, optionally holding a persisted session.
pub(crate) fn memory_session(persisted: Option<&str>) -> SessionStore<Box<dyn SessionStorage>> {
    let storage = match persisted {
        Some(raw) => MemoryStorage::with_entry(SESSION_KEY, raw),
        None => MemoryStorage::new(),
    };
    SessionStore::restore(Box::new(storage))
}

/// Poll tasks and apply renders for `duration`.
pub(crate) async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    while tokio::time::Instant::now() < deadline {
        let _ = tokio::time::timeout_at(deadline, dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Drive `dom` until its HTML satisfies `done`, giving up after a few seconds.
pub(crate) async fn render_until(dom: &mut VirtualDom, done: impl Fn(&str) -> bool) -> String {
    for _ in 0..100 {
        let html = dioxus_ssr::render(dom);
        if done(&html) {
            return html;
        }
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }
    dioxus_ssr::render(dom)
}
