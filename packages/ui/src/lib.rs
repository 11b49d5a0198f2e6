//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::make_storage;

pub mod views;

pub const NOTEZILLA_CSS: Asset = asset!("/assets/notezilla.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{provide_session, use_api, use_session, AppSession, LogoutButton, SessionProvider};

pub mod gate;
pub use gate::{check_access, Access, AccessGate, GateDecision, ACCESS_DENIED};

pub mod format;
pub mod phase_timer;

pub mod summary;
pub use summary::{SummarySections, UploadResultView};

pub mod upload;
pub use upload::UploaderView;

#[cfg(test)]
mod test_support;
