//! # API crate: typed client for the NoteZilla summarization backend
//!
//! Everything the front-end sends over the network goes through this crate.
//! It has no UI dependencies, so the same client runs in the browser (via
//! `reqwest`'s fetch backend) and natively (tests, tooling).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per backend endpoint, bearer auth, response decoding |
//! | [`auth`] | `sign_in` / `sign_up` flows producing a [`store::Session`] |
//! | [`models`] | Wire types: summaries, upload results, profile, admin statistics |
//! | [`routes`] | Endpoint paths relative to the configured base URL |
//! | [`validate`] | Client-side email and password checks |
//! | [`error`] | [`ApiError`], the single error type surfaced to views |

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod routes;
pub mod validate;

pub use auth::{sign_in, sign_up, Registration};
pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    AdminStats, AdminUser, AdminUsers, ApiUsage, EndpointStat, RegisterForm, Section,
    StructuredSummary, Summary, SummaryListItem, UploadFile, UploadResult, UserProfile,
    API_CALL_LIMIT,
};

pub use store::{Role, Session, SessionUser};
