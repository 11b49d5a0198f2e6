//! Wire models for the summarization backend.

mod admin;
mod summary;
mod user;

pub use admin::{AdminStats, AdminUser, AdminUsers, EndpointStat};
pub use summary::{
    Section, StructuredSummary, Summary, SummaryListItem, SummaryPayload, UploadFile,
    UploadResult,
};
pub(crate) use summary::RawSummary;
pub use user::{
    ApiUsage, AuthPayload, AuthResponse, LoginRequest, RegisterForm, UserProfile, API_CALL_LIMIT,
};
