//! Backend paths, relative to [`store::ApiConfig::base_url`].
//!
//! The delete and update-title paths do not follow the `/api/v1/videos/...`
//! family used by the other summary calls. They are kept as the backend
//! currently exposes them.

pub const REGISTER: &str = "/api/v1/auth/register";
pub const LOGIN: &str = "/api/v1/auth/login";
pub const UPLOAD: &str = "/api/v1/videos/upload";
pub const SUMMARIES: &str = "/api/v1/videos/summaries";
pub const PROFILE: &str = "/api/v1/user/profile";
pub const ADMIN_USERS: &str = "/api/v1/admin/users";
pub const ADMIN_STATS: &str = "/api/v1/admin/stats";

pub fn summary(id: i64) -> String {
    format!("/api/v1/videos/summary/{id}")
}

pub fn delete_summary(id: i64) -> String {
    format!("/videos/summary/{id}")
}

// TODO: confirm with the backend whether this should live under /api/v1/videos.
pub fn update_title(id: i64) -> String {
    format!("/api/summaries/{id}")
}
