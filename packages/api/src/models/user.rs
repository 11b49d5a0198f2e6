//! # User-facing account models
//!
//! - [`AuthPayload`]: the `data` object of a login/register response. It is
//!   converted into a [`store::Session`] so the Session Store never sees raw
//!   wire types.
//! - [`LoginRequest`] / [`RegisterForm`]: request bodies, serialised in the
//!   camelCase the backend expects.
//! - [`UserProfile`]: the `/user/profile` record, with [`UserProfile::usage`]
//!   projecting it onto the per-user API call quota.

use serde::{Deserialize, Serialize};
use store::{Role, Session, SessionUser};

/// Number of transcription/summarization calls each account may make.
pub const API_CALL_LIMIT: u32 = 20;

/// Login and register response: `{ message?, data: { user, token } }`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub data: AuthPayload,
}

/// `{ user, token }` as returned by login and register.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthPayload {
    pub user: SessionUser,
    pub token: String,
}

impl From<AuthPayload> for Session {
    fn from(payload: AuthPayload) -> Self {
        Session {
            user: payload.user,
            token: payload.token,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Registration form fields as submitted by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Account details and quota usage.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub api_calls: u32,
    #[serde(default)]
    pub api_calls_remaining: u32,
    #[serde(default)]
    pub created_at: String,
}

/// Quota usage derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiUsage {
    pub used: u32,
    pub remaining: u32,
    /// Share of [`API_CALL_LIMIT`] already used, in percent. Can exceed 100.
    pub percent: f64,
}

impl ApiUsage {
    pub fn near_limit(&self) -> bool {
        self.percent >= 80.0
    }

    pub fn exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Width for a progress bar, clamped to 0..=100.
    pub fn bar_width(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn usage(&self) -> ApiUsage {
        ApiUsage {
            used: self.api_calls,
            remaining: self.api_calls_remaining,
            percent: f64::from(self.api_calls) / f64::from(API_CALL_LIMIT) * 100.0,
        }
    }
}
