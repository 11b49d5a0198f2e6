//! # HTTP client for the summarization backend
//!
//! [`ApiClient`] wraps a `reqwest::Client` together with the configured base
//! URL and the optional bearer token. It is cheap to clone; views derive an
//! authorised copy with [`ApiClient::with_token`] right before issuing a call.
//!
//! Every response goes through the same decoding: a non-2xx status becomes
//! [`ApiError::Status`] carrying the server's `message`/`error` text (or a
//! per-operation fallback), and a 2xx body that does not match the expected
//! shape becomes [`ApiError::Decode`]. Nothing is retried and no timeout is
//! set beyond the platform default.

use reqwest::{multipart, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::ApiConfig;
use tracing::debug;

use crate::models::{
    AdminStats, AdminUsers, AuthResponse, LoginRequest, RawSummary, RegisterForm, Summary, SummaryListItem,
    UploadFile, UploadResult, UserProfile,
};
use crate::{routes, ApiError};

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct VideoList {
    #[serde(default)]
    videos: Vec<SummaryListItem>,
}

#[derive(Deserialize)]
struct VideoDetail {
    video: RawSummary,
}

/// Client for every backend endpoint the front-end uses.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create an anonymous client for the configured backend.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// A copy of this client that sends `token` as its bearer credential.
    pub fn with_token(&self, token: Option<&str>) -> Self {
        Self {
            token: token.map(str::to_string),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, authorized = self.token.is_some(), "dispatching request");
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        include_credentials(builder)
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<AuthResponse, ApiError> {
        let builder = self.request(Method::POST, routes::REGISTER).json(form);
        fetch(builder, "Registration failed").await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let builder = self
            .request(Method::POST, routes::LOGIN)
            .json(&LoginRequest { email, password });
        fetch(builder, "Login failed").await
    }

    /// Upload one media file as `multipart/form-data` under the `file` field.
    pub async fn upload(&self, file: UploadFile) -> Result<UploadResult, ApiError> {
        let mut part = multipart::Part::bytes(file.bytes).file_name(file.name);
        if !file.content_type.is_empty() {
            part = part.mime_str(&file.content_type)?;
        }
        let form = multipart::Form::new().part("file", part);
        let builder = self.request(Method::POST, routes::UPLOAD).multipart(form);
        let envelope: Envelope<UploadResult> = fetch(builder, "Upload failed").await?;
        Ok(envelope.data)
    }

    pub async fn list_summaries(&self) -> Result<Vec<SummaryListItem>, ApiError> {
        let builder = self.request(Method::GET, routes::SUMMARIES);
        let envelope: Envelope<VideoList> = fetch(builder, "Failed to fetch summaries").await?;
        Ok(envelope.data.videos)
    }

    pub async fn get_summary(&self, id: i64) -> Result<Summary, ApiError> {
        let builder = self.request(Method::GET, &routes::summary(id));
        let envelope: Envelope<VideoDetail> = fetch(builder, "Failed to fetch summary").await?;
        Summary::try_from(envelope.data.video)
    }

    pub async fn delete_summary(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &routes::delete_summary(id));
        send(builder, "Failed to delete").await.map(|_| ())
    }

    pub async fn update_title(&self, id: i64, title: &str) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &routes::update_title(id))
            .json(&serde_json::json!({ "title": title }));
        send(builder, "Failed to update title").await.map(|_| ())
    }

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        let builder = self.request(Method::GET, routes::PROFILE);
        let envelope: Envelope<UserProfile> = fetch(builder, "Failed to fetch profile").await?;
        Ok(envelope.data)
    }

    pub async fn admin_users(&self) -> Result<AdminUsers, ApiError> {
        let builder = self.request(Method::GET, routes::ADMIN_USERS);
        fetch(builder, "Failed to fetch admin data").await
    }

    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        let builder = self.request(Method::GET, routes::ADMIN_STATS);
        fetch(builder, "Failed to fetch stats data").await
    }
}

#[cfg(target_arch = "wasm32")]
fn include_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn include_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

async fn fetch<T: DeserializeOwned>(
    builder: RequestBuilder,
    fallback: &str,
) -> Result<T, ApiError> {
    let body = send(builder, fallback).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Send the request and return the body of a 2xx response.
async fn send(builder: RequestBuilder, fallback: &str) -> Result<String, ApiError> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if status.is_success() {
        Ok(body)
    } else {
        Err(error_from_body(status.as_u16(), &body, fallback))
    }
}

/// Build the error for a non-2xx response, preferring the server's own text.
pub(crate) fn error_from_body(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].iter().find_map(|key| {
                value
                    .get(*key)
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| fallback.to_string());
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_prefers_message_field() {
        let err = error_from_body(401, r#"{"message":"Invalid credentials"}"#, "Login failed");
        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: "Invalid credentials".to_string()
            }
        );
    }

    #[test]
    fn test_error_uses_error_field() {
        let err = error_from_body(
            409,
            r#"{"error":"Email already registered"}"#,
            "Registration failed",
        );
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_error_falls_back_for_non_json() {
        let err = error_from_body(502, "<html>Bad Gateway</html>", "Upload failed");
        assert_eq!(err.to_string(), "Upload failed");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:3000/".to_string(),
        });
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert!(!client.has_token());
        assert!(client.with_token(Some("t")).has_token());
    }
}
