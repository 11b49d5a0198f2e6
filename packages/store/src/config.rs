//! # Client configuration: `notezilla.toml`
//!
//! Settings the front-end needs before it can talk to the backend. The web
//! build embeds the file at compile time; native builds may read it from disk.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"   # every request path is appended to this
//!
//! [upload]
//! summarizing_after_secs = 60          # when the status label flips to "summarizing"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`UploadConfig`] | Delay of the cosmetic uploading → summarizing label change. |
//!
//! All structs derive or implement `Default`, so a missing or empty file is
//! equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `notezilla.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the summarization backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Upload status label settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Seconds after dispatch at which the label switches to "summarizing".
    #[serde(default = "default_summarizing_after")]
    pub summarizing_after_secs: u64,
}

fn default_summarizing_after() -> u64 {
    60
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            summarizing_after_secs: default_summarizing_after(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notezilla.toml"
    }

    pub fn summarizing_delay(&self) -> Duration {
        Duration::from_secs(self.upload.summarizing_after_secs)
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.summarizing_delay(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config =
            ClientConfig::from_toml("[api]\nbase_url = \"https://api.notezilla.app\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://api.notezilla.app");
        assert_eq!(config.upload.summarizing_after_secs, 60);
    }

    #[test]
    fn test_toml_roundtrip_with_builder() {
        let config = ClientConfig::default().with_base_url("http://10.0.0.2:8080");
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url"));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(ClientConfig::from_toml("[upload]\nsummarizing_after_secs = \"soon\"").is_err());
    }
}
