//! Aggregate statistics served to administrators.

use serde::Deserialize;
use store::Role;

use super::API_CALL_LIMIT;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
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
    pub created_at: String,
}

impl AdminUser {
    /// Whether the account has used up its quota.
    pub fn at_limit(&self) -> bool {
        self.api_calls >= API_CALL_LIMIT
    }
}

/// `/admin/users` response. Not wrapped in a `data` envelope.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUsers {
    #[serde(default)]
    pub users: Vec<AdminUser>,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_api_calls: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EndpointStat {
    pub method: String,
    pub endpoint: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub last_called: String,
}

/// `/admin/stats` response. Not wrapped in a `data` envelope.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub stats: Vec<EndpointStat>,
    #[serde(default)]
    pub total_endpoints: u64,
    #[serde(default)]
    pub total_requests: u64,
}
