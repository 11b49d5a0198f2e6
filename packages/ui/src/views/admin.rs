//! Admin dashboard: usage totals, users and endpoint statistics.

use api::{AdminStats, AdminUser, ApiClient, EndpointStat, Role};
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::format::format_timestamp;

/// Badge class for an HTTP method.
pub fn method_badge(method: &str) -> &'static str {
    match method.to_ascii_uppercase().as_str() {
        "GET" => "badge badge-success",
        "POST" => "badge badge-primary",
        "PUT" | "PATCH" => "badge badge-warning",
        "DELETE" => "badge badge-danger",
        _ => "badge badge-secondary",
    }
}

pub fn role_badge(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge badge-danger",
        Role::User => "badge badge-secondary",
    }
}

/// Badge class for a user's API-call count; a used-up quota stands out.
pub fn api_calls_badge(user: &AdminUser) -> &'static str {
    if user.at_limit() {
        "badge badge-warning"
    } else {
        "badge badge-info"
    }
}

#[component]
pub fn AdminView() -> Element {
    let session = use_session();
    let base_api = use_context::<ApiClient>();

    let users_api = base_api.clone();
    let users = use_resource(move || {
        let users_api = users_api.clone();
        async move {
            let token = session.read().token().map(str::to_string)?;
            let fetched = users_api.with_token(Some(&token)).admin_users().await;
            if let Err(err) = &fetched {
                tracing::error!("fetching admin users failed: {err}");
            }
            Some(fetched)
        }
    });

    let stats = use_resource(move || {
        let stats_api = base_api.clone();
        async move {
            let token = session.read().token().map(str::to_string)?;
            match stats_api.with_token(Some(&token)).admin_stats().await {
                Ok(stats) => Some(stats),
                Err(err) => {
                    tracing::error!("fetching admin stats failed: {err}");
                    None
                }
            }
        }
    });

    let users_state = users.read().clone();
    let stats_state: AdminStats = stats.read().clone().flatten().unwrap_or_default();

    rsx! {
        div { class: "container admin",
            h2 { "Admin Dashboard" }
            match users_state {
                None | Some(None) => rsx! {
                    p { class: "muted", "Loading admin data..." }
                },
                Some(Some(Err(err))) => rsx! {
                    div { class: "alert alert-danger", "Error: {err}" }
                },
                Some(Some(Ok(users))) => rsx! {
                    div { class: "stat-cards",
                        StatCard { label: "Total Users", value: users.total_users }
                        StatCard { label: "Total API Calls", value: users.total_api_calls }
                        StatCard { label: "Total Endpoints", value: stats_state.total_endpoints }
                        StatCard { label: "Total Requests", value: stats_state.total_requests }
                    }
                    UsersTable { users: users.users }
                    EndpointTable { stats: stats_state.stats }
                },
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: u64) -> Element {
    rsx! {
        div { class: "card stat-card",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}

#[component]
fn UsersTable(users: Vec<AdminUser>) -> Element {
    rsx! {
        div { class: "card",
            h4 { "Users" }
            table { class: "table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "API Calls" }
                        th { "Joined" }
                    }
                }
                tbody {
                    for user in users {
                        tr { key: "{user.id}",
                            td { "{user.id}" }
                            td { "{user.first_name} {user.last_name}" }
                            td { "{user.email}" }
                            td {
                                span { class: role_badge(user.role), "{user.role.as_str()}" }
                            }
                            td {
                                span { class: api_calls_badge(&user), "{user.api_calls}" }
                            }
                            td { "{format_timestamp(&user.created_at)}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EndpointTable(stats: Vec<EndpointStat>) -> Element {
    rsx! {
        div { class: "card",
            h4 { "Endpoint Statistics" }
            if stats.is_empty() {
                p { class: "muted", "No endpoint statistics yet." }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Method" }
                            th { "Endpoint" }
                            th { "Requests" }
                            th { "Last Called" }
                        }
                    }
                    tbody {
                        for stat in stats {
                            tr { key: "{stat.method} {stat.endpoint}",
                                td {
                                    span { class: method_badge(&stat.method), "{stat.method}" }
                                }
                                td { code { "{stat.endpoint}" } }
                                td { "{stat.count}" }
                                td { "{format_timestamp(&stat.last_called)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
