//! The signed-in user's profile and API quota.

use api::{ApiClient, ApiUsage, API_CALL_LIMIT};
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::format::format_long_date;

pub const LIMIT_REACHED: &str = "You have reached your limit.";

#[component]
pub fn ProfileView() -> Element {
    let session = use_session();
    let base_api = use_context::<ApiClient>();

    let profile = use_resource(move || {
        let base_api = base_api.clone();
        async move {
            let token = session.read().token().map(str::to_string)?;
            let fetched = base_api.with_token(Some(&token)).profile().await;
            if let Err(err) = &fetched {
                tracing::error!("fetching profile failed: {err}");
            }
            Some(fetched)
        }
    });

    let state = profile.read().clone();

    rsx! {
        div { class: "container profile",
            h2 { "Profile" }
            match state {
                None | Some(None) => rsx! {
                    p { class: "muted", "Loading profile..." }
                },
                Some(Some(Err(err))) => rsx! {
                    div { class: "alert alert-danger", "Error: {err}" }
                },
                Some(Some(Ok(user))) => rsx! {
                    div { class: "card",
                        dl { class: "profile-fields",
                            dt { "Name" }
                            dd { "{user.full_name()}" }
                            dt { "Email" }
                            dd { "{user.email}" }
                            dt { "Role" }
                            dd { "{user.role.as_str()}" }
                            dt { "Member since" }
                            dd { "{format_long_date(&user.created_at)}" }
                        }
                    }
                    UsageCard { usage: user.usage() }
                },
            }
        }
    }
}

#[component]
fn UsageCard(usage: ApiUsage) -> Element {
    let bar_class = if usage.near_limit() {
        "usage-bar usage-bar-warning"
    } else {
        "usage-bar"
    };
    let width = usage.bar_width();

    rsx! {
        div { class: "card usage",
            h4 { "API Usage" }
            p { "{usage.used} of {API_CALL_LIMIT} calls used ({usage.remaining} remaining)" }
            div { class: "usage-track",
                div { class: "{bar_class}", style: "width: {width}%" }
            }
            if usage.exhausted() {
                div { class: "alert alert-warning", "{LIMIT_REACHED}" }
            }
        }
    }
}
