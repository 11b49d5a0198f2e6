use dioxus::prelude::*;

use api::ApiClient;
use store::ClientConfig;
use ui::SessionProvider;
use views::{Admin, AppLayout, Login, Profile, Register, SummaryDetail, Summaries, Upload};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Upload {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/summaries")]
        Summaries {},
        #[route("/summaries/:id")]
        SummaryDetail { id: i64 },
        #[route("/profile")]
        Profile {},
        #[route("/admin")]
        Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; `NOTEZILLA_API_URL` overrides the backend URL.
const EMBEDDED_CONFIG: &str = include_str!("../notezilla.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {e}", ClientConfig::filename());
        ClientConfig::default()
    });
    match option_env!("NOTEZILLA_API_URL") {
        Some(url) if !url.is_empty() => config.with_base_url(url),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(|| ApiClient::new(&config.api));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::NOTEZILLA_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
