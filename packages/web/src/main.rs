use dioxus::prelude::*;

use api::ApiClient;
use store::{DashboardConfig, SessionStore};
use ui::AuthProvider;
use views::{Dashboard, Login, MainLayout, Offer};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(MainLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/offer")]
        Offer {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG_TOML: &str = include_str!("../dashboard.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to defaults, and apply the
/// `DASHBOARD_API_URL` build-time override.
fn load_config(toml: &str, api_url: Option<&str>) -> DashboardConfig {
    let config = match DashboardConfig::from_toml(toml) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", DashboardConfig::filename(), e);
            DashboardConfig::default()
        }
    };
    match api_url {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
        _ => config,
    }
}

fn make_session() -> SessionStore {
    #[cfg(target_arch = "wasm32")]
    {
        SessionStore::new(store::LocalStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        SessionStore::new(store::MemoryStore::new())
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| load_config(CONFIG_TOML, option_env!("DASHBOARD_API_URL")));
    let client = use_hook(|| ApiClient::new(config.api.base_url.clone(), make_session()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            client: client,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`; the gate sends anonymous visitors on to login.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
