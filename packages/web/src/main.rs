use dioxus::prelude::*;
use std::env;

use views::{NotFound, ProjectHome};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    ProjectHome {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    #[cfg(feature = "server")]
    init_server_state();

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "server")]
fn init_server_state() {
    use std::sync::Arc;

    api::config::load_dotenv();

    let config = match api::config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(api::state::AppState::from_config(config));
    api::state::AppState::set_global(state);
    eprintln!("✓ Server initialization complete");
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let site_url = env::var("SITE_URL").unwrap_or_else(|_| "<default>".to_string());

    eprintln!("startup: IP={ip} PORT={port}");
    eprintln!("startup: SITE_URL={site_url}");

    log_missing_envs("email", &["SMTP_HOST", "SMTP_FROM_EMAIL"]);
    log_missing_envs("team", &["TEAM_NAME"]);
}

fn log_missing_envs(group: &str, keys: &[&str]) {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| env::var(key).ok().is_none())
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!(
        "startup: WARNING missing {group} envs: {}",
        missing.join(", ")
    );
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::HomeTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                ui::StoreProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Top navigation plus the invite modal, wrapped around every route.
#[component]
fn WebNavbar() -> Element {
    let lang_sig = ui::use_lang();
    let lang = lang_sig();

    rsx! {
        div { class: "app_nav",
            div { class: "app_nav_inner",
                Link { class: "brand", to: Route::ProjectHome {},
                    span { class: "brand_mark" }
                    span { class: "brand_name", {ui::t(lang, "app.name")} }
                }
                div { class: "nav_links",
                    Link { class: "nav_link", to: Route::ProjectHome {}, {ui::t(lang, "nav.home")} }
                    span { class: "hint", {ui::t(lang, "lang.label")} }
                    button { class: "btn", onclick: move |_| ui::set_lang(lang_sig, ui::Lang::En), "EN" }
                    button { class: "btn", onclick: move |_| ui::set_lang(lang_sig, ui::Lang::Fr), "FR" }
                }
            }
        }
        div { class: "app_container route_view", Outlet::<Route> {} }
        ui::InviteMembersModal {}
    }
}
