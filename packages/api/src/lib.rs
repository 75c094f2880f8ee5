//! Shared types and fullstack server functions for the project home.
use dioxus::prelude::*;

pub mod config;
pub mod types;

#[cfg(feature = "server")]
pub mod analytics;

#[cfg(feature = "server")]
pub mod state;

mod events;
mod invites;
mod session;

#[cfg(test)]
mod types_tests;

#[cfg(feature = "server")]
pub mod test_utils;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

pub use events::capture_event;
pub use invites::create_invite_link;
pub use session::{get_preflight, get_session};
