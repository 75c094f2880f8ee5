use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::{debug, warn};

/// Record an analytics event for the current user.
///
/// Sink failures are logged and swallowed; reporting never fails the caller.
#[dioxus::prelude::post("/api/capture")]
pub async fn capture_event(
    event: String,
    properties: serde_json::Value,
) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (event, properties);
        Err(ServerFnError::new("capture_event is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use crate::types::AnalyticsEvent;

        let event = event.trim().to_string();
        if event.is_empty() {
            return Err(ServerFnError::new("event name is required"));
        }
        debug!("events.capture_event: event={}", event);

        let state = crate::state::AppState::global();
        let mut captured = AnalyticsEvent::new(event, properties);
        if let Some(user) = state.session().user {
            captured = captured.with_distinct_id(user.distinct_id);
        }

        if let Err(e) = state.analytics.capture(captured).await {
            warn!("events.capture_event: sink failed: {e:#}");
        }
        Ok(())
    }
}
