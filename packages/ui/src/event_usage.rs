use std::rc::Rc;

use api::types::{HOME_TILE_CLICKED, HOME_VIEWED};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use serde_json::{json, Value};

/// Fire-and-forget sink for analytics events raised by the UI.
pub trait EventReporter {
    fn report(&self, event: &'static str, properties: Value);
}

/// Sends events to the capture server function. Failures are logged and
/// otherwise ignored.
pub struct ServerEventReporter;

impl EventReporter for ServerEventReporter {
    fn report(&self, event: &'static str, properties: Value) {
        spawn(async move {
            if let Err(e) = api::capture_event(event.to_string(), properties).await {
                debug!("event_usage: dropped {event:?}: {e}");
            }
        });
    }
}

/// The app's analytics actions, provided through context.
#[derive(Clone)]
pub struct EventUsage {
    reporter: Rc<dyn EventReporter>,
}

impl EventUsage {
    pub fn new(reporter: Rc<dyn EventReporter>) -> Self {
        Self { reporter }
    }

    pub fn server() -> Self {
        Self::new(Rc::new(ServerEventReporter))
    }

    pub fn report_home_screen_seen(&self, has_data: bool) {
        self.reporter
            .report(HOME_VIEWED, json!({ "team_has_data": has_data }));
    }

    pub fn report_home_tile_clicked(&self, module_key: &str, title: &str) {
        self.reporter.report(
            HOME_TILE_CLICKED,
            json!({ "module": module_key, "title": title }),
        );
    }
}

impl PartialEq for EventUsage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.reporter, &other.reporter)
    }
}

pub fn use_event_usage() -> EventUsage {
    match try_use_context::<EventUsage>() {
        Some(usage) => usage,
        None => use_hook(EventUsage::server),
    }
}
