use crate::types::AnalyticsEvent;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

/// Destination for analytics events captured by the app.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn capture(&self, event: AnalyticsEvent) -> Result<()>;
}

/// Writes every event to the tracing log.
pub struct TracingEventSink;

#[async_trait]
impl EventSink for TracingEventSink {
    async fn capture(&self, event: AnalyticsEvent) -> Result<()> {
        info!(
            target: "analytics",
            event = %event.event,
            distinct_id = event.distinct_id.as_deref().unwrap_or("anonymous"),
            properties = %event.properties,
            timestamp = %event.timestamp.to_rfc3339(),
            "captured"
        );
        Ok(())
    }
}

/// Keeps captured events in memory.
#[derive(Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventSink for MemoryEventSink {
    async fn capture(&self, event: AnalyticsEvent) -> Result<()> {
        self.events.lock().await.push(event);
        Ok(())
    }
}
