use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event reported once each time the project home mounts.
pub const HOME_VIEWED: &str = "home viewed";

/// Event reported when a tile on the project home is clicked.
pub const HOME_TILE_CLICKED: &str = "home tile clicked";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the team has ever received an analytics event.
    #[serde(default)]
    pub ingested_event: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub distinct_id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    /// The user's view of their current team. May lag behind a freshly
    /// fetched [`Team`].
    #[serde(default)]
    pub team: Option<Team>,
}

impl User {
    pub fn team_ingested_event(&self) -> bool {
        self.team
            .as_ref()
            .and_then(|team| team.ingested_event)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preflight {
    #[serde(default)]
    pub email_service_available: Option<bool>,
    #[serde(default)]
    pub site_url: String,
}

/// Snapshot of the team and user stores.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub event: String,
    pub distinct_id: Option<String>,
    pub properties: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(event: impl Into<String>, properties: serde_json::Value) -> Self {
        Self {
            event: event.into(),
            distinct_id: None,
            properties,
            timestamp: Utc::now(),
        }
    }

    pub fn with_distinct_id(mut self, distinct_id: impl Into<String>) -> Self {
        self.distinct_id = Some(distinct_id.into());
        self
    }
}
