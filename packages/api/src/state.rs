use crate::analytics::{EventSink, TracingEventSink};
use crate::config::{AppConfig, AppMode, EmailConfig};
use crate::types::{Preflight, Session, Team, User};
use std::sync::{Arc, OnceLock};

/// Global application state shared by the server functions
pub struct AppState {
    pub config: AppConfig,
    pub analytics: Arc<dyn EventSink>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create AppState from configuration, logging analytics through tracing.
    pub fn from_config(config: AppConfig) -> Self {
        Self::with_sink(config, Arc::new(TracingEventSink))
    }

    pub fn with_sink(config: AppConfig, analytics: Arc<dyn EventSink>) -> Self {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }
        match &config.email {
            EmailConfig::Smtp { host, .. } => tracing::info!("   Email: SMTP ({})", host),
            EmailConfig::Console => tracing::info!("   Email: unavailable, invites use links"),
        }
        tracing::info!("   Site URL: {}", config.site_url);
        tracing::info!(
            "   Team: id={} ingested_event={}",
            config.team.id,
            config.team.ingested_event
        );

        Self { config, analytics }
    }

    pub fn preflight(&self) -> Preflight {
        Preflight {
            email_service_available: Some(self.config.email.is_available()),
            site_url: self.config.site_url.clone(),
        }
    }

    pub fn session(&self) -> Session {
        let team = Team {
            id: self.config.team.id,
            name: self.config.team.name.clone(),
            ingested_event: Some(self.config.team.ingested_event),
        };

        let user = if self.config.user.email.is_empty() {
            None
        } else {
            Some(User {
                distinct_id: self.config.user.distinct_id.clone(),
                email: self.config.user.email.clone(),
                first_name: self.config.user.first_name.clone(),
                team: Some(team.clone()),
            })
        };

        Session {
            team: Some(team),
            user,
        }
    }

    /// Set the global AppState instance
    ///
    /// This should be called once at server startup.
    /// Panics if called more than once.
    pub fn set_global(state: Arc<Self>) {
        STATE
            .set(state)
            .expect("AppState::set_global called more than once");
    }

    /// Get the global AppState instance
    ///
    /// Panics if called before set_global.
    pub fn global() -> Arc<Self> {
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return test_state;
        }

        STATE
            .get()
            .expect("AppState::global called before set_global")
            .clone()
    }

    /// Override the global state for the current thread.
    pub fn set_thread_local(state: Option<Arc<Self>>) {
        TEST_STATE.with(|s| *s.borrow_mut() = state);
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}
