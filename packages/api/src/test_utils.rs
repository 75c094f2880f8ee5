use crate::analytics::MemoryEventSink;
use crate::config::AppConfig;
use crate::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;

/// Installs a thread-local [`AppState`] for the lifetime of the context.
pub struct TestContext {
    pub state: Arc<AppState>,
    pub sink: Arc<MemoryEventSink>,
}

impl TestContext {
    /// Local-mode state with no SMTP and a team that has not ingested events.
    pub fn new() -> Self {
        Self::with_env(&[])
    }

    /// Local-mode state with extra config variables layered on top.
    pub fn with_env(pairs: &[(&str, &str)]) -> Self {
        let mut vars: HashMap<String, String> = HashMap::new();
        vars.insert("APP_MODE".to_string(), "local".to_string());
        vars.insert("SITE_URL".to_string(), "http://localhost:8080".to_string());
        for (key, value) in pairs {
            vars.insert(key.to_string(), value.to_string());
        }

        let config = AppConfig::from_lookup(|key| vars.get(key).cloned())
            .expect("test config should be valid");
        let sink = Arc::new(MemoryEventSink::new());
        let state = Arc::new(AppState::with_sink(config, sink.clone()));
        AppState::set_thread_local(Some(state.clone()));

        Self { state, sink }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        AppState::set_thread_local(None);
    }
}
