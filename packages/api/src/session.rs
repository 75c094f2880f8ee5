use crate::types::{Preflight, Session};
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::debug;

#[dioxus::prelude::get("/api/session")]
pub async fn get_session() -> Result<Session, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("get_session is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::state::AppState::global();
        let session = state.session();
        debug!(
            "session.get_session: team={:?} has_user={}",
            session.team.as_ref().map(|t| t.id),
            session.user.is_some()
        );
        Ok(session)
    }
}

#[dioxus::prelude::get("/api/preflight")]
pub async fn get_preflight() -> Result<Preflight, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("get_preflight is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let preflight = crate::state::AppState::global().preflight();
        debug!(
            "session.get_preflight: email_service_available={:?}",
            preflight.email_service_available
        );
        Ok(preflight)
    }
}
