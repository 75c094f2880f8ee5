use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::info;

/// Create a shareable signup link for the current team.
#[dioxus::prelude::post("/api/invites/link")]
pub async fn create_invite_link() -> Result<String, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("create_invite_link is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::state::AppState::global();
        let invite_id = uuid::Uuid::new_v4();
        info!(
            "invites.create_invite_link: team_id={} invite_id={}",
            state.config.team.id, invite_id
        );
        Ok(invite_link(&state.config.site_url, invite_id))
    }
}

#[cfg(feature = "server")]
pub(crate) fn invite_link(site_url: &str, invite_id: uuid::Uuid) -> String {
    format!("{}/signup/{}", site_url.trim_end_matches('/'), invite_id)
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn invite_link_joins_site_url() {
        let id = uuid::Uuid::nil();
        assert_eq!(
            invite_link("https://app.example.com/", id),
            "https://app.example.com/signup/00000000-0000-0000-0000-000000000000"
        );
    }
}
