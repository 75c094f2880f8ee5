//! Reactive stores the project home reads from.
//!
//! Each store is a `Copy` handle around a signal, provided through context by
//! [`StoreProvider`]. Views read snapshots and request changes through the
//! store's actions; they never own the data.

use api::types::{Preflight, Session, Team, User};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::event_usage::EventUsage;

#[derive(Clone, Copy, PartialEq)]
pub struct TeamStore {
    current_team: Signal<Option<Team>>,
}

impl TeamStore {
    pub fn current_team(&self) -> Option<Team> {
        (self.current_team)()
    }

    pub fn set_current_team(&self, team: Option<Team>) {
        let mut current_team = self.current_team;
        current_team.set(team);
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct UserStore {
    user: Signal<Option<User>>,
    loaded: Signal<bool>,
}

impl UserStore {
    pub fn user(&self) -> Option<User> {
        (self.user)()
    }

    /// Whether the session request has settled, successfully or not.
    pub fn loaded(&self) -> bool {
        (self.loaded)()
    }

    pub fn set_user(&self, user: Option<User>) {
        let mut current = self.user;
        current.set(user);
    }

    pub fn set_loaded(&self, loaded: bool) {
        let mut current = self.loaded;
        current.set(loaded);
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct PreflightStore {
    preflight: Signal<Option<Preflight>>,
}

impl PreflightStore {
    pub fn preflight(&self) -> Option<Preflight> {
        (self.preflight)()
    }

    pub fn email_service_available(&self) -> bool {
        self.preflight
            .read()
            .as_ref()
            .and_then(|p| p.email_service_available)
            .unwrap_or(false)
    }

    pub fn set_preflight(&self, preflight: Option<Preflight>) {
        let mut current = self.preflight;
        current.set(preflight);
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct NavigationStore {
    invite_members_modal_open: Signal<bool>,
}

impl NavigationStore {
    pub fn invite_members_modal_open(&self) -> bool {
        (self.invite_members_modal_open)()
    }

    pub fn set_invite_members_modal_open(&self, open: bool) {
        let mut flag = self.invite_members_modal_open;
        flag.set(open);
    }
}

fn use_store<T: Clone + 'static>(fallback: impl FnOnce() -> T) -> T {
    match try_use_context::<T>() {
        Some(store) => store,
        // Missing provider reads as "nothing loaded yet".
        None => use_hook(fallback),
    }
}

pub fn use_team_store() -> TeamStore {
    use_store(|| TeamStore {
        current_team: Signal::new(None),
    })
}

pub fn use_user_store() -> UserStore {
    use_store(|| UserStore {
        user: Signal::new(None),
        loaded: Signal::new(false),
    })
}

pub fn use_preflight_store() -> PreflightStore {
    use_store(|| PreflightStore {
        preflight: Signal::new(None),
    })
}

pub fn use_navigation_store() -> NavigationStore {
    use_store(|| NavigationStore {
        invite_members_modal_open: Signal::new(false),
    })
}

/// Creates every store, provides it to `children`, and fills the team, user
/// and preflight stores from the server after mount when `fetch` is set.
///
/// `session_loaded` marks the initial `session` as final; otherwise the user
/// store reads as loaded once the session request settles.
#[component]
pub fn StoreProvider(
    #[props(default)] session: Session,
    #[props(default)] session_loaded: bool,
    #[props(default)] preflight: Option<Preflight>,
    #[props(default)] invite_members_modal_open: bool,
    #[props(default = true)] fetch: bool,
    children: Element,
) -> Element {
    let team_store = use_context_provider(|| TeamStore {
        current_team: Signal::new(session.team.clone()),
    });
    let user_store = use_context_provider(|| UserStore {
        user: Signal::new(session.user.clone()),
        loaded: Signal::new(session_loaded),
    });
    let preflight_store = use_context_provider(|| PreflightStore {
        preflight: Signal::new(preflight.clone()),
    });
    use_context_provider(|| NavigationStore {
        invite_members_modal_open: Signal::new(invite_members_modal_open),
    });
    if try_use_context::<EventUsage>().is_none() {
        use_context_provider(EventUsage::server);
    }

    use_effect(move || {
        if !fetch {
            return;
        }
        spawn(async move {
            match api::get_session().await {
                Ok(session) => {
                    team_store.set_current_team(session.team);
                    user_store.set_user(session.user);
                }
                Err(e) => warn!("stores: failed to load session: {e}"),
            }
            user_store.set_loaded(true);
        });
        spawn(async move {
            match api::get_preflight().await {
                Ok(preflight) => preflight_store.set_preflight(Some(preflight)),
                Err(e) => warn!("stores: failed to load preflight: {e}"),
            }
        });
    });

    rsx! { {children} }
}
