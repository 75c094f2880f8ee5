use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::types::{Preflight, Session, Team, User};
use dioxus::prelude::*;
use serde_json::Value;

use crate::event_usage::{EventReporter, EventUsage};
use crate::{
    use_navigation_store, use_team_store, use_user_store, HeaderCta, Home, NavigationStore,
    StoreProvider, TeamStore, ToastProvider, UserStore,
};

#[derive(Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<(&'static str, Value)>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<(&'static str, Value)> {
        self.events.borrow().clone()
    }
}

impl EventReporter for RecordingReporter {
    fn report(&self, event: &'static str, properties: Value) {
        self.events.borrow_mut().push((event, properties));
    }
}

#[derive(Clone, Default, PartialEq, Props)]
pub struct Fixture {
    pub team: Option<Team>,
    pub user: Option<User>,
    pub preflight: Option<Preflight>,
    pub invite_members_modal_open: bool,
    /// Mount before the session has loaded.
    pub session_pending: bool,
    /// Start with the header control hovered (`HeaderCta` mounts only).
    pub hovered: bool,
}

/// Store handles of a mounted tree, for changing data after mount.
#[derive(Clone, Copy)]
pub struct Handles {
    pub team: TeamStore,
    pub user: UserStore,
    pub navigation: NavigationStore,
    pub hover: Option<Signal<bool>>,
}

#[derive(Clone, Default)]
struct HandleSlot(Rc<RefCell<Option<Handles>>>);

#[component]
fn CaptureHandles(hover: Option<Signal<bool>>) -> Element {
    let slot = use_context::<HandleSlot>();
    let handles = Handles {
        team: use_team_store(),
        user: use_user_store(),
        navigation: use_navigation_store(),
        hover,
    };
    slot.0.replace(Some(handles));
    rsx! {}
}

#[component]
fn FixtureStores(fixture: Fixture, children: Element) -> Element {
    rsx! {
        ToastProvider {
            StoreProvider {
                session: Session {
                    team: fixture.team.clone(),
                    user: fixture.user.clone(),
                },
                session_loaded: !fixture.session_pending,
                preflight: fixture.preflight.clone(),
                invite_members_modal_open: fixture.invite_members_modal_open,
                fetch: false,
                {children}
            }
        }
    }
}

#[allow(non_snake_case)]
fn HomeHarness(fixture: Fixture) -> Element {
    rsx! {
        FixtureStores { fixture,
            CaptureHandles {}
            Home {}
        }
    }
}

#[allow(non_snake_case)]
fn HeaderHarness(fixture: Fixture) -> Element {
    let hover = use_signal(|| fixture.hovered);
    rsx! {
        FixtureStores { fixture,
            CaptureHandles { hover }
            HeaderCta { hovered: hover }
        }
    }
}

/// A mounted component tree. Creating one performs the initial render only,
/// the way a server render does; [`Mounted::settle`] then runs what a
/// browser would run after mount.
pub struct Mounted {
    dom: VirtualDom,
    slot: HandleSlot,
    pub recorder: Rc<RecordingReporter>,
}

impl Mounted {
    pub fn home(fixture: Fixture) -> Self {
        Self::mount(HomeHarness, fixture)
    }

    pub fn header_cta(fixture: Fixture) -> Self {
        Self::mount(HeaderHarness, fixture)
    }

    fn mount(root: fn(Fixture) -> Element, fixture: Fixture) -> Self {
        let recorder = Rc::new(RecordingReporter::default());
        let slot = HandleSlot::default();

        let mut dom = VirtualDom::new_with_props(root, fixture)
            .with_root_context(EventUsage::new(recorder.clone()))
            .with_root_context(slot.clone());
        dom.rebuild_in_place();

        Self {
            dom,
            slot,
            recorder,
        }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Run queued effects and tasks and re-render dirty scopes until idle.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(Duration::from_millis(20), self.dom.wait_for_work()).await;
            let _ = self.dom.render_immediate_to_vec();
        }
    }

    /// Change store data from outside the tree, as a fetch or a click would.
    pub fn update(&mut self, f: impl FnOnce(Handles)) {
        let handles = (*self.slot.0.borrow()).expect("harness captures store handles on mount");
        self.dom.in_runtime(|| f(handles));
    }
}

/// Render the home page once and return its HTML with the events it reported.
pub fn render_home_with_reporter(fixture: Fixture) -> (String, Rc<RecordingReporter>) {
    let mounted = Mounted::home(fixture);
    (mounted.html(), mounted.recorder)
}

pub fn render_home(fixture: Fixture) -> String {
    render_home_with_reporter(fixture).0
}

/// Analytics keys of the rendered modules, top to bottom.
pub fn module_order(html: &str) -> Vec<String> {
    const MARKER: &str = "data-module=\"";
    html.match_indices(MARKER)
        .filter_map(|(start, _)| {
            let rest = &html[start + MARKER.len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}
