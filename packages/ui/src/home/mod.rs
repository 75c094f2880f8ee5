//! The project home: a header with an invite call-to-action and a body
//! chosen by whether the team has sent any events yet.

mod discover_insights;
mod header_cta;
mod lessons;

use std::cell::Cell;
use std::rc::Rc;

use api::types::{Team, User};
use dioxus::prelude::*;

pub use discover_insights::{discover_insights_tiles, DiscoverInsightsModule};
pub use header_cta::{tooltip_visible, HeaderCta, InviteControl, NavigationAction};
pub use lessons::{lesson_tiles, PostHogLessons};

use crate::{
    t, use_event_usage, use_lang, use_team_store, use_user_store, Lang, PageHeader, TileParams,
    TiledIconModule,
};

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

const SLACK_URL: &str = "https://posthog.com/slack?s=app&utm_content=project-home";
const GITHUB_URL: &str = "https://github.com/PostHog/posthog";
const INGESTION_PATH: &str = "/ingestion";

/// Whether the user's team has ever ingested an event. Any missing link in
/// `user.team.ingested_event` counts as no data.
pub fn has_data(user: Option<&User>) -> bool {
    user.map(User::team_ingested_event).unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeModule {
    Install,
    DiscoverInsights,
    Lessons,
    Community,
}

impl HomeModule {
    pub fn analytics_key(self) -> &'static str {
        match self {
            HomeModule::Install => "install",
            HomeModule::DiscoverInsights => "discover_insights",
            HomeModule::Lessons => "lessons",
            HomeModule::Community => "community",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeLayout {
    TeamHasEvents,
    TeamNeedsEvents,
}

impl HomeLayout {
    pub fn for_has_data(has_data: bool) -> Self {
        if has_data {
            HomeLayout::TeamHasEvents
        } else {
            HomeLayout::TeamNeedsEvents
        }
    }

    pub fn modules(self) -> [HomeModule; 3] {
        match self {
            HomeLayout::TeamHasEvents => [
                HomeModule::DiscoverInsights,
                HomeModule::Lessons,
                HomeModule::Community,
            ],
            HomeLayout::TeamNeedsEvents => [
                HomeModule::Install,
                HomeModule::Community,
                HomeModule::Lessons,
            ],
        }
    }
}

/// `"<team name> Home"`, with an empty name when no team is loaded.
pub fn page_title(lang: Lang, team: Option<&Team>) -> String {
    let name = team.and_then(|team| team.name.as_deref()).unwrap_or("");
    format!("{name} {}", t(lang, "home.title_suffix"))
}

pub fn page_caption(lang: Lang, has_data: bool) -> Option<String> {
    (!has_data).then(|| t(lang, "home.caption"))
}

pub fn community_tiles(lang: Lang) -> Vec<TileParams> {
    vec![
        TileParams::new(
            "💬",
            t(lang, "community.slack.title"),
            SLACK_URL,
            t(lang, "community.slack.hover"),
        )
        .in_new_tab(),
        TileParams::new(
            "🐙",
            t(lang, "community.github.title"),
            GITHUB_URL,
            t(lang, "community.github.hover"),
        )
        .in_new_tab(),
    ]
}

pub fn install_tiles(lang: Lang) -> Vec<TileParams> {
    vec![TileParams::new(
        "🚀",
        t(lang, "install.tile.title"),
        INGESTION_PATH,
        t(lang, "install.tile.hover"),
    )
    .with_class("thumbnail-tile-install")]
}

/// Runs its closure the first time [`OnceGuard::run`] is called and never
/// again.
#[derive(Debug, Default)]
pub struct OnceGuard {
    done: Cell<bool>,
}

impl OnceGuard {
    /// Returns whether `f` ran.
    pub fn run(&self, f: impl FnOnce()) -> bool {
        if self.done.replace(true) {
            return false;
        }
        f();
        true
    }
}

#[component]
pub fn Home() -> Element {
    let lang = use_lang()();
    let team_store = use_team_store();
    let user_store = use_user_store();
    let usage = use_event_usage();

    let team = team_store.current_team();
    let team_has_data = has_data(user_store.user().as_ref());

    // After the first commit, once the session has settled. Never on the server.
    let seen = use_hook(|| Rc::new(OnceGuard::default()));
    use_effect(move || {
        if !user_store.loaded() {
            return;
        }
        let team_has_data = has_data(user_store.user().as_ref());
        seen.run(|| usage.report_home_screen_seen(team_has_data));
    });

    let layout = HomeLayout::for_has_data(team_has_data);

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }
        div { class: "home_container",
            div { class: "space_vertical",
                PageHeader {
                    title: page_title(lang, team.as_ref()),
                    caption: page_caption(lang, team_has_data),
                    buttons: rsx! { HeaderCta {} },
                }
                main { class: "home_content space_vertical",
                    for module in layout.modules() {
                        HomeModuleView { key: "{module:?}", module }
                    }
                }
            }
        }
    }
}

#[component]
fn HomeModuleView(module: HomeModule) -> Element {
    let lang = use_lang()();
    match module {
        HomeModule::DiscoverInsights => rsx! { DiscoverInsightsModule {} },
        HomeModule::Lessons => rsx! { PostHogLessons {} },
        HomeModule::Community => rsx! {
            TiledIconModule {
                tiles: community_tiles(lang),
                analytics_module_key: HomeModule::Community.analytics_key(),
                header: t(lang, "community.header"),
                sub_header: t(lang, "community.subheader"),
            }
        },
        HomeModule::Install => rsx! {
            TiledIconModule {
                tiles: install_tiles(lang),
                analytics_module_key: HomeModule::Install.analytics_key(),
                header: t(lang, "install.header"),
                sub_header: t(lang, "install.subheader"),
            }
        },
    }
}
