//! This crate contains all shared UI for the workspace.

mod event_usage;
pub use event_usage::{use_event_usage, EventReporter, EventUsage, ServerEventReporter};

mod stores;
pub use stores::{
    use_navigation_store, use_preflight_store, use_team_store, use_user_store, NavigationStore,
    PreflightStore, StoreProvider, TeamStore, UserStore,
};

mod page_header;
pub use page_header::PageHeader;

mod tiles;
pub use tiles::{TileParams, TiledIconModule};

mod invite;
pub use invite::{share_by_email_href, InviteLinkButton, InviteMembersModal};

mod home;
pub use home::{
    community_tiles, discover_insights_tiles, has_data, install_tiles, lesson_tiles,
    page_caption, page_title, tooltip_visible, DiscoverInsightsModule, HeaderCta, Home,
    HomeLayout, HomeModule, InviteControl, NavigationAction, OnceGuard, PostHogLessons,
};

mod theme;
pub use theme::HomeTheme;

mod toast;
pub use toast::{use_toasts, Toast, ToastKind, ToastProvider, Toasts};

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang};

#[cfg(test)]
mod test_support;
