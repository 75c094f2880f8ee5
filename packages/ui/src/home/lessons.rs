use dioxus::prelude::*;

use crate::{t, use_lang, Lang, TileParams, TiledIconModule};

pub fn lesson_tiles(lang: Lang) -> Vec<TileParams> {
    vec![
        TileParams::new(
            "🎯",
            t(lang, "lessons.actions.title"),
            "https://posthog.com/docs/user-guides/actions",
            t(lang, "lessons.actions.hover"),
        )
        .in_new_tab(),
        TileParams::new(
            "👥",
            t(lang, "lessons.cohorts.title"),
            "https://posthog.com/docs/user-guides/cohorts",
            t(lang, "lessons.cohorts.hover"),
        )
        .in_new_tab(),
        TileParams::new(
            "🚩",
            t(lang, "lessons.flags.title"),
            "https://posthog.com/docs/user-guides/feature-flags",
            t(lang, "lessons.flags.hover"),
        )
        .in_new_tab(),
    ]
}

#[component]
pub fn PostHogLessons() -> Element {
    let lang = use_lang()();
    rsx! {
        TiledIconModule {
            tiles: lesson_tiles(lang),
            analytics_module_key: "lessons",
            header: t(lang, "lessons.header"),
            sub_header: t(lang, "lessons.subheader"),
        }
    }
}
