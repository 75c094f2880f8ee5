use dioxus::prelude::*;

use crate::{t, use_lang, Lang, TileParams, TiledIconModule};

pub fn discover_insights_tiles(lang: Lang) -> Vec<TileParams> {
    vec![
        TileParams::new(
            "📈",
            t(lang, "discover.trends.title"),
            "/insights?insight=TRENDS",
            t(lang, "discover.trends.hover"),
        ),
        TileParams::new(
            "🔻",
            t(lang, "discover.funnels.title"),
            "/insights?insight=FUNNELS",
            t(lang, "discover.funnels.hover"),
        ),
        TileParams::new(
            "🧭",
            t(lang, "discover.paths.title"),
            "/insights?insight=PATHS",
            t(lang, "discover.paths.hover"),
        ),
        TileParams::new(
            "🔁",
            t(lang, "discover.retention.title"),
            "/insights?insight=RETENTION",
            t(lang, "discover.retention.hover"),
        ),
    ]
}

#[component]
pub fn DiscoverInsightsModule() -> Element {
    let lang = use_lang()();
    rsx! {
        TiledIconModule {
            tiles: discover_insights_tiles(lang),
            analytics_module_key: "discover_insights",
            header: t(lang, "discover.header"),
            sub_header: t(lang, "discover.subheader"),
        }
    }
}
