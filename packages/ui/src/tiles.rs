use dioxus::prelude::*;

const TILES_CSS: Asset = asset!("/assets/styling/tiles.css");

/// One clickable entry in a [`TiledIconModule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileParams {
    /// Glyph shown above the title.
    pub icon: &'static str,
    pub title: String,
    pub target_path: String,
    pub hover_text: String,
    pub open_in_new_tab: bool,
    pub class: Option<&'static str>,
}

impl TileParams {
    pub fn new(
        icon: &'static str,
        title: impl Into<String>,
        target_path: impl Into<String>,
        hover_text: impl Into<String>,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            target_path: target_path.into(),
            hover_text: hover_text.into(),
            open_in_new_tab: false,
            class: None,
        }
    }

    pub fn in_new_tab(mut self) -> Self {
        self.open_in_new_tab = true;
        self
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    fn class_name(&self) -> String {
        match self.class {
            Some(extra) => format!("thumbnail_tile {extra}"),
            None => "thumbnail_tile".to_string(),
        }
    }
}

/// A titled card holding a grid of icon tiles.
#[component]
pub fn TiledIconModule(
    tiles: Vec<TileParams>,
    analytics_module_key: &'static str,
    header: String,
    sub_header: String,
) -> Element {
    let usage = crate::use_event_usage();
    let mut hovered = use_signal(|| None::<usize>);

    rsx! {
        document::Link { rel: "stylesheet", href: TILES_CSS }
        div { class: "home_module", "data-module": analytics_module_key,
            h2 { class: "home_module_header", "{header}" }
            p { class: "home_module_subheader", "{sub_header}" }
            div { class: "tile_grid",
                for (index, tile) in tiles.into_iter().enumerate() {
                    a {
                        key: "{tile.title}",
                        class: tile.class_name(),
                        href: tile.target_path.clone(),
                        target: if tile.open_in_new_tab { "_blank" },
                        rel: if tile.open_in_new_tab { "noopener noreferrer" },
                        "data-attr": "home-tile-{analytics_module_key}-{index}",
                        onmouseenter: move |_| hovered.set(Some(index)),
                        onmouseleave: move |_| hovered.set(None),
                        onclick: {
                            let usage = usage.clone();
                            let title = tile.title.clone();
                            move |_| usage.report_home_tile_clicked(analytics_module_key, &title)
                        },
                        span { class: "tile_icon", "{tile.icon}" }
                        span { class: "tile_title", "{tile.title}" }
                        if hovered() == Some(index) {
                            span { class: "tile_hover_text", "{tile.hover_text}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_default_to_same_tab() {
        let tile = TileParams::new("🚀", "Install", "/ingestion", "hover");
        assert!(!tile.open_in_new_tab);
        assert_eq!(tile.class, None);
        assert_eq!(tile.class_name(), "thumbnail_tile");
    }

    #[test]
    fn tile_builders_set_flags() {
        let tile = TileParams::new("🐙", "Code", "https://example.com", "hover")
            .in_new_tab()
            .with_class("thumbnail-tile-install");
        assert!(tile.open_in_new_tab);
        assert_eq!(tile.class_name(), "thumbnail_tile thumbnail-tile-install");
    }
}
