use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let lang = ui::use_lang()();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "not_found",
            h1 { {ui::t(lang, "notfound.title")} }
            p { class: "hint", "{path}" }
            a { class: "btn primary", href: "/", {ui::t(lang, "notfound.back")} }
        }
    }
}
