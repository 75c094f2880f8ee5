use dioxus::prelude::*;

#[component]
pub fn PageHeader(title: String, caption: Option<String>, buttons: Element) -> Element {
    rsx! {
        div { class: "page_header",
            div { class: "page_header_text",
                h1 { class: "page_title", "{title}" }
                if let Some(caption) = caption {
                    p { class: "page_caption", "{caption}" }
                }
            }
            div { class: "page_header_buttons", {buttons} }
        }
    }
}
