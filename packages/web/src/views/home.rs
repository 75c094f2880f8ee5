use dioxus::prelude::*;

#[component]
pub fn ProjectHome() -> Element {
    rsx! { ui::Home {} }
}
