use dioxus::prelude::*;

use crate::{t, use_lang, use_navigation_store, use_toasts, Lang};

/// `mailto:` link that drafts an invite email containing `link`.
pub fn share_by_email_href(lang: Lang, link: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&t(lang, "invite.email_subject")),
        urlencoding::encode(link)
    )
}

/// Invite-by-link control used when the server cannot send email: a button
/// that opens its own modal with a fresh signup link.
#[component]
pub fn InviteLinkButton(
    #[props(default)] block: bool,
    onmouseenter: Option<EventHandler<MouseEvent>>,
    onmouseleave: Option<EventHandler<MouseEvent>>,
) -> Element {
    let lang = use_lang()();
    let mut open = use_signal(|| false);

    rsx! {
        button {
            class: if block { "btn primary block invite_link_button" } else { "btn primary invite_link_button" },
            "data-attr": "invite-link-button",
            onmouseenter: move |evt: MouseEvent| {
                if let Some(handler) = onmouseenter {
                    handler.call(evt);
                }
            },
            onmouseleave: move |evt: MouseEvent| {
                if let Some(handler) = onmouseleave {
                    handler.call(evt);
                }
            },
            onclick: move |_| open.set(true),
            span { class: "btn_icon", "👤" }
            {t(lang, "invite.cta")}
        }
        if open() {
            InviteModal { onclose: move |_| open.set(false) }
        }
    }
}

/// The invite-members modal owned by the navigation store.
#[component]
pub fn InviteMembersModal() -> Element {
    let navigation = use_navigation_store();

    rsx! {
        if navigation.invite_members_modal_open() {
            InviteModal { onclose: move |_| navigation.set_invite_members_modal_open(false) }
        }
    }
}

#[component]
fn InviteModal(onclose: EventHandler<()>) -> Element {
    let lang = use_lang()();
    let toasts = use_toasts();

    let link = use_resource(move || async move {
        let result = api::create_invite_link().await;
        if let Err(e) = &result {
            toasts.error(t(lang, "invite.link.error"), Some(e.to_string()));
        }
        result.map_err(|e| e.to_string())
    });

    rsx! {
        div { class: "modal_backdrop", onclick: move |_| onclose.call(()),
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                h3 { {t(lang, "invite.modal.title")} }
                p { class: "hint", {t(lang, "invite.modal.body")} }
                match link() {
                    None => rsx! { p { class: "hint", {t(lang, "invite.link.loading")} } },
                    Some(Err(err)) => rsx! {
                        p { class: "error", {format!("{} {err}", t(lang, "common.error_prefix"))} }
                    },
                    Some(Ok(url)) => rsx! {
                        input { class: "invite_link_input", readonly: true, value: "{url}" }
                        a { class: "btn", href: share_by_email_href(lang, &url), {t(lang, "invite.share_email")} }
                    },
                }
                div { class: "modal_footer",
                    button { class: "btn", onclick: move |_| onclose.call(()), {t(lang, "common.close")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_link_is_url_encoded() {
        let href = share_by_email_href(Lang::En, "https://app.example.com/signup/abc?x=1&y=2");
        assert_eq!(
            href,
            "mailto:?subject=Join%20me%20on%20PostHog&body=https%3A%2F%2Fapp.example.com%2Fsignup%2Fabc%3Fx%3D1%26y%3D2"
        );
    }
}
