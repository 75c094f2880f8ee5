use api::types::Preflight;
use dioxus::prelude::*;

use crate::stores::NavigationStore;
use crate::{t, use_lang, use_navigation_store, use_preflight_store, InviteLinkButton};

/// The invite control shown in the home page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteControl {
    /// Email is configured: open the invite-members modal.
    PrimaryButton,
    /// No email delivery: hand out a shareable invite link instead.
    InviteLinkWidget,
}

impl InviteControl {
    pub fn for_email_available(email_service_available: bool) -> Self {
        if email_service_available {
            InviteControl::PrimaryButton
        } else {
            InviteControl::InviteLinkWidget
        }
    }

    pub fn for_preflight(preflight: Option<&Preflight>) -> Self {
        Self::for_email_available(
            preflight
                .and_then(|p| p.email_service_available)
                .unwrap_or(false),
        )
    }

    /// Navigation change requested when the control is clicked. The link
    /// widget manages its own modal.
    pub fn click_action(self) -> Option<NavigationAction> {
        match self {
            InviteControl::PrimaryButton => Some(NavigationAction::SetInviteMembersModalOpen(true)),
            InviteControl::InviteLinkWidget => None,
        }
    }

    pub fn click(self, navigation: &NavigationStore) {
        if let Some(action) = self.click_action() {
            action.apply(navigation);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    SetInviteMembersModalOpen(bool),
}

impl NavigationAction {
    pub fn apply(self, navigation: &NavigationStore) {
        match self {
            NavigationAction::SetInviteMembersModalOpen(open) => {
                navigation.set_invite_members_modal_open(open)
            }
        }
    }
}

/// The hint only shows while hovered, and never on top of the invite modal.
pub fn tooltip_visible(hovered: bool, invite_modal_open: bool) -> bool {
    hovered && !invite_modal_open
}

/// The header invite control with its hover hint. Pass `hovered` to own the
/// hover state from outside.
#[component]
pub fn HeaderCta(hovered: Option<Signal<bool>>) -> Element {
    let lang = use_lang()();
    let navigation = use_navigation_store();
    let preflight = use_preflight_store();
    let local_hover = use_signal(|| false);
    let mut show_tooltip = hovered.unwrap_or(local_hover);

    let control = InviteControl::for_email_available(preflight.email_service_available());
    let visible = tooltip_visible(show_tooltip(), navigation.invite_members_modal_open());

    rsx! {
        div { class: "space_vertical",
            div {
                div {
                    class: if visible { "tooltip tooltip_bottom tooltip_visible" } else { "tooltip tooltip_bottom" },
                    match control {
                        InviteControl::PrimaryButton => rsx! {
                            button {
                                class: "btn primary block",
                                "data-attr": "project-home-invite-team-members",
                                onmouseenter: move |_| show_tooltip.set(true),
                                onmouseleave: move |_| show_tooltip.set(false),
                                onclick: move |_| control.click(&navigation),
                                span { class: "btn_icon", "👤" }
                                {t(lang, "invite.cta")}
                            }
                        },
                        InviteControl::InviteLinkWidget => rsx! {
                            InviteLinkButton {
                                block: true,
                                onmouseenter: move |_| show_tooltip.set(true),
                                onmouseleave: move |_| show_tooltip.set(false),
                            }
                        },
                    }
                    if visible {
                        div { class: "tooltip_content", role: "tooltip", {t(lang, "invite.tooltip")} }
                    }
                }
            }
        }
    }
}
