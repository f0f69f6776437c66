use dioxus::prelude::*;
use ui::{Avatar, AvatarSize, Button, ButtonVariant, Card, CardBody, CardHeader};

use crate::auth::use_auth;
use crate::config::CONFIG;
use crate::layout::use_is_narrow;

#[component]
pub fn Settings() -> Element {
    let mut auth = use_auth();
    let narrow = use_is_narrow();
    let version = env!("CARGO_PKG_VERSION");
    let Some(session) = auth.session() else {
        return rsx! {};
    };

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Settings" }
            }

            Card {
                CardHeader { title: "Profile" }
                CardBody {
                    div { class: "profile-summary",
                        Avatar { initials: session.initials(), size: AvatarSize::Medium }
                        div {
                            div { class: "profile-name", "{session.display_name}" }
                            div { class: "profile-email", "{session.email}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| auth.sign_out(),
                        "Sign out"
                    }
                }
            }

            Card {
                CardHeader { title: "About" }
                CardBody {
                    dl { class: "info-list",
                        dt { "Application" }
                        dd { "{CONFIG.app_name}" }
                        dt { "Version" }
                        dd { "{version}" }
                        dt { "Layout" }
                        dd { if narrow { "Compact" } else { "Full" } }
                    }
                }
            }
        }
    }
}
