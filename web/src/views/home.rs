use dioxus::prelude::*;

use crate::Route;
use crate::auth::use_auth;
use crate::config::CONFIG;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();

    rsx! {
        div { class: "landing-page",
            div { class: "landing-hero",
                h1 { class: "landing-title", "{CONFIG.app_name}" }
                p { class: "landing-subtitle",
                    "Employee records, contracts and attendance settings in one place."
                }
                div { class: "landing-actions",
                    if auth.is_authenticated() {
                        Link {
                            to: Route::Dashboard {},
                            class: "btn btn-primary",
                            "Go to dashboard"
                        }
                    } else {
                        Link { to: Route::Login {}, class: "btn btn-primary", "Sign in" }
                        Link {
                            to: Route::Signup {},
                            class: "btn btn-secondary",
                            "Create an account"
                        }
                    }
                }
            }
        }
    }
}
