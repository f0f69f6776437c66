use dioxus::prelude::*;
use ui::LoadingSpinner;

use crate::Route;
use crate::auth::use_auth;

/// What a guarded route shows for a given auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Redirect,
    Render,
}

impl GuardDecision {
    pub fn from_state(loading: bool, authenticated: bool) -> Self {
        if loading {
            GuardDecision::Loading
        } else if authenticated {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect
        }
    }

    /// Where to send the user, if anywhere.
    pub fn redirect(self) -> Option<Route> {
        match self {
            GuardDecision::Redirect => Some(Route::Login {}),
            GuardDecision::Loading | GuardDecision::Render => None,
        }
    }
}

/// Layout for routes that need a signed-in user. Unauthenticated visitors are
/// sent to the login page, replacing the current history entry.
#[component]
pub fn RequireAuth() -> Element {
    let auth = use_auth();
    let decision = GuardDecision::from_state(auth.is_loading(), auth.is_authenticated());

    use_effect(move || {
        let decision = GuardDecision::from_state(auth.is_loading(), auth.is_authenticated());
        if let Some(target) = decision.redirect() {
            tracing::info!(to = %target, "redirecting unauthenticated visitor");
            navigator().replace(target);
        }
    });

    match decision {
        GuardDecision::Loading => rsx! {
            div { class: "guard-loading",
                LoadingSpinner { label: "Checking your session..." }
            }
        },
        GuardDecision::Redirect => rsx! {},
        GuardDecision::Render => rsx! {
            Outlet::<Route> {}
        },
    }
}
