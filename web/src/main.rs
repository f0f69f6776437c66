use dioxus::prelude::*;

mod auth;
mod config;
mod guard;
mod layout;
mod storage;
mod store;
#[cfg(test)]
mod testing;
mod views;

use auth::AuthProvider;
use config::CONFIG;
use guard::RequireAuth;
use layout::AppShell;
use store::EmployeeStore;
use types::Error;
use uuid::Uuid;
use views::{
    Activity, Dashboard, EmployeeDetail, EmployeeList, Home, Leave, Login, NotFound, Payroll,
    Settings, Signup,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(RequireAuth)]
        #[layout(AppShell)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/employees")]
            EmployeeList {},
            #[route("/employees/:employee_id?:edit")]
            EmployeeDetail { employee_id: Uuid, edit: bool },
            #[route("/payroll")]
            Payroll {},
            #[route("/leave")]
            Leave {},
            #[route("/activity")]
            Activity {},
            #[route("/settings")]
            Settings {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn employee(employee_id: Uuid) -> Self {
        Route::EmployeeDetail {
            employee_id,
            edit: false,
        }
    }

    pub fn edit_employee(employee_id: Uuid) -> Self {
        Route::EmployeeDetail {
            employee_id,
            edit: true,
        }
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(error) = dioxus::logger::init(level) {
        eprintln!("failed to install logger: {error}");
    }
    tracing::info!(app = %CONFIG.app_name, "starting");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(EmployeeStore::from_config);

    rsx! {
        document::Title { "{CONFIG.app_name}" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Errors shown above the page content - use `use_error()` to access.
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<Error>>);

impl ErrorState {
    pub fn set(&mut self, error: impl Into<Error>) {
        let error = error.into();
        tracing::warn!(%error, "showing error");
        self.0.set(Some(error));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the page error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_error();
    let error = error_state.0.read();

    let Some(err) = error.as_ref() else {
        return rsx! {};
    };

    rsx! {
        div { class: "error-banner", role: "alert",
            div { class: "error-banner-header",
                span { class: "error-banner-message", "{err.message}" }
                button {
                    class: "error-banner-close",
                    r#type: "button",
                    aria_label: "Dismiss",
                    onclick: move |_| error_state.clear(),
                    "×"
                }
            }
            if err.has_causes() {
                ol { class: "error-chain-list",
                    for (i, cause) in err.chain.iter().skip(1).enumerate() {
                        li { key: "{i}", class: "error-chain-item", "{cause}" }
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
    fn routes_render_their_paths() {
        let id = Uuid::from_u128(0xfeed);
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::Payroll {}.to_string(), "/payroll");
        assert!(Route::employee(id).to_string().starts_with(&format!("/employees/{id}")));
    }

    #[test]
    fn paths_resolve_to_routes() {
        assert_eq!("/payroll".parse::<Route>().ok(), Some(Route::Payroll {}));
        assert_eq!("/settings".parse::<Route>().ok(), Some(Route::Settings {}));
        assert!(matches!(
            "/no/such/page".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
