use dioxus::prelude::*;
use types::UserSession;
use ui::{Avatar, AvatarSize, Button, ButtonVariant};

use crate::auth::use_auth;
use crate::config::CONFIG;
use crate::{ErrorBanner, ErrorState, Route};

/// Width of the content region, as last reported by the browser.
#[derive(Clone, Copy)]
pub struct Viewport {
    width: Signal<f64>,
}

impl Viewport {
    pub fn new(width: Signal<f64>) -> Self {
        Viewport { width }
    }

    pub fn is_narrow(&self) -> bool {
        is_narrow(*self.width.read(), CONFIG.mobile_breakpoint)
    }
}

/// Unknown (zero) widths count as wide.
fn is_narrow(width: f64, breakpoint: f64) -> bool {
    width > 0.0 && width < breakpoint
}

/// Whether the compact layout applies. Outside the shell there is no viewport and it never does.
pub fn use_is_narrow() -> bool {
    try_use_context::<Viewport>().is_some_and(|viewport| viewport.is_narrow())
}

#[component]
pub fn AppShell() -> Element {
    let auth = use_auth();
    let mut width = use_signal(|| 0.0);
    use_context_provider(|| Viewport::new(width));
    use_context_provider(|| ErrorState(Signal::new(None)));

    // The guard only renders this layout for a signed-in user.
    let Some(session) = auth.session() else {
        return rsx! {};
    };

    rsx! {
        div { class: "app-layout",
            onresize: move |e| {
                if let Ok(size) = e.get_border_box_size() {
                    width.set(size.width);
                }
            },
            NavBar { session }
            main { class: "main-content",
                ErrorBanner {}
                Outlet::<Route> {}
            }
        }
    }
}

fn nav_items() -> [(Route, &'static str); 6] {
    [
        (Route::Dashboard {}, "Dashboard"),
        (Route::EmployeeList {}, "Employees"),
        (Route::Payroll {}, "Payroll"),
        (Route::Leave {}, "Leave"),
        (Route::Activity {}, "Activity"),
        (Route::Settings {}, "Settings"),
    ]
}

#[component]
fn NavBar(session: UserSession) -> Element {
    let mut auth = use_auth();
    let narrow = use_is_narrow();
    let mut menu_open = use_signal(|| false);
    let show_links = !narrow || menu_open();

    rsx! {
        header { class: "navbar",
            div { class: "navbar-brand",
                Link { to: Route::Dashboard {}, class: "navbar-logo", "{CONFIG.app_name}" }
                if narrow {
                    button {
                        class: "navbar-toggle",
                        r#type: "button",
                        aria_label: "Toggle navigation",
                        onclick: move |_| menu_open.set(!menu_open()),
                        "☰"
                    }
                }
            }
            if show_links {
                nav { class: "navbar-nav",
                    onclick: move |_| menu_open.set(false),
                    for (to, label) in nav_items() {
                        NavLink { key: "{label}", to, "{label}" }
                    }
                }
            }
            div { class: "navbar-user",
                Avatar { initials: session.initials(), size: AvatarSize::Small }
                if !narrow {
                    div { class: "navbar-user-info",
                        div { class: "navbar-user-name", "{session.display_name}" }
                        div { class: "navbar-user-email", "{session.email}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "navbar-logout",
                    onclick: move |_| auth.sign_out(),
                    "Sign out"
                }
            }
        }
    }
}

/// Whether `current` belongs to the nav section headed by `target`.
fn same_section(current: &Route, target: &Route) -> bool {
    match (current, target) {
        (Route::EmployeeDetail { .. }, Route::EmployeeList {}) => true,
        _ => std::mem::discriminant(current) == std::mem::discriminant(target),
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = same_section(&current_route, &to);

    rsx! {
        Link {
            to,
            class: if is_active { "nav-link active" } else { "nav-link" },
            {children}
        }
    }
}
