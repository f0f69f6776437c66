use dioxus::prelude::*;
use secrecy::ExposeSecret;
use types::Credentials;

use crate::Route;
use crate::auth::use_auth;
use crate::config::CONFIG;

/// Send a signed-in visitor on to the dashboard instead of showing the form.
pub fn use_redirect_when_signed_in() {
    let auth = use_auth();
    use_effect(move || {
        if auth.is_authenticated() {
            tracing::info!("already signed in, leaving auth page");
            navigator().replace(Route::Dashboard {});
        }
    });
}

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    use_redirect_when_signed_in();

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "{CONFIG.app_name}" }
                    p { class: "login-subtitle", "Sign in to continue" }
                }
                form {
                    class: "login-form",
                    onsubmit: move |e| {
                        e.prevent_default();
                        let credentials = Credentials::new(email(), password());
                        match auth.sign_in(&credentials) {
                            Ok(_) => error.set(None),
                            Err(err) => {
                                password.set(String::new());
                                error.set(Some(err.message));
                            }
                        }
                    },
                    if let Some(message) = error() {
                        div { class: "alert alert-error", role: "alert", "{message}" }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            autocomplete: "username",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button { r#type: "submit", class: "btn btn-primary login-btn", "Sign in" }
                }
                if let Some(demo) = &CONFIG.demo_account {
                    p { class: "login-hint",
                        "Demo account: "
                        code { "{demo.email}" }
                        " / "
                        code { "{demo.password.expose_secret()}" }
                    }
                }
                p { class: "login-footer",
                    "No account yet? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
