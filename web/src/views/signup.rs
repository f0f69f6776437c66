use dioxus::prelude::*;
use types::{Credentials, account::MIN_PASSWORD_LEN};

use crate::Route;
use crate::auth::use_auth;
use crate::config::CONFIG;

use super::login::use_redirect_when_signed_in;

#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    use_redirect_when_signed_in();

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "{CONFIG.app_name}" }
                    p { class: "login-subtitle", "Create your account" }
                }
                form {
                    class: "login-form",
                    onsubmit: move |e| {
                        e.prevent_default();
                        if password() != confirm() {
                            error.set(Some("Passwords do not match".into()));
                            return;
                        }
                        let credentials = Credentials::new(email(), password());
                        match auth.sign_up(&name(), &credentials) {
                            Ok(_) => error.set(None),
                            Err(err) => error.set(Some(err.message)),
                        }
                    },
                    if let Some(message) = error() {
                        div { class: "alert alert-error", role: "alert", "{message}" }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "name", "Name" }
                        input {
                            id: "name",
                            class: "form-input",
                            autocomplete: "name",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
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
                            autocomplete: "new-password",
                            placeholder: "At least {MIN_PASSWORD_LEN} characters",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "confirm", "Confirm password" }
                        input {
                            id: "confirm",
                            class: "form-input",
                            r#type: "password",
                            autocomplete: "new-password",
                            value: "{confirm}",
                            oninput: move |e| confirm.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Create account"
                    }
                }
                p { class: "login-footer",
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
