use dioxus::prelude::*;
use ui::{Button, ButtonVariant};

#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    #[props(default)] disabled: bool,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: "form-input",
                r#type: "{kind}",
                placeholder: "{placeholder}",
                disabled,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// A dropdown over fixed options. A stored value outside the options is still shown.
#[component]
pub fn SelectField(
    id: String,
    label: String,
    value: String,
    options: Vec<String>,
    #[props(default)] disabled: bool,
    onchange: EventHandler<String>,
) -> Element {
    let unlisted = !value.is_empty() && !options.contains(&value);

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                class: "form-select",
                disabled,
                value: "{value}",
                onchange: move |e| onchange.call(e.value()),
                option { value: "", selected: value.is_empty(), "Select..." }
                if unlisted {
                    option { value: "{value}", selected: true, "{value}" }
                }
                for opt in options.iter() {
                    option { key: "{opt}", value: "{opt}", selected: *opt == value, "{opt}" }
                }
            }
        }
    }
}

#[component]
pub fn CheckboxField(
    id: String,
    label: String,
    checked: bool,
    #[props(default)] disabled: bool,
    onchange: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "form-group form-group-inline",
            label { class: "checkbox-label", r#for: "{id}",
                input {
                    id: "{id}",
                    r#type: "checkbox",
                    checked,
                    disabled,
                    onchange: move |e| onchange.call(e.checked()),
                }
                span { "{label}" }
            }
        }
    }
}

/// Turn a static option list into the owned form `SelectField` takes.
pub fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: if wide { "modal modal-lg" } else { "modal modal-sm" },
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn DeleteConfirmModal(
    employee_name: String,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { title: "Delete Employee", on_close,
            div { class: "modal-body",
                p { "Are you sure you want to delete " strong { "{employee_name}" } "?" }
                p { class: "text-muted", "This action cannot be undone." }
            }
            div { class: "modal-footer",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_confirm.call(()),
                    "Delete"
                }
            }
        }
    }
}
