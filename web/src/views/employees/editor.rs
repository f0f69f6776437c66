use dioxus::prelude::*;
use types::{Employee, EmployeeFormData, FieldErrors, FormTab};
use ui::{Button, ButtonVariant};
use uuid::Uuid;

use super::tab_nav::TabNav;
use super::tabs::{AttendanceTab, CompensationTab, ContractTab, PersonalTab};

/// Form state shared by every tab of one edit session.
#[derive(Clone, Copy)]
pub struct FormState {
    pub data: Signal<EmployeeFormData>,
    pub errors: Signal<FieldErrors>,
}

impl FormState {
    pub fn new(initial: EmployeeFormData) -> Self {
        Self {
            data: Signal::new(initial),
            errors: Signal::new(FieldErrors::default()),
        }
    }
}

pub fn use_form_state() -> FormState {
    use_context::<FormState>()
}

#[component]
pub fn EmployeeEditor(
    employee_id: Uuid,
    initial: EmployeeFormData,
    view_only: bool,
    #[props(default = "Save Changes".to_string())] submit_label: String,
    on_save: EventHandler<Employee>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_context_provider(|| FormState::new(initial.clone()));
    let mut selected = use_signal(FormTab::default);

    // Leaving edit mode drops whatever was typed but not saved
    use_effect(use_reactive((&view_only, &initial), move |(view_only, initial)| {
        if view_only {
            form.data.set(initial);
            form.errors.set(FieldErrors::default());
        }
    }));
    let tab = selected();
    let errors = form.errors.read().clone();

    let panel = match tab {
        FormTab::Personal => rsx! { PersonalTab { is_view_only: view_only } },
        FormTab::Contract => rsx! { ContractTab { is_view_only: view_only } },
        FormTab::Attendance => rsx! { AttendanceTab { is_view_only: view_only } },
        FormTab::Compensation => rsx! { CompensationTab { is_view_only: view_only } },
    };

    rsx! {
        form { class: "employee-form",
            onsubmit: move |e| {
                e.prevent_default();
                if view_only {
                    return;
                }
                let result = form.data.read().to_employee(employee_id);
                match result {
                    Ok(employee) => {
                        form.errors.set(FieldErrors::default());
                        on_save.call(employee);
                    }
                    Err(errors) => {
                        tracing::debug!(count = errors.len(), "employee form has errors");
                        if let Some(first) = errors.first_tab() {
                            selected.set(first);
                        }
                        form.errors.set(errors);
                    }
                }
            },

            TabNav {
                selected: tab,
                on_change: move |next: FormTab| {
                    tracing::debug!(tab = %next, "switched form tab");
                    selected.set(next);
                },
            }

            div { class: "tab-panel", role: "tabpanel", {panel} }

            if !errors.is_empty() {
                div { class: "alert alert-error form-errors",
                    p { "Please fix the following before saving:" }
                    ul {
                        for (field, error) in errors.iter() {
                            li { key: "{field}",
                                strong { "{error.tab.label()}: " }
                                "{error.message}"
                            }
                        }
                    }
                }
            }

            if !view_only {
                div { class: "form-footer",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            form.data.set(initial.clone());
                            form.errors.set(FieldErrors::default());
                            on_cancel.call(());
                        },
                        "Cancel"
                    }
                    Button { submit: true, "{submit_label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::testing::{listeners, settle, type_into};

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn form() -> EmployeeFormData {
        let mut data = EmployeeFormData::default();
        data.personal.full_name = "Jane Doe".into();
        data.personal.email = "jane@example.com".into();
        data
    }

    #[test]
    fn view_only_disables_inputs_and_hides_actions() {
        fn app() -> Element {
            rsx! {
                EmployeeEditor {
                    employee_id: Uuid::from_u128(1),
                    initial: form(),
                    view_only: true,
                    on_save: move |_| {},
                    on_cancel: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Jane Doe"), "{html}");
        assert!(html.contains("disabled"));
        assert!(!html.contains("form-footer"));
    }

    #[test]
    fn editable_form_starts_on_personal_tab() {
        fn app() -> Element {
            rsx! {
                EmployeeEditor {
                    employee_id: Uuid::from_u128(1),
                    initial: form(),
                    view_only: false,
                    submit_label: "Create Employee",
                    on_save: move |_| {},
                    on_cancel: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(!html.contains("disabled"), "{html}");
        assert!(html.contains("Create Employee"));
        assert!(html.contains("id=\"full_name\""));
        assert!(!html.contains("id=\"badge_no\""));
    }

    thread_local! {
        static VIEW_ONLY: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
    }

    #[test]
    fn leaving_edit_mode_discards_unsaved_typing() {
        fn app() -> Element {
            let view_only = use_signal(|| false);
            use_hook(|| VIEW_ONLY.with(|cell| cell.set(Some(view_only))));
            rsx! {
                EmployeeEditor {
                    employee_id: Uuid::from_u128(1),
                    initial: form(),
                    view_only: view_only(),
                    on_save: move |_| {},
                    on_cancel: move |_| {},
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        let inputs = listeners(&dom.rebuild_to_vec(), "input");
        let full_name = inputs[0];

        type_into(&dom, full_name, "Changed Name");
        let html = settle(&mut dom);
        assert!(html.contains("Changed Name"), "{html}");

        let mut view_only = VIEW_ONLY.with(Cell::get).unwrap();
        dom.in_runtime(|| view_only.set(true));
        let html = settle(&mut dom);

        assert!(html.contains("Jane Doe"), "{html}");
        assert!(!html.contains("Changed Name"));
        assert!(html.contains("disabled"));
    }
}
