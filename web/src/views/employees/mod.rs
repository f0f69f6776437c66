mod card;
mod detail;
mod editor;
mod tab_nav;
mod tabs;

pub use detail::EmployeeDetail;

use dioxus::prelude::*;
use types::{Employee, EmployeeFormData, EmploymentStatus};
use ui::Button;
use uuid::Uuid;

use crate::Route;
use crate::store::use_employees;
use crate::use_error;
use crate::views::components::{DeleteConfirmModal, Modal};

use card::EmployeeCard;
use editor::EmployeeEditor;

#[component]
pub fn EmployeeList() -> Element {
    let mut store = use_employees();
    let mut error_state = use_error();
    let mut query = use_signal(String::new);
    let mut status_filter = use_signal(|| None::<EmploymentStatus>);
    let mut show_create = use_signal(|| false);
    let mut pending_delete = use_signal(|| None::<Uuid>);

    let employees = store.search(&query.read(), status_filter.read().as_ref());
    let filter_value = status_filter
        .read()
        .as_ref()
        .map(|s| s.label().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Employees" }
                    p { class: "page-subtitle", "Browse, update and remove employee records." }
                }
                div { class: "page-header-actions",
                    Button { onclick: move |_| show_create.set(true), "Add Employee" }
                }
            }

            div { class: "toolbar",
                input {
                    class: "form-input toolbar-search",
                    r#type: "search",
                    placeholder: "Search by name, title, department or email",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                select {
                    class: "form-select toolbar-filter",
                    aria_label: "Filter by status",
                    value: "{filter_value}",
                    onchange: move |e| {
                        let value = e.value();
                        let status = (!value.is_empty()).then(|| EmploymentStatus::from(value));
                        status_filter.set(status);
                    },
                    option { value: "", selected: filter_value.is_empty(), "All statuses" }
                    for status in EmploymentStatus::KNOWN {
                        option {
                            key: "{status}",
                            value: "{status}",
                            selected: filter_value == status.label(),
                            "{status}"
                        }
                    }
                }
            }

            if employees.is_empty() {
                div { class: "empty-state",
                    p { "No employees match your search." }
                }
            } else {
                div { class: "employee-grid",
                    for employee in employees {
                        EmployeeCard {
                            key: "{employee.id}",
                            employee: employee.clone(),
                            on_view: move |id| {
                                navigator().push(Route::employee(id));
                            },
                            on_edit: move |id| {
                                navigator().push(Route::edit_employee(id));
                            },
                            on_delete: move |id| pending_delete.set(Some(id)),
                        }
                    }
                }
            }

            if show_create() {
                CreateEmployeeModal {
                    on_close: move |_| show_create.set(false),
                    on_created: move |employee: Employee| {
                        store.save(employee);
                        show_create.set(false);
                    },
                }
            }

            if let Some(id) = pending_delete() {
                DeleteConfirmModal {
                    employee_name: store.get(id).map(|e| e.full_name).unwrap_or_default(),
                    on_close: move |_| pending_delete.set(None),
                    on_confirm: move |_| {
                        if let Err(error) = store.remove(id) {
                            error_state.set(error);
                        }
                        pending_delete.set(None);
                    },
                }
            }
        }
    }
}

#[component]
fn CreateEmployeeModal(on_close: EventHandler<()>, on_created: EventHandler<Employee>) -> Element {
    let employee_id = use_hook(Uuid::new_v4);

    rsx! {
        Modal { title: "New Employee", on_close, wide: true,
            div { class: "modal-body",
                EmployeeEditor {
                    employee_id,
                    initial: EmployeeFormData::default(),
                    view_only: false,
                    submit_label: "Create Employee",
                    on_save: move |employee| on_created.call(employee),
                    on_cancel: move |_| on_close.call(()),
                }
            }
        }
    }
}
