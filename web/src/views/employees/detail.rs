use dioxus::prelude::*;
use types::{Employee, EmployeeFormData};
use ui::{Avatar, AvatarSize, Button, ButtonVariant, Card, CardBody, CardHeader};
use uuid::Uuid;

use crate::Route;
use crate::store::use_employees;
use crate::use_error;
use crate::views::components::DeleteConfirmModal;

use super::card::StatusBadge;
use super::editor::EmployeeEditor;

#[component]
pub fn EmployeeDetail(employee_id: Uuid, edit: bool) -> Element {
    let mut store = use_employees();
    let mut error_state = use_error();
    let mut view_only = use_signal(move || !edit);
    let mut confirm_delete = use_signal(|| false);

    // Reset local UI state when the route points somewhere else
    use_effect(use_reactive!(|(employee_id, edit)| {
        tracing::debug!(%employee_id, edit, "showing employee");
        view_only.set(!edit);
        confirm_delete.set(false);
    }));

    let Some(employee) = store.get(employee_id) else {
        return rsx! {
            Card {
                CardHeader { title: "Employee not found" }
                CardBody {
                    p { class: "text-muted", "This record may have been deleted." }
                    Link {
                        to: Route::EmployeeList {},
                        class: "btn btn-secondary",
                        "Back to employees"
                    }
                }
            }
        };
    };

    let initial = EmployeeFormData::from(&employee);

    rsx! {
        div {
            Link { to: Route::EmployeeList {}, class: "back-link", "← All employees" }

            div { class: "page-header",
                div { class: "page-header-profile",
                    Avatar {
                        initials: employee.initials(),
                        src: employee.profile_picture.clone().unwrap_or_default(),
                        size: AvatarSize::Large,
                    }
                    div { class: "page-header-content",
                        h1 { class: "page-title", "{employee.full_name}" }
                        p { class: "page-subtitle",
                            "{employee.job_title} · {employee.department}"
                        }
                        StatusBadge { status: employee.employment_status.clone() }
                    }
                }
                div { class: "page-header-actions",
                    if view_only() {
                        Button { onclick: move |_| view_only.set(false), "Edit" }
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| confirm_delete.set(true),
                        "Delete"
                    }
                }
            }

            Card {
                CardBody {
                    EmployeeEditor {
                        key: "{employee_id}",
                        employee_id,
                        initial,
                        view_only: view_only(),
                        on_save: move |updated: Employee| {
                            store.save(updated);
                            view_only.set(true);
                        },
                        on_cancel: move |_| view_only.set(true),
                    }
                }
            }

            if confirm_delete() {
                DeleteConfirmModal {
                    employee_name: employee.full_name.clone(),
                    on_close: move |_| confirm_delete.set(false),
                    on_confirm: move |_| {
                        confirm_delete.set(false);
                        match store.remove(employee_id) {
                            Ok(_) => {
                                navigator().replace(Route::EmployeeList {});
                            }
                            Err(error) => error_state.set(error),
                        }
                    },
                }
            }
        }
    }
}
