use dioxus::prelude::*;
use types::{Employee, EmploymentStatus};
use ui::{Avatar, AvatarSize, Badge, BadgeVariant, Card, IconPencil, IconTrash};
use uuid::Uuid;

pub fn status_variant(status: &EmploymentStatus) -> BadgeVariant {
    match status {
        EmploymentStatus::Active => BadgeVariant::Success,
        EmploymentStatus::OnLeave => BadgeVariant::Warning,
        EmploymentStatus::Resigned => BadgeVariant::Destructive,
        EmploymentStatus::Other(_) => BadgeVariant::Outline,
    }
}

#[component]
pub fn StatusBadge(status: EmploymentStatus) -> Element {
    rsx! {
        Badge { variant: status_variant(&status), "{status}" }
    }
}

/// Clicking the card views the employee; the icon buttons edit or delete
/// without the click reaching the card.
#[component]
pub fn EmployeeCard(
    employee: Employee,
    on_view: EventHandler<Uuid>,
    on_edit: EventHandler<Uuid>,
    on_delete: EventHandler<Uuid>,
) -> Element {
    let id = employee.id;

    rsx! {
        Card { class: "employee-card", onclick: move |_| on_view.call(id),
            div { class: "employee-card-header",
                Avatar {
                    initials: employee.initials(),
                    src: employee.profile_picture.clone().unwrap_or_default(),
                    size: AvatarSize::Large,
                }
                div { class: "employee-card-identity",
                    h3 { class: "employee-card-name", "{employee.full_name}" }
                    p { class: "employee-card-title", "{employee.job_title}" }
                }
                div { class: "employee-card-actions",
                    button {
                        class: "icon-btn",
                        r#type: "button",
                        title: "Edit",
                        aria_label: "Edit {employee.full_name}",
                        onclick: move |e| {
                            e.stop_propagation();
                            on_edit.call(id);
                        },
                        IconPencil {}
                    }
                    button {
                        class: "icon-btn icon-btn-danger",
                        r#type: "button",
                        title: "Delete",
                        aria_label: "Delete {employee.full_name}",
                        onclick: move |e| {
                            e.stop_propagation();
                            on_delete.call(id);
                        },
                        IconTrash {}
                    }
                }
            }
            div { class: "employee-card-body",
                div { class: "employee-card-meta",
                    span { class: "text-muted", "Department" }
                    span { "{employee.department}" }
                }
                div { class: "employee-card-meta",
                    span { class: "text-muted", "Email" }
                    span { "{employee.email}" }
                }
            }
            div { class: "employee-card-footer",
                StatusBadge { status: employee.employment_status.clone() }
            }
        }
    }
}
