use dioxus::prelude::*;
use jiff::Zoned;
use ui::{Card, CardBody, CardHeader};

use crate::Route;
use crate::auth::use_auth;
use crate::store::use_employees;

const CONTRACT_HORIZON_DAYS: i32 = 30;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let store = use_employees();
    let counts = store.status_counts();
    let today = Zoned::now().date();
    let expiring = store.contracts_ending_within(today, CONTRACT_HORIZON_DAYS);
    let greeting = auth
        .session()
        .map(|s| format!("Welcome back, {}.", s.display_name))
        .unwrap_or_default();

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-subtitle", "{greeting}" }
            }

            div { class: "stat-grid",
                StatTile { label: "Employees", value: counts.total() }
                StatTile { label: "Active", value: counts.active }
                StatTile { label: "On Leave", value: counts.on_leave }
                StatTile { label: "Resigned", value: counts.resigned }
            }

            Card {
                CardHeader {
                    title: "Contracts ending soon",
                    subtitle: "Next {CONTRACT_HORIZON_DAYS} days",
                }
                CardBody {
                    if expiring.is_empty() {
                        p { class: "text-muted", "No contracts end in this window." }
                    } else {
                        ul { class: "contract-list",
                            for employee in expiring {
                                li { key: "{employee.id}", class: "contract-item",
                                    Link {
                                        to: Route::employee(employee.id),
                                        "{employee.full_name}"
                                    }
                                    if let Some(end) = employee.contract.contract_date_end {
                                        span { class: "contract-end", "{end}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "dashboard-grid",
                Link {
                    to: Route::EmployeeList {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Manage Employees" }
                    p { class: "dashboard-card-desc",
                        "Search the directory, update records and add new hires."
                    }
                }
                Link {
                    to: Route::Leave {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Leave" }
                    p { class: "dashboard-card-desc", "Review leave requests and balances." }
                }
                Link {
                    to: Route::Payroll {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Payroll" }
                    p { class: "dashboard-card-desc", "Pay runs and payslips." }
                }
            }
        }
    }
}

#[component]
fn StatTile(label: String, value: usize) -> Element {
    rsx! {
        div { class: "stat-tile",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
