//! The sections of the employee form. Each binds its fields to the shared
//! form state; `is_view_only` disables inputs without touching values.

use dioxus::prelude::*;
use types::EmploymentStatus;

use crate::views::components::{CheckboxField, SelectField, TextField, options};

use super::editor::use_form_state;

const CONTRACT_TYPES: &[&str] = &["Permanent", "Fixed Term", "Probation", "Internship"];
const CONTRACT_NATURES: &[&str] = &["Full Time", "Part Time", "Casual"];
const ATTENDANCE_CALENDARS: &[&str] = &["Standard", "Shift", "Flexible"];
const OT_GROUPS: &[&str] = &["None", "Group A", "Group B", "Group C"];
const PAY_FREQUENCIES: &[&str] = &["Monthly", "Semi-monthly", "Bi-weekly", "Weekly"];

#[component]
pub fn PersonalTab(is_view_only: bool) -> Element {
    let mut form = use_form_state();
    let fields = form.data.read().personal.clone();
    let statuses: Vec<String> = EmploymentStatus::KNOWN
        .iter()
        .map(|s| s.label().to_string())
        .collect();

    rsx! {
        div { class: "form-grid",
            TextField {
                id: "full_name",
                label: "Full Name",
                value: fields.full_name,
                disabled: is_view_only,
                placeholder: "e.g. Jane Doe",
                oninput: move |value: String| form.data.write().personal.full_name = value,
            }
            TextField {
                id: "job_title",
                label: "Job Title",
                value: fields.job_title,
                disabled: is_view_only,
                oninput: move |value: String| form.data.write().personal.job_title = value,
            }
            TextField {
                id: "department",
                label: "Department",
                value: fields.department,
                disabled: is_view_only,
                oninput: move |value: String| form.data.write().personal.department = value,
            }
            TextField {
                id: "email",
                label: "Email",
                kind: "email",
                value: fields.email,
                disabled: is_view_only,
                placeholder: "e.g. jane@example.com",
                oninput: move |value: String| form.data.write().personal.email = value,
            }
            TextField {
                id: "phone",
                label: "Phone",
                kind: "tel",
                value: fields.phone,
                disabled: is_view_only,
                oninput: move |value: String| form.data.write().personal.phone = value,
            }
            SelectField {
                id: "employment_status",
                label: "Employment Status",
                value: fields.employment_status.label().to_string(),
                options: statuses,
                disabled: is_view_only,
                onchange: move |value: String| {
                    form.data.write().personal.employment_status = EmploymentStatus::from(value);
                },
            }
            TextField {
                id: "profile_picture",
                label: "Profile Picture URL",
                kind: "url",
                value: fields.profile_picture,
                disabled: is_view_only,
                oninput: move |value: String| form.data.write().personal.profile_picture = value,
            }
        }
    }
}

#[component]
pub fn ContractTab(is_view_only: bool) -> Element {
    let mut form = use_form_state();
    let fields = form.data.read().contract.clone();

    rsx! {
        div { class: "form-grid",
            TextField {
                id: "contract_date_start",
                label: "Contract Start",
                kind: "date",
                value: fields.contract_date_start,
                disabled: is_view_only,
                oninput: move |value: String| {
                    form.data.write().contract.contract_date_start = value;
                },
            }
            TextField {
                id: "contract_date_end",
                label: "Contract End",
                kind: "date",
                value: fields.contract_date_end,
                disabled: is_view_only,
                oninput: move |value: String| form.data.write().contract.contract_date_end = value,
            }
            SelectField {
                id: "contract_type",
                label: "Contract Type",
                value: fields.contract_type,
                options: options(CONTRACT_TYPES),
                disabled: is_view_only,
                onchange: move |value: String| form.data.write().contract.contract_type = value,
            }
            SelectField {
                id: "contract_nature",
                label: "Contract Nature",
                value: fields.contract_nature,
                options: options(CONTRACT_NATURES),
                disabled: is_view_only,
                onchange: move |value: String| form.data.write().contract.contract_nature = value,
            }
            CheckboxField {
                id: "renewal",
                label: "Eligible for renewal",
                checked: fields.renewal,
                disabled: is_view_only,
                onchange: move |checked: bool| form.data.write().contract.renewal = checked,
            }
            CheckboxField {
                id: "contract_signed",
                label: "Contract signed",
                checked: fields.contract_signed,
                disabled: is_view_only,
                onchange: move |checked: bool| form.data.write().contract.contract_signed = checked,
            }
        }
    }
}

#[component]
pub fn AttendanceTab(is_view_only: bool) -> Element {
    let mut form = use_form_state();
    let fields = form.data.read().attendance.clone();

    rsx! {
        div { class: "form-grid",
            SelectField {
                id: "attendance_calendar",
                label: "Attendance Calendar",
                value: fields.attendance_calendar,
                options: options(ATTENDANCE_CALENDARS),
                disabled: is_view_only,
                onchange: move |value: String| {
                    form.data.write().attendance.attendance_calendar = value;
                },
            }
            SelectField {
                id: "ot_group",
                label: "OT Group",
                value: fields.ot_group,
                options: options(OT_GROUPS),
                disabled: is_view_only,
                onchange: move |value: String| form.data.write().attendance.ot_group = value,
            }
            CheckboxField {
                id: "must_clock",
                label: "Must clock in and out",
                checked: fields.must_clock,
                disabled: is_view_only,
                onchange: move |checked: bool| form.data.write().attendance.must_clock = checked,
            }
            CheckboxField {
                id: "all_work_day",
                label: "Every day is a work day",
                checked: fields.all_work_day,
                disabled: is_view_only,
                onchange: move |checked: bool| form.data.write().attendance.all_work_day = checked,
            }
            TextField {
                id: "badge_no",
                label: "Badge No.",
                value: fields.badge_no,
                disabled: is_view_only,
                oninput: move |value: String| form.data.write().attendance.badge_no = value,
            }
            TextField {
                id: "imei_uuid_no",
                label: "Device IMEI / UUID",
                value: fields.imei_uuid_no,
                disabled: is_view_only,
                oninput: move |value: String| form.data.write().attendance.imei_uuid_no = value,
            }
            TextField {
                id: "clock_codes",
                label: "Clock Codes",
                value: fields.clock_codes,
                disabled: is_view_only,
                placeholder: "Comma separated, e.g. MAIN, GATE2",
                oninput: move |value: String| form.data.write().attendance.clock_codes = value,
            }
            TextField {
                id: "clock_area_codes",
                label: "Clock Area Codes",
                value: fields.clock_area_codes,
                disabled: is_view_only,
                placeholder: "Comma separated, e.g. HQ, WH",
                oninput: move |value: String| form.data.write().attendance.clock_area_codes = value,
            }
        }
    }
}

#[component]
pub fn CompensationTab(is_view_only: bool) -> Element {
    let mut form = use_form_state();
    let fields = form.data.read().compensation.clone();

    rsx! {
        div { class: "form-grid",
            TextField {
                id: "basic_salary",
                label: "Basic Salary",
                kind: "number",
                value: fields.basic_salary,
                disabled: is_view_only,
                placeholder: "0.00",
                oninput: move |value: String| form.data.write().compensation.basic_salary = value,
            }
            SelectField {
                id: "pay_frequency",
                label: "Pay Frequency",
                value: fields.pay_frequency,
                options: options(PAY_FREQUENCIES),
                disabled: is_view_only,
                onchange: move |value: String| form.data.write().compensation.pay_frequency = value,
            }
            TextField {
                id: "bank_name",
                label: "Bank",
                value: fields.bank_name,
                disabled: is_view_only,
                oninput: move |value: String| form.data.write().compensation.bank_name = value,
            }
            TextField {
                id: "bank_account_no",
                label: "Account No.",
                value: fields.bank_account_no,
                disabled: is_view_only,
                oninput: move |value: String| {
                    form.data.write().compensation.bank_account_no = value;
                },
            }
            TextField {
                id: "tax_id",
                label: "Tax ID",
                value: fields.tax_id,
                disabled: is_view_only,
                oninput: move |value: String| form.data.write().compensation.tax_id = value,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::employees::editor::FormState;
    use types::EmployeeFormData;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn attendance_form() -> EmployeeFormData {
        let mut data = EmployeeFormData::default();
        data.attendance.badge_no = "B0042".into();
        data.attendance.ot_group = "Group B".into();
        data.attendance.clock_codes = "MAIN, GATE2".into();
        data
    }

    #[test]
    fn attendance_tab_shows_bound_values() {
        fn app() -> Element {
            use_context_provider(|| FormState::new(attendance_form()));
            rsx! { AttendanceTab { is_view_only: false } }
        }

        let html = render(app);
        assert!(html.contains("B0042"), "{html}");
        assert!(html.contains("MAIN, GATE2"));
        assert!(html.contains("Group B"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn view_only_keeps_values_but_disables_inputs() {
        fn app() -> Element {
            use_context_provider(|| FormState::new(attendance_form()));
            rsx! { AttendanceTab { is_view_only: true } }
        }

        let html = render(app);
        assert!(html.contains("B0042"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn unlisted_select_value_is_still_shown() {
        fn app() -> Element {
            let mut data = EmployeeFormData::default();
            data.contract.contract_type = "Secondment".into();
            use_context_provider(|| FormState::new(data));
            rsx! { ContractTab { is_view_only: true } }
        }

        let html = render(app);
        assert!(html.contains("Secondment"), "{html}");
    }
}
