use std::collections::BTreeMap;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::employee::{Attendance, Compensation, Contract, Employee, EmploymentStatus};

/// The sections of the employee form. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormTab {
    #[default]
    Personal,
    Contract,
    Attendance,
    Compensation,
}

impl FormTab {
    pub const ALL: [FormTab; 4] = [
        FormTab::Personal,
        FormTab::Contract,
        FormTab::Attendance,
        FormTab::Compensation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormTab::Personal => "personal",
            FormTab::Contract => "contract",
            FormTab::Attendance => "attendance",
            FormTab::Compensation => "compensation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormTab::Personal => "Personal Info",
            FormTab::Contract => "Contract",
            FormTab::Attendance => "Attendance",
            FormTab::Compensation => "Compensation",
        }
    }
}

impl FromStr for FormTab {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormTab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("unknown form tab '{s}'").into())
    }
}

impl std::fmt::Display for FormTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub tab: FormTab,
    pub message: String,
}

/// Validation failures keyed by field identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, FieldError>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, tab: FormTab, message: impl Into<String>) {
        self.0.insert(
            field,
            FieldError {
                tab,
                message: message.into(),
            },
        );
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// The earliest tab, in display order, holding an error.
    pub fn first_tab(&self) -> Option<FormTab> {
        FormTab::ALL
            .into_iter()
            .find(|tab| self.0.values().any(|error| error.tab == *tab))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalFields {
    pub full_name: String,
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub employment_status: EmploymentStatus,
    pub profile_picture: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractFields {
    pub contract_date_start: String,
    pub contract_date_end: String,
    pub contract_type: String,
    pub contract_nature: String,
    pub renewal: bool,
    pub contract_signed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceFields {
    pub attendance_calendar: String,
    pub ot_group: String,
    pub must_clock: bool,
    pub all_work_day: bool,
    pub badge_no: String,
    pub imei_uuid_no: String,
    /// Comma separated.
    pub clock_codes: String,
    /// Comma separated.
    pub clock_area_codes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompensationFields {
    pub basic_salary: String,
    pub pay_frequency: String,
    pub bank_name: String,
    pub bank_account_no: String,
    pub tax_id: String,
}

/// The editable state of one employee, grouped by form tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFormData {
    pub personal: PersonalFields,
    pub contract: ContractFields,
    pub attendance: AttendanceFields,
    pub compensation: CompensationFields,
}

impl From<&Employee> for EmployeeFormData {
    fn from(employee: &Employee) -> Self {
        let contract = &employee.contract;
        let attendance = &employee.attendance;
        let compensation = &employee.compensation;

        Self {
            personal: PersonalFields {
                full_name: employee.full_name.clone(),
                job_title: employee.job_title.clone(),
                department: employee.department.clone(),
                email: employee.email.clone(),
                phone: employee.phone.clone().unwrap_or_default(),
                employment_status: employee.employment_status.clone(),
                profile_picture: employee.profile_picture.clone().unwrap_or_default(),
            },
            contract: ContractFields {
                contract_date_start: format_date(contract.contract_date_start),
                contract_date_end: format_date(contract.contract_date_end),
                contract_type: contract.contract_type.clone(),
                contract_nature: contract.contract_nature.clone(),
                renewal: contract.renewal,
                contract_signed: contract.contract_signed,
            },
            attendance: AttendanceFields {
                attendance_calendar: attendance.attendance_calendar.clone(),
                ot_group: attendance.ot_group.clone(),
                must_clock: attendance.must_clock,
                all_work_day: attendance.all_work_day,
                badge_no: attendance.badge_no.clone(),
                imei_uuid_no: attendance.imei_uuid_no.clone(),
                clock_codes: attendance.clock_codes.join(", "),
                clock_area_codes: attendance.clock_area_codes.join(", "),
            },
            compensation: CompensationFields {
                basic_salary: compensation
                    .basic_salary
                    .map(|salary| salary.to_string())
                    .unwrap_or_default(),
                pay_frequency: compensation.pay_frequency.clone(),
                bank_name: compensation.bank_name.clone(),
                bank_account_no: compensation.bank_account_no.clone(),
                tax_id: compensation.tax_id.clone(),
            },
        }
    }
}

impl EmployeeFormData {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        let personal = &self.personal;

        if personal.full_name.trim().is_empty() {
            errors.insert("full_name", FormTab::Personal, "Full name is required");
        }
        if personal.email.trim().is_empty() {
            errors.insert("email", FormTab::Personal, "Email is required");
        } else if !is_email(&personal.email) {
            errors.insert("email", FormTab::Personal, "Enter a valid email address");
        }

        let start = parse_date(&self.contract.contract_date_start);
        let end = parse_date(&self.contract.contract_date_end);
        if start.is_err() {
            errors.insert(
                "contract_date_start",
                FormTab::Contract,
                "Start date must be in YYYY-MM-DD format",
            );
        }
        if end.is_err() {
            errors.insert(
                "contract_date_end",
                FormTab::Contract,
                "End date must be in YYYY-MM-DD format",
            );
        }
        if let (Ok(Some(start)), Ok(Some(end))) = (start, end) {
            if end < start {
                errors.insert(
                    "contract_date_end",
                    FormTab::Contract,
                    "End date cannot be before the start date",
                );
            }
        }

        if parse_salary(&self.compensation.basic_salary).is_err() {
            errors.insert(
                "basic_salary",
                FormTab::Compensation,
                "Basic salary must be a non-negative number",
            );
        }

        errors
    }

    /// Validate and build the record this form describes.
    pub fn to_employee(&self, id: Uuid) -> Result<Employee, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let personal = &self.personal;
        let contract = &self.contract;
        let attendance = &self.attendance;
        let compensation = &self.compensation;

        Ok(Employee {
            id,
            full_name: personal.full_name.trim().to_string(),
            job_title: personal.job_title.trim().to_string(),
            department: personal.department.trim().to_string(),
            email: personal.email.trim().to_string(),
            employment_status: personal.employment_status.clone(),
            profile_picture: non_empty(&personal.profile_picture),
            phone: non_empty(&personal.phone),
            attendance: Attendance {
                attendance_calendar: attendance.attendance_calendar.clone(),
                ot_group: attendance.ot_group.clone(),
                must_clock: attendance.must_clock,
                all_work_day: attendance.all_work_day,
                badge_no: attendance.badge_no.trim().to_string(),
                imei_uuid_no: attendance.imei_uuid_no.trim().to_string(),
                clock_codes: split_codes(&attendance.clock_codes),
                clock_area_codes: split_codes(&attendance.clock_area_codes),
            },
            contract: Contract {
                contract_date_start: parse_date(&contract.contract_date_start).ok().flatten(),
                contract_date_end: parse_date(&contract.contract_date_end).ok().flatten(),
                contract_type: contract.contract_type.clone(),
                contract_nature: contract.contract_nature.clone(),
                renewal: contract.renewal,
                contract_signed: contract.contract_signed,
            },
            compensation: Compensation {
                basic_salary: parse_salary(&compensation.basic_salary).ok().flatten(),
                pay_frequency: compensation.pay_frequency.clone(),
                bank_name: compensation.bank_name.trim().to_string(),
                bank_account_no: compensation.bank_account_no.trim().to_string(),
                tax_id: compensation.tax_id.trim().to_string(),
            },
        })
    }
}

/// Loose `local@domain.tld` check; the directory does the real verification.
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn format_date(date: Option<Date>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

fn parse_date(value: &str) -> Result<Option<Date>, jiff::Error> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}

fn parse_salary(value: &str) -> Result<Option<f64>, ()> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(salary) if salary.is_finite() && salary >= 0.0 => Ok(Some(salary)),
        _ => Err(()),
    }
}

fn split_codes(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> EmployeeFormData {
        let mut form = EmployeeFormData::default();
        form.personal.full_name = "Jane Doe".into();
        form.personal.email = "jane@example.com".into();
        form
    }

    #[test]
    fn tab_identifiers_parse_back() {
        for tab in FormTab::ALL {
            assert_eq!(tab.as_str().parse::<FormTab>().unwrap(), tab);
        }
        assert!("payroll".parse::<FormTab>().is_err());
    }

    #[test]
    fn empty_form_requires_name_and_email() {
        let errors = EmployeeFormData::default().validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("full_name").is_some());
        assert!(errors.get("email").is_some());
        assert_eq!(errors.first_tab(), Some(FormTab::Personal));
    }

    #[test]
    fn contract_end_before_start_is_rejected() {
        let mut form = valid_form();
        form.contract.contract_date_start = "2026-03-01".into();
        form.contract.contract_date_end = "2026-02-28".into();

        let errors = form.validate();
        assert_eq!(
            errors.get("contract_date_end").map(|e| e.tab),
            Some(FormTab::Contract)
        );
        assert_eq!(errors.first_tab(), Some(FormTab::Contract));
    }

    #[test]
    fn first_tab_follows_display_order() {
        let mut form = valid_form();
        form.compensation.basic_salary = "-10".into();
        form.contract.contract_date_start = "next monday".into();

        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first_tab(), Some(FormTab::Contract));
    }

    #[test]
    fn email_shape() {
        assert!(is_email("jane@example.com"));
        assert!(is_email(" jane.doe@hr.example.org "));
        assert!(!is_email("jane"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("jane@example"));
        assert!(!is_email("jane@@example.com"));
        assert!(!is_email("ja ne@example.com"));
    }

    #[test]
    fn to_employee_normalizes_inputs() {
        let mut form = valid_form();
        form.personal.full_name = "  Jane Doe ".into();
        form.personal.phone = "   ".into();
        form.attendance.clock_codes = "A1, B2,, C3 ".into();
        form.contract.contract_date_end = "2027-01-31".into();
        form.compensation.basic_salary = "4200.50".into();

        let id = Uuid::from_u128(7);
        let employee = form.to_employee(id).unwrap();
        assert_eq!(employee.id, id);
        assert_eq!(employee.full_name, "Jane Doe");
        assert_eq!(employee.phone, None);
        assert_eq!(employee.attendance.clock_codes, ["A1", "B2", "C3"]);
        assert_eq!(
            employee.contract.contract_date_end,
            Some(jiff::civil::date(2027, 1, 31))
        );
        assert_eq!(employee.contract.contract_date_start, None);
        assert_eq!(employee.compensation.basic_salary, Some(4200.5));
    }

    #[test]
    fn editing_an_employee_preserves_it() {
        let mut form = valid_form();
        form.personal.employment_status = EmploymentStatus::OnLeave;
        form.attendance.must_clock = true;
        form.attendance.clock_area_codes = "HQ, WH".into();
        form.contract.contract_date_start = "2025-06-01".into();
        form.contract.contract_signed = true;

        let employee = form.to_employee(Uuid::from_u128(1)).unwrap();
        let reloaded = EmployeeFormData::from(&employee);
        assert_eq!(reloaded, form);
    }

    #[test]
    fn invalid_form_does_not_build() {
        let errors = EmployeeFormData::default()
            .to_employee(Uuid::from_u128(1))
            .unwrap_err();
        assert!(!errors.is_empty());
    }
}
