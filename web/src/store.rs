use dioxus::prelude::*;
use jiff::civil::{Date, date};
use types::{
    Employee, EmployeeDirectory, EmploymentStatus, Result, StatusCounts,
    employee::{Attendance, Compensation, Contract},
    err,
};
use uuid::Uuid;

use crate::config::CONFIG;

/// The employee records this session works with. Persistence is somebody
/// else's job; edits live for as long as the app does.
#[derive(Clone, Copy)]
pub struct EmployeeStore {
    directory: Signal<EmployeeDirectory>,
}

impl EmployeeStore {
    pub fn from_config() -> Self {
        let employees = if CONFIG.seed_directory {
            sample_employees()
        } else {
            Vec::new()
        };
        Self {
            directory: Signal::new(EmployeeDirectory::new(employees)),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<Employee> {
        self.directory.read().get(id).cloned()
    }

    pub fn search(&self, query: &str, status: Option<&EmploymentStatus>) -> Vec<Employee> {
        self.directory
            .read()
            .search(query, status)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.directory.read().status_counts()
    }

    pub fn contracts_ending_within(&self, today: Date, days: i32) -> Vec<Employee> {
        self.directory
            .read()
            .contracts_ending_within(today, days)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn save(&mut self, employee: Employee) {
        let (id, name) = (employee.id, employee.full_name.clone());
        if self.directory.write().upsert(employee) {
            tracing::info!(%id, %name, "added employee");
        } else {
            tracing::info!(%id, %name, "updated employee");
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Result<Employee> {
        let removed = self
            .directory
            .write()
            .remove(id)
            .ok_or_else(|| err!("employee {id} no longer exists"))?;
        tracing::info!(%id, name = %removed.full_name, "deleted employee");
        Ok(removed)
    }
}

pub fn use_employees() -> EmployeeStore {
    use_context::<EmployeeStore>()
}

struct Sample {
    n: u128,
    name: &'static str,
    title: &'static str,
    department: &'static str,
    status: EmploymentStatus,
    contract: (&'static str, &'static str, Date, Option<Date>),
    salary: f64,
}

fn sample_employees() -> Vec<Employee> {
    let samples = [
        Sample {
            n: 1,
            name: "Jane Doe",
            title: "HR Business Partner",
            department: "People",
            status: EmploymentStatus::OnLeave,
            contract: ("Permanent", "Full Time", date(2021, 3, 1), None),
            salary: 6200.0,
        },
        Sample {
            n: 2,
            name: "Marcus Chen",
            title: "Payroll Specialist",
            department: "Finance",
            status: EmploymentStatus::Active,
            contract: ("Fixed Term", "Full Time", date(2025, 1, 6), Some(date(2026, 11, 5))),
            salary: 4800.0,
        },
        Sample {
            n: 3,
            name: "Aisha Rahman",
            title: "Software Engineer",
            department: "Engineering",
            status: EmploymentStatus::Active,
            contract: ("Permanent", "Full Time", date(2022, 8, 15), None),
            salary: 7500.0,
        },
        Sample {
            n: 4,
            name: "Tomás Silva",
            title: "Warehouse Lead",
            department: "Operations",
            status: EmploymentStatus::Resigned,
            contract: ("Fixed Term", "Full Time", date(2023, 2, 1), Some(date(2025, 1, 31))),
            salary: 3900.0,
        },
        Sample {
            n: 5,
            name: "Priya Nair",
            title: "Recruiter",
            department: "People",
            status: EmploymentStatus::Active,
            contract: ("Probation", "Part Time", date(2026, 7, 1), Some(date(2026, 12, 31))),
            salary: 2600.0,
        },
        Sample {
            n: 6,
            name: "Oliver Grant",
            title: "Field Technician",
            department: "Operations",
            status: EmploymentStatus::Other("Suspended".into()),
            contract: ("Permanent", "Casual", date(2020, 5, 11), None),
            salary: 3100.0,
        },
    ];

    samples
        .into_iter()
        .map(|s| {
            let (contract_type, contract_nature, start, end) = s.contract;
            let handle = s.name.to_lowercase().replace(' ', ".").replace('á', "a");
            Employee {
                id: Uuid::from_u128(s.n),
                full_name: s.name.to_string(),
                job_title: s.title.to_string(),
                department: s.department.to_string(),
                email: format!("{handle}@peoplehq.test"),
                employment_status: s.status,
                profile_picture: None,
                phone: None,
                attendance: Attendance {
                    attendance_calendar: "Standard".into(),
                    ot_group: if s.department == "Operations" { "Group A" } else { "None" }.into(),
                    must_clock: s.department == "Operations",
                    all_work_day: false,
                    badge_no: format!("B{:04}", s.n),
                    clock_codes: vec!["MAIN".into()],
                    clock_area_codes: vec!["HQ".into()],
                    ..Default::default()
                },
                contract: Contract {
                    contract_date_start: Some(start),
                    contract_date_end: end,
                    contract_type: contract_type.into(),
                    contract_nature: contract_nature.into(),
                    renewal: end.is_some(),
                    contract_signed: true,
                },
                compensation: Compensation {
                    basic_salary: Some(s.salary),
                    pay_frequency: "Monthly".into(),
                    ..Default::default()
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::EmployeeFormData;

    #[test]
    fn samples_are_valid_records() {
        let samples = sample_employees();
        assert_eq!(samples.len(), 6);
        for employee in &samples {
            let form = EmployeeFormData::from(employee);
            assert!(form.validate().is_empty(), "{} fails validation", employee.full_name);
        }
    }

    #[test]
    fn samples_cover_every_status() {
        let counts = EmployeeDirectory::new(sample_employees()).status_counts();
        assert!(counts.active > 0 && counts.on_leave > 0);
        assert!(counts.resigned > 0 && counts.other > 0);
    }
}
