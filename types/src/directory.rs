use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::employee::{Employee, EmploymentStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: usize,
    pub on_leave: usize,
    pub resigned: usize,
    pub other: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.active + self.on_leave + self.resigned + self.other
    }
}

/// The employees known to this client, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn get(&self, id: Uuid) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Insert or replace by id. Returns `true` when the record is new.
    pub fn upsert(&mut self, employee: Employee) -> bool {
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => {
                *existing = employee;
                false
            }
            None => {
                self.employees.push(employee);
                true
            }
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Employee> {
        let index = self.employees.iter().position(|e| e.id == id)?;
        Some(self.employees.remove(index))
    }

    /// Employees matching `query` and, if given, `status`, sorted by name.
    pub fn search(&self, query: &str, status: Option<&EmploymentStatus>) -> Vec<&Employee> {
        let mut found: Vec<_> = self
            .employees
            .iter()
            .filter(|e| status.is_none_or(|s| &e.employment_status == s))
            .filter(|e| e.matches(query))
            .collect();
        found.sort_by_cached_key(|e| e.full_name.to_lowercase());
        found
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.employees
            .iter()
            .fold(StatusCounts::default(), |mut counts, e| {
                match e.employment_status {
                    EmploymentStatus::Active => counts.active += 1,
                    EmploymentStatus::OnLeave => counts.on_leave += 1,
                    EmploymentStatus::Resigned => counts.resigned += 1,
                    EmploymentStatus::Other(_) => counts.other += 1,
                }
                counts
            })
    }

    /// Contracts ending between `today` and `today + days`, soonest first.
    pub fn contracts_ending_within(&self, today: Date, days: i32) -> Vec<&Employee> {
        let mut ending: Vec<_> = self
            .employees
            .iter()
            .filter(|e| e.contract.ends_within(today, days))
            .collect();
        ending.sort_by_key(|e| e.contract.contract_date_end);
        ending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::Contract;

    fn employee(n: u128, name: &str, status: EmploymentStatus) -> Employee {
        Employee {
            id: Uuid::from_u128(n),
            full_name: name.to_string(),
            job_title: "Engineer".to_string(),
            department: "Platform".to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            employment_status: status,
            profile_picture: None,
            phone: None,
            attendance: Default::default(),
            contract: Default::default(),
            compensation: Default::default(),
        }
    }

    fn directory() -> EmployeeDirectory {
        EmployeeDirectory::new(vec![
            employee(1, "Zoe Park", EmploymentStatus::Active),
            employee(2, "Jane Doe", EmploymentStatus::OnLeave),
            employee(3, "Adam Smith", EmploymentStatus::Resigned),
            employee(4, "Lee Wong", EmploymentStatus::Other("Contractor".into())),
        ])
    }

    #[test]
    fn upsert_replaces_by_id() {
        let mut dir = directory();
        let mut jane = dir.get(Uuid::from_u128(2)).cloned().unwrap();
        jane.employment_status = EmploymentStatus::Active;

        assert!(!dir.upsert(jane));
        assert_eq!(dir.status_counts().total(), 4);
        assert_eq!(
            dir.get(Uuid::from_u128(2)).unwrap().employment_status,
            EmploymentStatus::Active
        );

        assert!(dir.upsert(employee(5, "New Hire", EmploymentStatus::Active)));
        assert_eq!(dir.status_counts().total(), 5);
    }

    #[test]
    fn remove_returns_the_record() {
        let mut dir = directory();
        assert_eq!(dir.remove(Uuid::from_u128(3)).unwrap().full_name, "Adam Smith");
        assert!(dir.remove(Uuid::from_u128(3)).is_none());
        assert_eq!(dir.status_counts().total(), 3);
    }

    #[test]
    fn search_filters_and_sorts_by_name() {
        fn names(found: Vec<&Employee>) -> Vec<&str> {
            found.into_iter().map(|e| e.full_name.as_str()).collect()
        }

        let dir = directory();

        assert_eq!(
            names(dir.search("", None)),
            ["Adam Smith", "Jane Doe", "Lee Wong", "Zoe Park"]
        );
        assert_eq!(names(dir.search("JANE", None)), ["Jane Doe"]);
        assert_eq!(
            names(dir.search("platform", Some(&EmploymentStatus::Active))),
            ["Zoe Park"]
        );
        assert!(dir.search("nobody", None).is_empty());
    }

    #[test]
    fn counts_every_status() {
        let counts = directory().status_counts();
        assert_eq!(
            counts,
            StatusCounts {
                active: 1,
                on_leave: 1,
                resigned: 1,
                other: 1
            }
        );
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn contracts_ending_soonest_first() {
        let mut dir = directory();
        let today = jiff::civil::date(2026, 10, 17);
        for (n, end) in [(1, (2026, 11, 1)), (2, (2026, 10, 20)), (3, (2027, 3, 1))] {
            let mut e = dir.get(Uuid::from_u128(n)).cloned().unwrap();
            e.contract = Contract {
                contract_date_end: Some(jiff::civil::date(end.0, end.1, end.2)),
                ..Default::default()
            };
            dir.upsert(e);
        }

        let ending: Vec<_> = dir
            .contracts_ending_within(today, 30)
            .into_iter()
            .map(|e| e.full_name.as_str())
            .collect();
        assert_eq!(ending, ["Jane Doe", "Zoe Park"]);
    }
}
