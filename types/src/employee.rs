use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmploymentStatus {
    #[default]
    Active,
    OnLeave,
    Resigned,
    /// Anything the directory sends that we don't recognise, kept verbatim.
    Other(String),
}

impl EmploymentStatus {
    /// The statuses offered when editing a record.
    pub const KNOWN: [EmploymentStatus; 3] = [
        EmploymentStatus::Active,
        EmploymentStatus::OnLeave,
        EmploymentStatus::Resigned,
    ];

    pub fn label(&self) -> &str {
        match self {
            EmploymentStatus::Active => "Active",
            EmploymentStatus::OnLeave => "On Leave",
            EmploymentStatus::Resigned => "Resigned",
            EmploymentStatus::Other(raw) if raw.trim().is_empty() => "Unknown",
            EmploymentStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for EmploymentStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Active" => EmploymentStatus::Active,
            "On Leave" => EmploymentStatus::OnLeave,
            "Resigned" => EmploymentStatus::Resigned,
            _ => EmploymentStatus::Other(raw),
        }
    }
}

impl From<EmploymentStatus> for String {
    fn from(status: EmploymentStatus) -> Self {
        match status {
            EmploymentStatus::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attendance {
    pub attendance_calendar: String,
    pub ot_group: String,
    pub must_clock: bool,
    pub all_work_day: bool,
    pub badge_no: String,
    pub imei_uuid_no: String,
    pub clock_codes: Vec<String>,
    pub clock_area_codes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contract {
    pub contract_date_start: Option<Date>,
    pub contract_date_end: Option<Date>,
    pub contract_type: String,
    pub contract_nature: String,
    pub renewal: bool,
    pub contract_signed: bool,
}

impl Contract {
    /// Whether the contract has a known end date falling in `[today, today + days]`.
    pub fn ends_within(&self, today: Date, days: i32) -> bool {
        let Some(end) = self.contract_date_end else {
            return false;
        };
        let Ok(horizon) = today.checked_add(jiff::Span::new().days(days)) else {
            return false;
        };
        end >= today && end <= horizon
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compensation {
    pub basic_salary: Option<f64>,
    pub pay_frequency: String,
    pub bank_name: String,
    pub bank_account_no: String,
    pub tax_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub full_name: String,
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub employment_status: EmploymentStatus,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub attendance: Attendance,
    #[serde(default)]
    pub contract: Contract,
    #[serde(default)]
    pub compensation: Compensation,
}

impl Employee {
    /// Avatar fallback: first letter of the first and last name parts.
    pub fn initials(&self) -> String {
        initials(&self.full_name)
    }

    /// Case-insensitive match over the fields shown on a card.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            &self.full_name,
            &self.job_title,
            &self.department,
            &self.email,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

pub fn initials(full_name: &str) -> String {
    let mut parts = full_name.split_whitespace();
    let Some(first) = parts.next() else {
        return "?".to_string();
    };
    let last = parts.last();

    [Some(first), last]
        .into_iter()
        .flatten()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_use_first_and_last_name() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("mary ann smith"), "MS");
        assert_eq!(initials("  Cher "), "C");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn status_round_trips_through_display_strings() {
        let status: EmploymentStatus = serde_json::from_str("\"On Leave\"").unwrap();
        assert_eq!(status, EmploymentStatus::OnLeave);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"On Leave\"");

        let other: EmploymentStatus = serde_json::from_str("\"Suspended\"").unwrap();
        assert_eq!(other, EmploymentStatus::Other("Suspended".into()));
        assert_eq!(other.label(), "Suspended");
    }

    #[test]
    fn blank_unknown_status_reads_as_unknown() {
        assert_eq!(EmploymentStatus::Other(String::new()).label(), "Unknown");
    }

    #[test]
    fn contract_end_window_is_inclusive() {
        let today = jiff::civil::date(2026, 10, 17);
        let mut contract = Contract {
            contract_date_end: Some(jiff::civil::date(2026, 11, 16)),
            ..Default::default()
        };
        assert!(contract.ends_within(today, 30));

        contract.contract_date_end = Some(jiff::civil::date(2026, 11, 17));
        assert!(!contract.ends_within(today, 30));

        contract.contract_date_end = Some(jiff::civil::date(2026, 10, 16));
        assert!(!contract.ends_within(today, 30));

        contract.contract_date_end = None;
        assert!(!contract.ends_within(today, 30));
    }
}
