use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Name shown for a record whose owner is no longer in the directory.
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Display, EnumString, AsRefStr,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Row shape as stored; status is kept as text.
#[derive(Debug, sqlx::FromRow)]
pub struct AttendanceRow {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: String,
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = strum::ParseError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_id: row.employee_id,
            date: row.date,
            status: row.status.parse()?,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct AttendanceCreate {
    #[validate(length(min = 1, message = "Employee ID cannot be empty"))]
    #[schema(example = "EMP-001", value_type = String)]
    pub employee_id: String,
    #[schema(example = "2024-03-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

impl AttendanceCreate {
    pub fn normalized(self) -> Self {
        Self {
            employee_id: self.employee_id.trim().to_string(),
            ..self
        }
    }

    pub fn into_record(self) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: self.employee_id,
            date: self.date,
            status: self.status,
        }
    }
}

/// Inclusive date window; a missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRange {
    /// Earliest date to include (YYYY-MM-DD)
    #[param(value_type = Option<String>, format = "date", example = "2024-03-01")]
    pub date_from: Option<NaiveDate>,
    /// Latest date to include (YYYY-MM-DD)
    #[param(value_type = Option<String>, format = "date", example = "2024-03-31")]
    pub date_to: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.date_from.is_none_or(|from| date >= from) && self.date_to.is_none_or(|to| date <= to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP-001",
        "date": "2024-03-01",
        "status": "Present",
        "employee_name": "John Doe"
    })
)]
pub struct AttendanceResponse {
    pub employee_id: String,
    #[schema(example = "2024-03-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub employee_name: String,
}

impl AttendanceResponse {
    pub fn named(record: AttendanceRecord, employee_name: impl Into<String>) -> Self {
        Self {
            employee_id: record.employee_id,
            date: record.date,
            status: record.status,
            employee_name: employee_name.into(),
        }
    }
}

/// Joins a record with its owner's name from a directory snapshot keyed by employee_id.
pub fn enrich(record: AttendanceRecord, names: &HashMap<String, String>) -> AttendanceResponse {
    let name = names
        .get(&record.employee_id)
        .map(String::as_str)
        .unwrap_or(UNKNOWN_EMPLOYEE)
        .to_string();
    AttendanceResponse::named(record, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(employee_id: &str, date: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.into(),
            date: day(date),
            status: AttendanceStatus::Present,
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = DateRange {
            date_from: Some(day("2024-03-01")),
            date_to: Some(day("2024-03-05")),
        };
        assert!(range.contains(day("2024-03-01")));
        assert!(range.contains(day("2024-03-05")));
        assert!(!range.contains(day("2024-02-29")));
        assert!(!range.contains(day("2024-03-06")));
    }

    #[test]
    fn open_range_matches_everything() {
        let range = DateRange::default();
        assert!(range.contains(day("1999-01-01")));

        let from_only = DateRange {
            date_from: Some(day("2024-03-01")),
            date_to: None,
        };
        assert!(from_only.contains(day("2030-01-01")));
        assert!(!from_only.contains(day("2024-02-01")));
    }

    #[test]
    fn status_string_forms() {
        assert_eq!(AttendanceStatus::Present.as_ref(), "Present");
        assert_eq!("Absent".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Absent);
        assert!("Late".parse::<AttendanceStatus>().is_err());
        assert_eq!(
            serde_json::to_value(AttendanceStatus::Absent).unwrap(),
            serde_json::json!("Absent")
        );
        assert!(serde_json::from_value::<AttendanceStatus>(serde_json::json!("present")).is_err());
    }

    #[test]
    fn enrich_uses_snapshot_name() {
        let names = HashMap::from([("E1".to_string(), "Alice".to_string())]);
        assert_eq!(enrich(record("E1", "2024-03-01"), &names).employee_name, "Alice");
        assert_eq!(
            enrich(record("E9", "2024-03-01"), &names).employee_name,
            UNKNOWN_EMPLOYEE
        );
    }

    #[test]
    fn response_serializes_iso_date() {
        let response = AttendanceResponse::named(record("E1", "2024-03-01"), "Alice");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["status"], "Present");
    }

    #[test]
    fn row_with_unknown_status_fails_to_convert() {
        let row = AttendanceRow {
            employee_id: "E1".into(),
            date: day("2024-03-01"),
            status: "Late".into(),
        };
        assert!(AttendanceRecord::try_from(row).is_err());
    }
}
