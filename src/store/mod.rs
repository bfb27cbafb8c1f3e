//! Persistence seam. Uniqueness of employee_id, email and (employee_id, date)
//! is enforced by the backing store; callers insert optimistically and react
//! to [`StoreError::Duplicate`].

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::attendance::{AttendanceRecord, AttendanceStatus, DateRange};
use crate::model::employee::{Employee, StatusTally};

#[cfg(test)]
pub mod memory;
pub mod mysql;

pub use mysql::MySqlStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key")]
    Duplicate,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("invalid stored value: {0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub employee_id: Option<String>,
    pub range: DateRange,
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_employee(&self, employee: &Employee) -> StoreResult<()>;

    async fn find_employee(&self, employee_id: &str) -> StoreResult<Option<Employee>>;

    /// All employees ordered by employee_id.
    async fn list_employees(&self) -> StoreResult<Vec<Employee>>;

    async fn count_employees(&self) -> StoreResult<u64>;

    /// Removes the employee and its attendance. `None` when the employee did
    /// not exist, otherwise the number of attendance records removed.
    async fn delete_employee_cascade(&self, employee_id: &str) -> StoreResult<Option<u64>>;

    async fn insert_attendance(&self, record: &AttendanceRecord) -> StoreResult<()>;

    /// Matching records, newest date first, ties by employee_id.
    async fn find_attendance(&self, filter: &AttendanceFilter) -> StoreResult<Vec<AttendanceRecord>>;

    /// Present/absent counts keyed by employee_id, optionally for one employee.
    async fn tally_attendance(
        &self,
        employee_id: Option<&str>,
    ) -> StoreResult<HashMap<String, StatusTally>>;

    async fn count_attendance_on(&self, date: NaiveDate, status: AttendanceStatus)
    -> StoreResult<u64>;
}

pub(crate) fn add_to_tally(tally: &mut StatusTally, status: AttendanceStatus, count: u64) {
    match status {
        AttendanceStatus::Present => tally.present += count,
        AttendanceStatus::Absent => tally.absent += count,
    }
}
