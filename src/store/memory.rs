use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{AttendanceFilter, Store, StoreError, StoreResult, add_to_tally};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::{Employee, StatusTally};

/// In-process store with the same unique-key behaviour as the MySQL schema.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    employees: BTreeMap<String, Employee>,
    attendance: BTreeMap<(String, NaiveDate), AttendanceStatus>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_employee(&self, employee: &Employee) -> StoreResult<()> {
        let mut state = self.state();
        let email_taken = state.employees.values().any(|e| e.email == employee.email);
        if email_taken || state.employees.contains_key(&employee.employee_id) {
            return Err(StoreError::Duplicate);
        }
        state
            .employees
            .insert(employee.employee_id.clone(), employee.clone());
        Ok(())
    }

    async fn find_employee(&self, employee_id: &str) -> StoreResult<Option<Employee>> {
        Ok(self.state().employees.get(employee_id).cloned())
    }

    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.state().employees.values().cloned().collect())
    }

    async fn count_employees(&self) -> StoreResult<u64> {
        Ok(self.state().employees.len() as u64)
    }

    async fn delete_employee_cascade(&self, employee_id: &str) -> StoreResult<Option<u64>> {
        let mut state = self.state();
        if state.employees.remove(employee_id).is_none() {
            return Ok(None);
        }
        let before = state.attendance.len();
        state.attendance.retain(|(owner, _), _| owner != employee_id);
        Ok(Some((before - state.attendance.len()) as u64))
    }

    async fn insert_attendance(&self, record: &AttendanceRecord) -> StoreResult<()> {
        let mut state = self.state();
        let key = (record.employee_id.clone(), record.date);
        if state.attendance.contains_key(&key) {
            return Err(StoreError::Duplicate);
        }
        state.attendance.insert(key, record.status);
        Ok(())
    }

    async fn find_attendance(&self, filter: &AttendanceFilter) -> StoreResult<Vec<AttendanceRecord>> {
        let state = self.state();
        let mut records: Vec<AttendanceRecord> = state
            .attendance
            .iter()
            .filter(|((owner, date), _)| {
                filter.employee_id.as_ref().is_none_or(|id| id == owner) && filter.range.contains(*date)
            })
            .map(|((owner, date), status)| AttendanceRecord {
                employee_id: owner.clone(),
                date: *date,
                status: *status,
            })
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.employee_id.cmp(&b.employee_id)));
        Ok(records)
    }

    async fn tally_attendance(
        &self,
        employee_id: Option<&str>,
    ) -> StoreResult<HashMap<String, StatusTally>> {
        let state = self.state();
        let mut tallies: HashMap<String, StatusTally> = HashMap::new();
        for ((owner, _), status) in &state.attendance {
            if employee_id.is_some_and(|id| id != owner.as_str()) {
                continue;
            }
            add_to_tally(tallies.entry(owner.clone()).or_default(), *status, 1);
        }
        Ok(tallies)
    }

    async fn count_attendance_on(
        &self,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> StoreResult<u64> {
        let state = self.state();
        let count = state
            .attendance
            .iter()
            .filter(|((_, day), s)| *day == date && **s == status)
            .count();
        Ok(count as u64)
    }
}
