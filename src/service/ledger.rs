use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use super::directory::Directory;
use crate::error::{ApiError, ApiResult};
use crate::model::attendance::{AttendanceCreate, AttendanceResponse, DateRange, enrich};
use crate::store::{AttendanceFilter, Store, StoreError};

/// Per-employee, per-day attendance. At most one record per (employee, date).
#[derive(Clone)]
pub struct Ledger {
    directory: Directory,
    store: Arc<dyn Store>,
}

impl Ledger {
    pub fn new(directory: Directory, store: Arc<dyn Store>) -> Self {
        Self { directory, store }
    }

    /// Records a day's status. Marking the same day twice is rejected, never replaced.
    pub async fn mark(&self, payload: AttendanceCreate) -> ApiResult<AttendanceResponse> {
        let payload = payload.normalized();
        payload.validate()?;

        let employee = self.directory.require(&payload.employee_id).await?;
        let record = payload.into_record();

        match self.store.insert_attendance(&record).await {
            Ok(()) => {
                info!(
                    employee_id = %record.employee_id,
                    date = %record.date,
                    status = %record.status,
                    "Attendance marked"
                );
                Ok(AttendanceResponse::named(record, employee.full_name))
            }
            Err(StoreError::Duplicate) => {
                warn!(employee_id = %record.employee_id, date = %record.date, "Attendance already marked");
                Err(ApiError::Conflict(format!(
                    "Attendance for employee '{}' on {} is already marked",
                    record.employee_id, record.date
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn for_employee(
        &self,
        employee_id: &str,
        range: DateRange,
    ) -> ApiResult<Vec<AttendanceResponse>> {
        let employee = self.directory.require(employee_id).await?;

        let records = self
            .store
            .find_attendance(&AttendanceFilter {
                employee_id: Some(employee.employee_id),
                range,
            })
            .await?;

        Ok(records
            .into_iter()
            .map(|record| AttendanceResponse::named(record, employee.full_name.as_str()))
            .collect())
    }

    pub async fn all(&self, range: DateRange) -> ApiResult<Vec<AttendanceResponse>> {
        let records = self
            .store
            .find_attendance(&AttendanceFilter {
                employee_id: None,
                range,
            })
            .await?;
        let names = self.directory.names().await?;

        Ok(records
            .into_iter()
            .map(|record| enrich(record, &names))
            .collect())
    }
}
