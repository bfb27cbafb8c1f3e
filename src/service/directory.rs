use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::model::employee::{Employee, EmployeeCreate, EmployeeDeleted, EmployeeResponse, StatusTally};
use crate::store::{Store, StoreError};

/// Employee roster. Owns identity and the uniqueness of employee_id and email.
#[derive(Clone)]
pub struct Directory {
    store: Arc<dyn Store>,
}

impl Directory {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: EmployeeCreate) -> ApiResult<EmployeeResponse> {
        let payload = payload.normalized();
        payload.validate()?;
        let employee = payload.into_employee();

        match self.store.insert_employee(&employee).await {
            Ok(()) => {
                info!(employee_id = %employee.employee_id, "Employee created");
                Ok(EmployeeResponse::new(employee, StatusTally::default()))
            }
            Err(StoreError::Duplicate) => {
                warn!(employee_id = %employee.employee_id, "Duplicate employee rejected");
                // Attribute the collision: the id takes precedence over the email.
                if self.store.find_employee(&employee.employee_id).await?.is_some() {
                    Err(ApiError::Conflict(format!(
                        "Employee with ID '{}' already exists",
                        employee.employee_id
                    )))
                } else {
                    Err(ApiError::Conflict(format!(
                        "Employee with email '{}' already exists",
                        employee.email
                    )))
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<EmployeeResponse>> {
        let employees = self.store.list_employees().await?;
        let mut tallies = self.store.tally_attendance(None).await?;

        Ok(employees
            .into_iter()
            .map(|employee| {
                let tally = tallies.remove(&employee.employee_id).unwrap_or_default();
                EmployeeResponse::new(employee, tally)
            })
            .collect())
    }

    pub async fn get(&self, employee_id: &str) -> ApiResult<EmployeeResponse> {
        let employee = self.require(employee_id).await?;
        let tally = self
            .store
            .tally_attendance(Some(employee_id))
            .await?
            .remove(employee_id)
            .unwrap_or_default();

        Ok(EmployeeResponse::new(employee, tally))
    }

    /// Removes the employee together with every attendance record it owns.
    pub async fn delete(&self, employee_id: &str) -> ApiResult<EmployeeDeleted> {
        let removed = self
            .store
            .delete_employee_cascade(employee_id)
            .await?
            .ok_or_else(|| ApiError::employee_not_found(employee_id))?;

        Ok(EmployeeDeleted {
            message: format!("Employee '{employee_id}' deleted successfully"),
            attendance_records_deleted: removed,
        })
    }

    /// Resolves an employee or fails with `NotFound`.
    pub async fn require(&self, employee_id: &str) -> ApiResult<Employee> {
        self.store
            .find_employee(employee_id)
            .await?
            .ok_or_else(|| ApiError::employee_not_found(employee_id))
    }

    /// employee_id -> full_name for every employee currently on the roster.
    pub async fn names(&self) -> ApiResult<std::collections::HashMap<String, String>> {
        Ok(self
            .store
            .list_employees()
            .await?
            .into_iter()
            .map(|e| (e.employee_id, e.full_name))
            .collect())
    }
}
