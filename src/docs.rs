use crate::model::attendance::{AttendanceCreate, AttendanceResponse, AttendanceStatus};
use crate::model::dashboard::DashboardSummary;
use crate::model::employee::{Employee, EmployeeCreate, EmployeeDeleted, EmployeeResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A lightweight Human Resource Management API for keeping an employee roster
and recording daily attendance.

### Key Features
- **Employees**: add, list, view and delete employees (deleting also removes their attendance)
- **Attendance**: mark a day as Present or Absent, once per employee per day, and browse history by date range
- **Dashboard**: today's present / absent / not-marked counts

### Errors
Every failure responds with `{"detail": "..."}`.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_employee_attendance,
        crate::api::attendance::list_attendance,

        crate::api::dashboard::summary
    ),
    components(
        schemas(
            Employee,
            EmployeeCreate,
            EmployeeResponse,
            EmployeeDeleted,
            AttendanceStatus,
            AttendanceCreate,
            AttendanceResponse,
            DashboardSummary
        )
    ),
    tags(
        (name = "Employees", description = "Employee roster APIs"),
        (name = "Attendance", description = "Daily attendance APIs"),
        (name = "Dashboard", description = "Today's summary"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for expected in [
            "/api/employees",
            "/api/employees/{employee_id}",
            "/api/attendance",
            "/api/attendance/{employee_id}",
            "/api/dashboard/summary",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
    }
}
