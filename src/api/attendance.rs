use actix_web::{HttpResponse, web};

use crate::error::ApiResult;
use crate::model::attendance::{AttendanceCreate, AttendanceResponse, DateRange};
use crate::service::ledger::Ledger;

/// Mark attendance for an employee on a given date
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = AttendanceCreate,
    responses(
        (status = 201, description = "Attendance marked", body = AttendanceResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP-001' not found"
        })),
        (status = 409, description = "Already marked for that date", body = Object, example = json!({
            "detail": "Attendance for employee 'EMP-001' on 2024-03-01 is already marked"
        })),
        (status = 422, description = "Invalid attendance payload"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    ledger: web::Data<Ledger>,
    payload: web::Json<AttendanceCreate>,
) -> ApiResult<HttpResponse> {
    let marked = ledger.mark(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(marked))
}

/// Attendance history of one employee, newest first
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID"),
        DateRange
    ),
    responses(
        (status = 200, description = "Attendance records", body = Vec<AttendanceResponse>),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Invalid date filter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_employee_attendance(
    ledger: web::Data<Ledger>,
    path: web::Path<String>,
    query: web::Query<DateRange>,
) -> ApiResult<HttpResponse> {
    let employee_id = path.into_inner();
    let records = ledger.for_employee(&employee_id, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Attendance across all employees, newest first
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(DateRange),
    responses(
        (status = 200, description = "Attendance records", body = Vec<AttendanceResponse>),
        (status = 422, description = "Invalid date filter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    ledger: web::Data<Ledger>,
    query: web::Query<DateRange>,
) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ledger.all(query.into_inner()).await?))
}
