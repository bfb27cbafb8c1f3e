use actix_web::{HttpResponse, web};

use crate::error::ApiResult;
use crate::model::employee::{EmployeeCreate, EmployeeDeleted, EmployeeResponse};
use crate::service::directory::Directory;

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeCreate,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 409, description = "Employee ID or email already exists", body = Object, example = json!({
            "detail": "Employee with ID 'EMP-001' already exists"
        })),
        (status = 422, description = "Invalid employee payload", body = Object, example = json!({
            "detail": "email: Invalid email address"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    directory: web::Data<Directory>,
    payload: web::Json<EmployeeCreate>,
) -> ApiResult<HttpResponse> {
    let employee = directory.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// List Employees with attendance totals
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = Vec<EmployeeResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn list_employees(directory: web::Data<Directory>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(directory.list().await?))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP-001' not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn get_employee(
    directory: web::Data<Directory>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let employee_id = path.into_inner();
    Ok(HttpResponse::Ok().json(directory.get(&employee_id).await?))
}

/// Delete Employee and their attendance
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = EmployeeDeleted),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP-001' not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    directory: web::Data<Directory>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let employee_id = path.into_inner();
    Ok(HttpResponse::Ok().json(directory.delete(&employee_id).await?))
}
