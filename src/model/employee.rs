use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Stored employee profile. `employee_id` is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP-001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct EmployeeCreate {
    #[validate(length(min = 1, max = 20, message = "Employee ID must be 1-20 characters"))]
    #[schema(example = "EMP-001", value_type = String)]
    pub employee_id: String,

    #[validate(length(min = 2, max = 100, message = "Full name must be 2-100 characters"))]
    #[schema(example = "John Doe", value_type = String)]
    pub full_name: String,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    #[schema(example = "john@email.com", format = "email", value_type = String)]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "Department must be 1-50 characters"))]
    #[schema(example = "Engineering", value_type = String)]
    pub department: String,
}

impl EmployeeCreate {
    /// Strips surrounding whitespace and lowercases the email domain; length
    /// limits are checked on the result.
    pub fn normalized(self) -> Self {
        Self {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: normalize_email(&self.email),
            department: self.department.trim().to_string(),
        }
    }

    pub fn into_employee(self) -> Employee {
        Employee {
            employee_id: self.employee_id,
            full_name: self.full_name,
            email: self.email,
            department: self.department,
        }
    }
}

/// The local part is kept as given; domains compare case-insensitively.
fn normalize_email(raw: &str) -> String {
    let email = raw.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Present/absent day counts for one employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub present: u64,
    pub absent: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP-001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "total_present": 12,
        "total_absent": 1
    })
)]
pub struct EmployeeResponse {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    #[schema(example = 12)]
    pub total_present: u64,
    #[schema(example = 1)]
    pub total_absent: u64,
}

impl EmployeeResponse {
    pub fn new(employee: Employee, tally: StatusTally) -> Self {
        Self {
            employee_id: employee.employee_id,
            full_name: employee.full_name,
            email: employee.email,
            department: employee.department,
            total_present: tally.present,
            total_absent: tally.absent,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDeleted {
    #[schema(example = "Employee 'EMP-001' deleted successfully")]
    pub message: String,
    #[schema(example = 3)]
    pub attendance_records_deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(employee_id: &str, full_name: &str, email: &str, department: &str) -> EmployeeCreate {
        EmployeeCreate {
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    #[test]
    fn normalized_trims_every_field() {
        let employee = input("  E1 ", " Alice  ", " a@x.com ", "\tEng\n").normalized();
        assert_eq!(employee.employee_id, "E1");
        assert_eq!(employee.full_name, "Alice");
        assert_eq!(employee.email, "a@x.com");
        assert_eq!(employee.department, "Eng");
        assert!(employee.validate().is_ok());
    }

    #[test]
    fn blank_id_and_department_are_rejected_after_trim() {
        let errors = input("   ", "Alice", "a@x.com", "  ")
            .normalized()
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("employee_id"));
        assert!(fields.contains_key("department"));
    }

    #[test]
    fn length_limits_are_enforced() {
        assert!(input(&"x".repeat(20), "Al", "a@x.com", "D").validate().is_ok());
        assert!(input(&"x".repeat(21), "Al", "a@x.com", "D").validate().is_err());
        assert!(input("E1", "A", "a@x.com", "D").validate().is_err());
        assert!(input("E1", &"a".repeat(101), "a@x.com", "D").validate().is_err());
        assert!(input("E1", "Al", "a@x.com", &"d".repeat(51)).validate().is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let errors = input("E1", "Alice", "not-an-email", "Eng")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn email_domain_is_lowercased_local_part_kept() {
        let employee = input("E1", "Alice", " Alice.Smith@X.COM ", "Eng").normalized();
        assert_eq!(employee.email, "Alice.Smith@x.com");
    }

    #[test]
    fn overlong_email_is_rejected() {
        let email = format!(
            "{}@{}.{}.{}.com",
            "a".repeat(64),
            "b".repeat(63),
            "c".repeat(63),
            "d".repeat(63)
        );
        assert!(email.chars().count() > 254);

        let errors = input("E1", "Alice", &email, "Eng")
            .normalized()
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn response_carries_tally() {
        let employee = input("E1", "Alice", "a@x.com", "Eng").into_employee();
        let response = EmployeeResponse::new(
            employee,
            StatusTally {
                present: 3,
                absent: 1,
            },
        );
        assert_eq!(response.total_present, 3);
        assert_eq!(response.total_absent, 1);
        assert_eq!(response.employee_id, "E1");
    }
}
