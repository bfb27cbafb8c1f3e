use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use tracing::{debug, info};

use super::{AttendanceFilter, Store, StoreError, StoreResult, add_to_tally};
use crate::model::attendance::{AttendanceRecord, AttendanceRow, AttendanceStatus};
use crate::model::employee::{Employee, StatusTally};

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Integrity violations (duplicate key) come back as SQLSTATE 23000.
fn map_insert_err(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23000") {
            return StoreError::Duplicate;
        }
    }
    StoreError::Database(e)
}

fn to_count(n: i64) -> u64 {
    u64::try_from(n).unwrap_or_default()
}

#[async_trait]
impl Store for MySqlStore {
    async fn insert_employee(&self, employee: &Employee) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&employee.employee_id)
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(&employee.department)
        .execute(&self.pool)
        .await
        .map_err(map_insert_err)?;

        Ok(())
    }

    async fn find_employee(&self, employee_id: &str) -> StoreResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT employee_id, full_name, email, department
            FROM employees
            WHERE employee_id = ?
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT employee_id, full_name, email, department FROM employees ORDER BY employee_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn count_employees(&self) -> StoreResult<u64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;

        Ok(to_count(total))
    }

    async fn delete_employee_cascade(&self, employee_id: &str) -> StoreResult<Option<u64>> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?;

        if removed.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let attendance = sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            employee_id,
            attendance_records_deleted = attendance.rows_affected(),
            "Employee deleted"
        );
        Ok(Some(attendance.rows_affected()))
    }

    async fn insert_attendance(&self, record: &AttendanceRecord) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO attendance (employee_id, date, status)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&record.employee_id)
        .bind(record.date)
        .bind(record.status.as_ref())
        .execute(&self.pool)
        .await
        .map_err(map_insert_err)?;

        Ok(())
    }

    async fn find_attendance(&self, filter: &AttendanceFilter) -> StoreResult<Vec<AttendanceRecord>> {
        // ---------- build WHERE clause dynamically ----------
        let mut builder: QueryBuilder<MySql> =
            QueryBuilder::new("SELECT employee_id, date, status FROM attendance WHERE 1 = 1");

        if let Some(employee_id) = &filter.employee_id {
            builder.push(" AND employee_id = ").push_bind(employee_id.clone());
        }
        if let Some(from) = filter.range.date_from {
            builder.push(" AND date >= ").push_bind(from);
        }
        if let Some(to) = filter.range.date_to {
            builder.push(" AND date <= ").push_bind(to);
        }
        builder.push(" ORDER BY date DESC, employee_id ASC");

        debug!(sql = %builder.sql(), ?filter, "Fetching attendance");

        let rows = builder
            .build_query_as::<AttendanceRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| AttendanceRecord::try_from(row).map_err(|e| StoreError::Decode(e.to_string())))
            .collect()
    }

    async fn tally_attendance(
        &self,
        employee_id: Option<&str>,
    ) -> StoreResult<HashMap<String, StatusTally>> {
        let mut builder: QueryBuilder<MySql> =
            QueryBuilder::new("SELECT employee_id, status, COUNT(*) FROM attendance");
        if let Some(employee_id) = employee_id {
            builder.push(" WHERE employee_id = ").push_bind(employee_id.to_string());
        }
        builder.push(" GROUP BY employee_id, status");

        let rows = builder
            .build_query_as::<(String, String, i64)>()
            .fetch_all(&self.pool)
            .await?;

        let mut tallies: HashMap<String, StatusTally> = HashMap::new();
        for (employee_id, status, count) in rows {
            let status: AttendanceStatus = status
                .parse()
                .map_err(|_| StoreError::Decode(format!("attendance status '{status}'")))?;
            add_to_tally(tallies.entry(employee_id).or_default(), status, to_count(count));
        }

        Ok(tallies)
    }

    async fn count_attendance_on(
        &self,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> StoreResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?",
        )
        .bind(date)
        .bind(status.as_ref())
        .fetch_one(&self.pool)
        .await?;

        Ok(to_count(count))
    }
}
