use anyhow::{Context, Result};
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<MySqlPool> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

// Binary collation keeps ids and emails case-sensitive.
const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        employee_id VARCHAR(20) NOT NULL,
        full_name   VARCHAR(100) NOT NULL,
        email       VARCHAR(255) NOT NULL,
        department  VARCHAR(50) NOT NULL,
        PRIMARY KEY (employee_id),
        UNIQUE KEY uq_employees_email (email)
    ) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attendance (
        employee_id VARCHAR(20) NOT NULL,
        date        DATE NOT NULL,
        status      VARCHAR(16) NOT NULL,
        PRIMARY KEY (employee_id, date),
        KEY idx_attendance_date (date)
    ) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin
    "#,
];

/// Creates the tables and their unique keys if missing. Must run before serving.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("Failed to prepare database schema")?;
    }
    info!("Database schema ready");
    Ok(())
}
