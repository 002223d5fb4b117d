//! Admissions application queries.

use chrono::Utc;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::{Application, NewApplication};

const APPLICATION_COLUMNS: &str = "id, full_name, address, education, qualification_file, \
     school, program, intake, mode, email, phone, source, created_at, status";

#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a submitted application with a server-generated timestamp.
    ///
    /// All fields are written as supplied; the qualification file (if any)
    /// has already been persisted to disk by the caller.
    pub async fn create(&self, application: NewApplication) -> Result<(), ApiError> {
        sqlx::query(
            "INSERT INTO applications \
             (full_name, address, education, qualification_file, school, program, \
              intake, mode, email, phone, source, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(application.full_name)
        .bind(application.address)
        .bind(application.education)
        .bind(application.qualification_file)
        .bind(application.school)
        .bind(application.program)
        .bind(application.intake)
        .bind(application.mode)
        .bind(application.email)
        .bind(application.phone)
        .bind(application.source)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All applications, or those matching an exact email if one is given.
    pub async fn list(&self, email: Option<&str>) -> Result<Vec<Application>, ApiError> {
        let applications = match email {
            Some(email) => {
                sqlx::query_as::<_, Application>(&format!(
                    "SELECT {APPLICATION_COLUMNS} FROM applications WHERE email = $1"
                ))
                .bind(email)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Application>(&format!(
                    "SELECT {APPLICATION_COLUMNS} FROM applications"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(applications)
    }

    /// Set the status column to whatever string was supplied.
    ///
    /// Returns the number of rows affected. An id that matches nothing is a
    /// no-op, not an error.
    pub async fn update_status(&self, id: i64, status: &str) -> Result<u64, ApiError> {
        let result = sqlx::query("UPDATE applications SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
