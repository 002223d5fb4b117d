//! Contact message queries.

use chrono::Utc;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::ContactRequest;

#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a contact message with a server-generated timestamp.
    pub async fn create(&self, request: ContactRequest) -> Result<(), ApiError> {
        sqlx::query(
            "INSERT INTO contacts (name, email, message, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(request.name)
        .bind(request.email)
        .bind(request.message)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
