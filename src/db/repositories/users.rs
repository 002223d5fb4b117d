//! User queries.
//!
//! The users table is read-only from this system: there is no registration
//! endpoint, and rows are expected to be seeded directly in the database.

use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::User;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up a user by exact email match.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, first_name, last_name, role \
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
