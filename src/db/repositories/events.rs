//! Event queries.

use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::Event;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All events, in whatever order the store returns them.
    pub async fn list(&self) -> Result<Vec<Event>, ApiError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, location, starts_at FROM events",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
