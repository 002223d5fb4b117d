//! Connection pool construction and health probing.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;
use crate::error::ApiError;

/// How long a request may wait for a pooled connection.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the PostgreSQL connection pool from the application configuration.
pub async fn create_pool(config: &Config) -> Result<PgPool, ApiError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.database_url())
        .await?;

    info!(
        max_connections = config.db_max_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

/// Round-trip a trivial query to verify the store is reachable.
pub async fn health_check(pool: &PgPool) -> Result<(), ApiError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
