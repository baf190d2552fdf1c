//! Connection pool construction for the SQLite store.

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// True for URLs that open a private in-memory database per connection.
fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Build the process-wide pool. Creates the database file if it does not exist.
/// An in-memory database lives inside one connection, so that pool is pinned to a
/// single connection that is never retired.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: database_url.to_string(),
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(opts)
            .await?
    };
    tracing::debug!(url = %database_url, "database pool ready");
    Ok(pool)
}
