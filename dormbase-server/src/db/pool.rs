//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits. Pool creation
//! establishes a connection, so startup fails fast when the store is
//! unreachable.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

/// Default maximum connections for the pool.
/// Kept low for a single-campus deployment.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a MySQL connection pool.
///
/// # Arguments
///
/// * `database_url` - MySQL connection string
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("mysql://localhost/dormitory").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a MySQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - MySQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
