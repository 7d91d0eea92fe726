//! Database connection management.

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::{Error, Result};

/// Create a database connection pool.
///
/// The URL scheme picks the driver, so the same repository code runs against
/// Postgres in production and SQLite locally.
pub async fn create_pool(config: &DatabaseConfig) -> Result<AnyPool> {
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.connection_string)
        .await
        .map_err(Error::Database)?;

    info!(driver = driver_name(&config.connection_string), "Database pool ready");

    Ok(pool)
}

fn driver_name(connection_string: &str) -> &str {
    connection_string
        .split_once(':')
        .map(|(scheme, _)| scheme)
        .unwrap_or("unknown")
}
