//! Database access
//!
//! The pool is built once at startup from `DatabaseConfig`; PostgreSQL
//! is the service's only external dependency, so `ping` doubles as the
//! readiness signal.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Build the connection pool from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let options = PgConnectOptions::from_str(&config.url)?.application_name("blog-backend");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
        .connect_with(options)
        .await?;

    info!(
        max = config.max_connections,
        min = config.min_connections,
        "Database pool ready"
    );

    Ok(pool)
}

/// Apply pending migrations from ./migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn ping(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await.map_err(|e| {
        debug!("Database ping failed: {}", e);
        anyhow::Error::from(e)
    })?;
    Ok(())
}
