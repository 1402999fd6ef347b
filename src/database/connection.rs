use sqlx::{
    PgPool, Postgres, Transaction,
    pool::PoolConnection,
    postgres::{PgConnectOptions, PgPoolOptions},
};

use crate::{config::DatabaseConfig, error::Result};

/// Builds the bounded pool. Connections are opened on first use, so the
/// service starts even while the database is down.
pub fn create_pool(config: &DatabaseConfig) -> PgPool {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name)
        .username(&config.user)
        .password(&config.password);

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options);

    tracing::info!(
        "Database pool configured for {}:{}/{} with {} max connections",
        config.host,
        config.port,
        config.name,
        config.max_connections
    );

    pool
}

/// Takes one connection out of the pool for the current request.
///
/// Failures are logged and reported as `None`; the connection goes back to
/// the pool when the returned guard is dropped.
pub async fn acquire(pool: &PgPool) -> Option<PoolConnection<Postgres>> {
    match pool.acquire().await {
        Ok(conn) => Some(conn),
        Err(e) => {
            tracing::error!("Error while connecting to PostgreSQL: {}", e);
            None
        }
    }
}

pub async fn rollback(tx: Transaction<'_, Postgres>) {
    if let Err(e) = tx.rollback().await {
        tracing::error!("Failed to roll back transaction: {}", e);
    }
}

pub async fn check_health(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
