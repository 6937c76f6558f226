//! Database pool, migrations, and expiry sweeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup creates the shared SQLx pool and applies the embedded migrations
//! (`login_nonces`, `sessions`) before the router accepts traffic. A
//! background task then deletes expired rows so neither table grows with
//! abandoned logins.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::services::store::LoginStore;

const SWEEP_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}

/// Spawn the periodic expired-row sweep. Failures are logged and retried on
/// the next tick.
pub fn spawn_expiry_sweeper(store: Arc<dyn LoginStore>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            match store.purge_expired().await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!(removed, "expired login rows purged"),
                Err(e) => tracing::warn!(error = %e, "expiry sweep failed"),
            }
        }
    })
}
