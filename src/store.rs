//! Connection pool construction for the SQLite store.

use crate::config::ServerConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

/// How long a connection waits on a locked database before failing.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the pool described by config. The database file is created if missing.
/// WAL lets readers proceed while a write session holds the lock.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let mut options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);
    if !config.echo_sql {
        options = options.disable_statement_logging();
    }
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(url = %config.database_url, "database pool ready");
    Ok(pool)
}

/// Single-connection in-memory pool. The connection is never recycled, since
/// closing it would discard the database.
pub async fn memory_pool() -> Result<SqlitePool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}
