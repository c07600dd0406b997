//! Database - Session provider backed by a SQLite connection pool
//!
//! A unit of work asks for a [`Session`], hands it to a repository and drops it
//! when done. Dropping the session returns the connection to the pool, whether
//! the work succeeded or failed.

use super::config::{StoreSettings, mask_url};
use super::error::StoreResult;
use crate::entities::Entity;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Sqlite, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// One pooled connection, scoped to a single unit of work
pub type Session = PoolConnection<Sqlite>;

#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the connection pool described by `settings`
    #[instrument(skip(settings), fields(database = %mask_url(&settings.database_url)))]
    pub async fn connect(settings: &StoreSettings) -> StoreResult<Self> {
        let mut options = SqliteConnectOptions::from_str(&settings.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        // sqlx logs statements at DEBUG unless told otherwise
        if !settings.echo_sql {
            options = options.disable_statement_logging();
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        info!(max_connections = settings.max_connections, "Connection pool ready");
        Ok(Self { pool })
    }

    /// Wraps a pool created elsewhere (e.g. by `#[sqlx::test]`)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Acquires a session for one unit of work
    #[instrument(skip(self))]
    pub async fn session(&self) -> StoreResult<Session> {
        let session = self.pool.acquire().await?;
        debug!("Session acquired");
        Ok(session)
    }

    /// Creates the table backing `E` if it does not exist yet
    #[instrument(skip(self), fields(table = E::TABLE))]
    pub async fn create_table<E: Entity>(&self) -> StoreResult<()> {
        sqlx::query(E::DDL).execute(&self.pool).await?;
        info!("Table ready");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Connection pool closed");
    }
}
