//! SQLite storage implementation
//!
//! # Module Structure
//! - `mod.rs` - SqliteStorage, config, and shared helpers
//! - `client_repo.rs` - ClientRepository implementation
//!
//! # Read/write split
//!
//! The adapter holds two pools modeling a primary/replica topology: writes
//! (save, update, soft delete, increment) ride the write pool, reads and
//! aggregations ride the read pool. With no replica configured both pools
//! point at the same database file, which collapses the split with no
//! behavior change. The read path may lag a real replica; that staleness
//! window is an accepted property of the topology, not something this
//! adapter compensates for.

mod client_repo;


use cadastro_config::constants::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_POOL_SIZE};
use cadastro_core::error::{Error, Result};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// SQLite configuration
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Primary database backing the write path
    pub path: PathBuf,
    /// Optional replica backing the read path; `None` routes reads to the
    /// primary
    pub read_path: Option<PathBuf>,
    pub pool_size: u32,
    pub busy_timeout_ms: u64,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        SqliteConfig {
            path: cadastro_config::paths::default_database_path(),
            read_path: None,
            pool_size: DEFAULT_POOL_SIZE,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl From<&cadastro_config::StorageConfig> for SqliteConfig {
    fn from(config: &cadastro_config::StorageConfig) -> Self {
        SqliteConfig {
            path: config.path.clone(),
            read_path: config.read_path.clone(),
            pool_size: config.pool_size,
            busy_timeout_ms: config.busy_timeout_ms,
        }
    }
}

/// SQLite storage with split read/write connection pools
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    write_pool: SqlitePool,
    read_pool: SqlitePool,
}

impl SqliteStorage {
    /// Create new SQLite storage from config. Migrations run against the
    /// write path only; a configured replica is expected to receive schema
    /// changes through replication.
    pub async fn new(config: &SqliteConfig) -> Result<Self> {
        let write_pool = create_pool(&config.path, config).await?;
        run_migrations(&write_pool).await?;

        let read_pool = match &config.read_path {
            Some(read_path) => create_pool(read_path, config).await?,
            None => write_pool.clone(),
        };

        info!(path = %config.path.display(), "SQLite storage initialized");

        Ok(SqliteStorage {
            write_pool,
            read_pool,
        })
    }

    /// Create in-memory storage (for testing).
    ///
    /// Both paths share a single pool: each `:memory:` connection would
    /// otherwise be its own empty database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str(":memory:")?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        run_migrations(&pool).await?;

        debug!("In-memory SQLite storage created");

        Ok(SqliteStorage {
            write_pool: pool.clone(),
            read_pool: pool,
        })
    }

    /// Pool backing the write path
    pub fn write_pool(&self) -> &SqlitePool {
        &self.write_pool
    }

    /// Pool backing the read path
    pub fn read_pool(&self) -> &SqlitePool {
        &self.read_pool
    }
}

/// Create connection pool
async fn create_pool(path: &Path, config: &SqliteConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&path.to_string_lossy())?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.pool_size)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Run database migrations using sqlx's built-in migration system
async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    debug!("Database migrations completed");
    Ok(())
}

// =============================================================================
// Shared Helper Functions
// =============================================================================

/// Timestamps are persisted as microseconds since epoch.
pub(crate) fn datetime_to_micros(ts: DateTime<Utc>) -> i64 {
    ts.timestamp_micros()
}

pub(crate) fn micros_to_datetime(micros: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| Error::Serialization(format!("timestamp out of range: {micros}")))
}

/// First instant of the month `back` months before `ts` (UTC).
pub(crate) fn month_floor_back(ts: DateTime<Utc>, back: u32) -> DateTime<Utc> {
    let total = ts.year() * 12 + ts.month0() as i32 - back as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .unwrap_or(ts) // day 1 of a real month is always representable
}

/// Parse a `YYYY-MM` group key into the first instant of that month (UTC).
pub(crate) fn parse_month_key(key: &str) -> Result<DateTime<Utc>> {
    let parse_err = || Error::Serialization(format!("invalid month key '{key}'"));

    let (year, month) = key.split_once('-').ok_or_else(parse_err)?;
    let year: i32 = year.parse().map_err(|_| parse_err())?;
    let month: u32 = month.parse().map_err(|_| parse_err())?;

    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(parse_err)
}
