//! Storage configuration for the SQLite adapter

use crate::constants::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_POOL_SIZE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration
///
/// `path` backs the write path. `read_path` optionally points the read path
/// at a replica; when unset, reads route to `path` as well, which collapses
/// the read/write split onto a single database with no behavior change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    /// Optional replica location for the read path
    #[serde(default)]
    pub read_path: Option<PathBuf>,
    /// SQLite connection pool size (per path)
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// SQLite busy timeout in milliseconds
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_storage_path() -> PathBuf {
    crate::paths::default_database_path()
}

fn default_pool_size() -> u32 {
    DEFAULT_POOL_SIZE
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            path: default_storage_path(),
            read_path: None,
            pool_size: default_pool_size(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl StorageConfig {
    /// Effective path for the read path: the replica when configured,
    /// otherwise the primary.
    pub fn effective_read_path(&self) -> &PathBuf {
        self.read_path.as_ref().unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_path_falls_back_to_primary() {
        let config = StorageConfig {
            path: PathBuf::from("/data/cadastro.db"),
            ..StorageConfig::default()
        };
        assert_eq!(config.effective_read_path(), &config.path);

        let config = StorageConfig {
            read_path: Some(PathBuf::from("/data/replica.db")),
            ..config
        };
        assert_eq!(
            config.effective_read_path(),
            &PathBuf::from("/data/replica.db")
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: StorageConfig = toml::from_str("").unwrap();
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
        assert_eq!(config.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
        assert!(config.read_path.is_none());
    }
}
