//! Configuration file loading
//!
//! Provides functions to load configuration from TOML files:
//!
//! - [`load_config`] - Strict loader, errors if the file is missing
//! - [`ensure_default_config`] - Creates a default config file without loading

use crate::constants::ENV_CADASTRO_CONFIG;
use crate::paths::default_config_path;
use crate::Config;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration template written by [`ensure_default_config`]
pub const DEFAULT_CONFIG: &str = "\
# Cadastro configuration

[storage]
# path = \"/var/lib/cadastro/cadastro.db\"
# read_path = \"/var/lib/cadastro/replica.db\"
# pool_size = 5
# busy_timeout_ms = 5000
";

/// Errors that can occur during config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Resolve the config path.
///
/// Resolution order:
/// 1. Explicit `path` argument, when given
/// 2. `CADASTRO_CONFIG` environment variable
/// 3. The default path under the Cadastro home directory
pub fn resolve_config_path(path: Option<&Path>) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }
    if let Some(env_path) = std::env::var_os(ENV_CADASTRO_CONFIG) {
        return PathBuf::from(env_path);
    }
    default_config_path()
}

/// Load configuration from a TOML file. Errors if the file does not exist.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;

    debug!(path = %path.display(), "Config loaded");
    Ok(config)
}

/// Create the default config file at `path` if it does not exist yet.
/// Returns the path. Never overwrites an existing file.
pub fn ensure_default_config(path: &Path) -> Result<PathBuf, ConfigError> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_CONFIG)?;
        debug!(path = %path.display(), "Default config created");
    }
    Ok(path.to_path_buf())
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.storage.pool_size == 0 {
        return Err(ConfigError::ValidationError(
            "storage.pool_size must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cadastro.toml");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_config_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cadastro.toml");
        std::fs::write(
            &path,
            r#"
[storage]
path = "/tmp/test.db"
pool_size = 3
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.storage.pool_size, 3);
    }

    #[test]
    fn test_load_config_rejects_zero_pool() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cadastro.toml");
        std::fs::write(&path, "[storage]\npool_size = 0\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cadastro.toml");
        std::fs::write(&path, "[storage\npath=").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_ensure_default_config_creates_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("cadastro.toml");

        let created = ensure_default_config(&path).unwrap();
        assert!(created.exists());

        // Second call leaves the file untouched
        std::fs::write(&path, "[storage]\npool_size = 9\n").unwrap();
        ensure_default_config(&path).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.storage.pool_size, 9);
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(config.storage.read_path.is_none());
    }
}
