//! Cadastro configuration
//!
//! Configuration types with serde defaults, the constants module as the
//! single source of truth for default values, path resolution for the
//! Cadastro home directory and a strict TOML loader.

pub mod constants;
pub mod loader;
pub mod paths;
mod storage;

pub use loader::{
    ensure_default_config, load_config, resolve_config_path, ConfigError, DEFAULT_CONFIG,
};
pub use storage::StorageConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}
