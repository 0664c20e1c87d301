//! Path resolution for the Cadastro home directory and its files

use crate::constants::{DEFAULT_CONFIG_FILENAME, DEFAULT_DATABASE_FILENAME, ENV_CADASTRO_HOME};
use std::path::PathBuf;

/// Resolve the Cadastro home directory.
///
/// Resolution order:
/// 1. `CADASTRO_HOME` environment variable
/// 2. `$HOME/.cadastro`
/// 3. `.cadastro` relative to the working directory
pub fn cadastro_home() -> PathBuf {
    if let Some(home) = std::env::var_os(ENV_CADASTRO_HOME) {
        return PathBuf::from(home);
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".cadastro");
    }
    PathBuf::from(".cadastro")
}

/// Default path of the SQLite database file
pub fn default_database_path() -> PathBuf {
    cadastro_home().join(DEFAULT_DATABASE_FILENAME)
}

/// Default path of the config file
pub fn default_config_path() -> PathBuf {
    cadastro_home().join(DEFAULT_CONFIG_FILENAME)
}
