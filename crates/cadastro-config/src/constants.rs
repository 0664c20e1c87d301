//! Default constants for Cadastro configuration
//!
//! This module centralizes the constants used throughout the codebase,
//! providing a single source of truth for default values.

// ============================================================================
// ENVIRONMENT VARIABLES
// ============================================================================

/// Cadastro home directory override
pub const ENV_CADASTRO_HOME: &str = "CADASTRO_HOME";

/// Config file path override
pub const ENV_CADASTRO_CONFIG: &str = "CADASTRO_CONFIG";

// ============================================================================
// FILENAMES
// ============================================================================

/// Default config file name inside the Cadastro home directory
pub const DEFAULT_CONFIG_FILENAME: &str = "cadastro.toml";

/// Default SQLite database file name inside the Cadastro home directory
pub const DEFAULT_DATABASE_FILENAME: &str = "cadastro.db";

// ============================================================================
// STORAGE
// ============================================================================

/// Default SQLite connection pool size (per path)
pub const DEFAULT_POOL_SIZE: u32 = 5;

/// Default SQLite busy timeout in milliseconds
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

// ============================================================================
// PAGINATION
// ============================================================================

/// Default page size for client listings
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Maximum page size; larger requested limits are clamped down, not rejected
pub const MAX_PAGE_LIMIT: u32 = 100;

// ============================================================================
// DASHBOARD
// ============================================================================

/// Default number of trailing months in the clients chart
pub const DEFAULT_CHART_MONTHS: u32 = 12;

// ============================================================================
// EVENTS
// ============================================================================

/// Capacity of the domain event broadcast channel
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;
