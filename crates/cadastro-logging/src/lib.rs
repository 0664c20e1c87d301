//! Centralized logging configuration for Cadastro
//!
//! This crate provides a unified logging initialization API so every
//! embedding binary and integration test configures `tracing` the same way.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cadastro_logging::{init, LogConfig, LogOutput};
//!
//! // Simple initialization with defaults
//! init(LogConfig::default());
//!
//! // Debug logging to stderr
//! init(LogConfig::new().debug(true).output(LogOutput::Stderr));
//! ```
//!
//! # Re-exports
//!
//! This crate re-exports commonly used tracing macros for convenience:
//! - `trace!`, `debug!`, `info!`, `warn!`, `error!`
//! - `span!`, `Level`, the `instrument` attribute macro

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for standardized imports
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level};

// Re-export the crate for qualified usage (tracing::debug!)
pub use tracing;

/// Output destination for logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogOutput {
    /// Write logs to stdout (default)
    #[default]
    Stdout,
    /// Write logs to stderr (keeps stdout clean for program output)
    Stderr,
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Enable debug-level logging (overrides default_level)
    pub debug: bool,
    /// Default log level when RUST_LOG is not set
    pub default_level: String,
    /// Output destination
    pub output: LogOutput,
    /// Show module target in log output
    pub show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            default_level: "info".to_string(),
            output: LogOutput::default(),
            show_target: false,
        }
    }
}

impl LogConfig {
    /// Create a new LogConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable debug-level logging
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the default level used when RUST_LOG is not set
    pub fn default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    /// Set the output destination
    pub fn output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    /// Show module targets in log lines
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        let default = if self.debug {
            "debug"
        } else {
            self.default_level.as_str()
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once: subsequent calls are no-ops (important for
/// test binaries where several tests may initialize logging).
pub fn init(config: LogConfig) {
    let filter = config.env_filter();

    match config.output {
        LogOutput::Stdout => {
            let layer = fmt::layer().with_target(config.show_target);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
        LogOutput::Stderr => {
            let layer = fmt::layer()
                .with_target(config.show_target)
                .with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
    }
}
