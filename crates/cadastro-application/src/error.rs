//! Application layer error types
//!
//! Wraps domain errors so the application surface stays stable if
//! application-specific error kinds are added later.
//!
//! ## Error Handling Philosophy
//!
//! All errors are propagated upstack to the presentation layer. This allows:
//! - Centralized logging at the top layer
//! - Consistent error formatting
//! - Testable error handling (assert on returned errors, not logs)

use cadastro_core::{ErrorCategory, ErrorCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Application layer error
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Domain layer error
    #[error(transparent)]
    Core(#[from] cadastro_core::Error),
}

impl Error {
    /// Get the machine-readable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Core(err) => err.code(),
        }
    }

    /// Get the error category for retry logic.
    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    /// Access the underlying domain error.
    pub fn as_core(&self) -> &cadastro_core::Error {
        match self {
            Error::Core(err) => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_display() {
        let err: Error = cadastro_core::Error::ClientNotFound("abc".to_string()).into();
        assert_eq!(err.to_string(), "Client not found: abc");
        assert_eq!(err.code(), ErrorCode::ClientNotFound);
        assert_eq!(err.category(), ErrorCategory::Terminal);
    }
}
