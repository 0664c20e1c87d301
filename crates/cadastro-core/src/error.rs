//! Error types for the Cadastro core domain

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Error Codes - Machine-readable codes for API consumers
// ============================================================================

/// Machine-readable error codes for API consumers.
///
/// Error code ranges:
/// - 1xxx: Client errors
/// - 5xxx: Infrastructure errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u16")]
pub enum ErrorCode {
    // Client errors (1xxx)
    /// Client not found (1001)
    ClientNotFound = 1001,
    /// Invalid CPF (1002)
    ClientInvalidCpf = 1002,
    /// Invalid phone number (1003)
    ClientInvalidPhone = 1003,
    /// Email already in use by an active client (1004)
    ClientEmailConflict = 1004,
    /// CPF already in use by an active client (1005)
    ClientCpfConflict = 1005,
    /// Entity invariant violated (1006)
    ClientInvalidState = 1006,

    // Infrastructure errors (5xxx)
    /// Database error (5001)
    DatabaseError = 5001,
    /// I/O error (5003)
    IoError = 5003,
    /// Serialization error (5004)
    SerializationError = 5004,
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

// ============================================================================
// Error Categories - Classification for retry logic
// ============================================================================

/// Error categorization for client retry handling.
///
/// Helps callers determine whether to retry failed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Temporary failure, safe to retry (busy DB, I/O hiccup)
    Retryable,
    /// Permanent failure, don't retry (invalid input, not found)
    Terminal,
    /// Uniqueness violation; retrying the same payload fails again
    Conflict,
    /// Server-side issue, contact support
    Internal,
}

impl ErrorCategory {
    /// Get the category name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCategory::Retryable => "retryable",
            ErrorCategory::Terminal => "terminal",
            ErrorCategory::Conflict => "conflict",
            ErrorCategory::Internal => "internal",
        }
    }

    /// Returns true if this error category indicates the operation can be retried
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Retryable)
    }
}

impl ErrorCode {
    /// Get the numeric value of the error code
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get the category of this error code
    pub fn category(&self) -> ErrorCategory {
        match self {
            // Retryable - temporary failures
            ErrorCode::DatabaseError => ErrorCategory::Retryable,
            ErrorCode::IoError => ErrorCategory::Retryable,

            // Terminal - permanent failures, don't retry
            ErrorCode::ClientNotFound => ErrorCategory::Terminal,
            ErrorCode::ClientInvalidCpf => ErrorCategory::Terminal,
            ErrorCode::ClientInvalidPhone => ErrorCategory::Terminal,

            // Conflict - uniqueness violations
            ErrorCode::ClientEmailConflict => ErrorCategory::Conflict,
            ErrorCode::ClientCpfConflict => ErrorCategory::Conflict,

            // Internal - server-side issues
            ErrorCode::ClientInvalidState => ErrorCategory::Internal,
            ErrorCode::SerializationError => ErrorCategory::Internal,
        }
    }

    /// Get the error code name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::ClientNotFound => "CLIENT_NOT_FOUND",
            ErrorCode::ClientInvalidCpf => "CLIENT_INVALID_CPF",
            ErrorCode::ClientInvalidPhone => "CLIENT_INVALID_PHONE",
            ErrorCode::ClientEmailConflict => "CLIENT_EMAIL_CONFLICT",
            ErrorCode::ClientCpfConflict => "CLIENT_CPF_CONFLICT",
            ErrorCode::ClientInvalidState => "CLIENT_INVALID_STATE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
        }
    }
}

// ============================================================================
// NotFoundError Trait - Common interface for "not found" style errors
// ============================================================================

/// Trait for "not found" style errors.
///
/// Provides a common interface to check if an error represents a resource
/// not being found and to extract the resource type and identifier.
pub trait NotFoundError {
    /// Returns true if this error represents a "not found" condition
    fn is_not_found(&self) -> bool;

    /// The type of resource that wasn't found (e.g., "client")
    fn resource_type(&self) -> Option<&'static str>;

    /// The resource identifier that wasn't found
    fn resource_id(&self) -> Option<&str>;
}

impl NotFoundError for Error {
    fn is_not_found(&self) -> bool {
        matches!(self, Error::ClientNotFound(_))
    }

    fn resource_type(&self) -> Option<&'static str> {
        match self {
            Error::ClientNotFound(_) => Some("client"),
            _ => None,
        }
    }

    fn resource_id(&self) -> Option<&str> {
        match self {
            Error::ClientNotFound(id) => Some(id),
            _ => None,
        }
    }
}

impl Error {
    /// Helper to create a client not found error
    pub fn client_not_found(id: impl Into<String>) -> Self {
        Error::ClientNotFound(id.into())
    }
}

// Error conversions
// Note: These From impls are a pragmatic trade-off to simplify error handling
// in the storage layer. Unique-constraint violations are translated to the
// conflict variants at the repository boundary before this fallback applies.
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Database(err.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::migrate::MigrateError> for Error {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Error::Database(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Identifier validation errors
    #[error("Invalid CPF: {0}")]
    InvalidCpf(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    // Uniqueness conflicts (among active clients only)
    #[error("Email already in use: {0}")]
    EmailConflict(String),

    #[error("CPF already in use: {0}")]
    CpfConflict(String),

    // Lookup errors
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    // Entity invariant violations (defensive; should not occur with correct callers)
    #[error("Invalid client state: {0}")]
    InvalidState(String),

    // Storage errors
    #[error("Database error: {0}")]
    Database(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Get the machine-readable error code for this error.
    ///
    /// Error codes are stable and can be used for client-side error handling,
    /// internationalization, and monitoring.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ClientNotFound(_) => ErrorCode::ClientNotFound,
            Error::InvalidCpf(_) => ErrorCode::ClientInvalidCpf,
            Error::InvalidPhone(_) => ErrorCode::ClientInvalidPhone,
            Error::EmailConflict(_) => ErrorCode::ClientEmailConflict,
            Error::CpfConflict(_) => ErrorCode::ClientCpfConflict,
            Error::InvalidState(_) => ErrorCode::ClientInvalidState,
            Error::Database(_) => ErrorCode::DatabaseError,
            Error::Io(_) => ErrorCode::IoError,
            Error::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    /// Get the error code name (e.g., "CLIENT_NOT_FOUND")
    pub fn code_name(&self) -> &'static str {
        self.code().name()
    }

    /// Get the error category for retry logic.
    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    /// Returns true if this error is safe to retry.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Returns true if this error is a uniqueness conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self.category(), ErrorCategory::Conflict)
    }
}
