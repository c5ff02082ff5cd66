//! Error types for the payroll store
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::record::EmployeeId;

/// Result type alias using PayrollError
pub type Result<T> = std::result::Result<T, PayrollError>;

/// Unified error type for payroll store operations
#[derive(Debug, Error)]
pub enum PayrollError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    /// Bad user input: empty name, unparsable or negative salary
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation referenced an identifier with no live record
    #[error("Employee not found: {id}")]
    NotFound { id: EmployeeId },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Backing file or export destination unreadable/unwritable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PayrollError {
    /// Shorthand for a validation failure
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        PayrollError::Validation(message.into())
    }
}

impl From<serde_json::Error> for PayrollError {
    fn from(e: serde_json::Error) -> Self {
        PayrollError::Serialization(e.to_string())
    }
}
