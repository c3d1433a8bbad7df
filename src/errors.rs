//! # Error Types
//!
//! Structured error types for the section database. Errors carry enough
//! context to be handled programmatically by downstream calculation code.
//!
//! There are only two failure families: a caller asked for a designation
//! that does not exist, or the dataset itself is defective. Neither is
//! transient, so nothing here is retryable.
//!
//! ## Example
//!
//! ```rust
//! use aisc_sections::errors::{SectionError, SectionResult};
//!
//! fn require_known(found: bool, label: &str) -> SectionResult<()> {
//!     if !found {
//!         return Err(SectionError::unknown_designation(label));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section database operations
pub type SectionResult<T> = Result<T, SectionError>;

/// Structured error type for section database operations.
///
/// Each variant provides specific context about what went wrong. All
/// variants indicate fixed defects (bad caller input or bad data), never
/// transient conditions.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SectionError {
    /// The requested designation has no matching record.
    ///
    /// Surfaced to the caller unconditionally; the database never
    /// substitutes zeroed or approximate properties for an unrecognized
    /// section.
    #[error("Unknown section designation: '{designation}'")]
    UnknownDesignation { designation: String },

    /// The dataset violates an invariant (duplicate label, negative
    /// dimension, label missing from the canonical registry).
    ///
    /// Fatal when detected while constructing a catalog; a corrupted
    /// catalog must not serve lookups.
    #[error("Data integrity violation: {reason}")]
    DataIntegrity { reason: String },

    /// File I/O or format error while loading a database export
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl SectionError {
    /// Create an UnknownDesignation error
    pub fn unknown_designation(designation: impl Into<String>) -> Self {
        SectionError::UnknownDesignation {
            designation: designation.into(),
        }
    }

    /// Create a DataIntegrity error
    pub fn data_integrity(reason: impl Into<String>) -> Self {
        SectionError::DataIntegrity {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SectionError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SectionError::UnknownDesignation { .. } => "UNKNOWN_DESIGNATION",
            SectionError::DataIntegrity { .. } => "DATA_INTEGRITY",
            SectionError::FileError { .. } => "FILE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SectionError::unknown_designation("2L99X99X9");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: SectionError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SectionError::unknown_designation("2L6X6X1/2").error_code(),
            "UNKNOWN_DESIGNATION"
        );
        assert_eq!(
            SectionError::data_integrity("duplicate label").error_code(),
            "DATA_INTEGRITY"
        );
        assert_eq!(
            SectionError::file_error("open", "shapes.csv", "no such file").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let error = SectionError::unknown_designation("2l6x6x1/2");
        assert_eq!(
            error.to_string(),
            "Unknown section designation: '2l6x6x1/2'"
        );
    }
}
