//! Error handling for devcon-store
//!
//! Wraps devcon-core ExError with store-specific helpers

use std::path::Path;

use devcon_core::errors::{ConsoleError, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a missing-source error
pub fn catalog_missing(path: &Path) -> ExError {
    ConsoleError::CatalogSourceMissing {
        path: path.display().to_string(),
    }
    .into()
}

/// Create a malformed-source error
pub fn catalog_malformed(origin: &str, reason: impl Into<String>) -> ExError {
    ConsoleError::CatalogMalformed {
        path: origin.to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Create an unwritable-destination error
pub fn catalog_unwritable(path: &Path, reason: impl Into<String>) -> ExError {
    ConsoleError::CatalogUnwritable {
        path: path.display().to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Create an unknown-format error
pub fn unsupported_format(path: &Path) -> ExError {
    ConsoleError::UnsupportedFormat {
        path: path.display().to_string(),
    }
    .into()
}

/// Create a serialization error
pub fn serialization_error(operation: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
