//! Error handling for lineage-store
//!
//! Wraps lineage-core ExError with store-specific helpers

use lineage_core::errors::{ExError, ExErrorKind, FamilyError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create a seed validation error for a 1-based line of a family log
pub fn seed_validation_at(line: usize, reason: &str) -> ExError {
    seed_validation(reason).with_line(line)
}

/// Create an error for a seed event the tree rejected
///
/// `index` is the 0-based position of the event in the seed.
pub fn event_rejected(index: usize, err: FamilyError) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_import")
        .with_message(format!("Seed event {} was rejected", index))
        .with_source(err.into())
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
