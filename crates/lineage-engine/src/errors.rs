//! Engine error helpers
//!
//! The engine shares the store's `Result<T, ExError>`.

use lineage_core::errors::{ExError, ExErrorKind};

pub use lineage_store::errors::Result;

/// Create an error for an input record that cannot be processed
pub fn malformed_record(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("parse_record")
        .with_message(reason.to_string())
}
