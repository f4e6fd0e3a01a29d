//! Common error types for attra.

use crate::Value;
use thiserror::Error;

/// Errors that can occur when extracting typed data from a `Value`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// Type mismatch when converting a value.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl ValueError {
    /// Build a mismatch error from the expected type name and the offending value.
    pub fn type_mismatch(expected: impl Into<String>, actual: &Value) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.type_name().to_string(),
        }
    }
}

/// Result type for value conversions.
pub type ValueResult<T> = Result<T, ValueError>;
