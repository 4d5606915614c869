//! Error types for Sieva.
//!
//! Uses thiserror for structured errors. Metadata derivation itself is total
//! over finite type graphs and never fails; errors only arise on the schema
//! registration surface and when serializing schema snapshots.

use thiserror::Error;

/// Top-level error type for Sieva.
///
/// This enum encompasses all error categories and enables automatic
/// conversion from specific error types.
#[derive(Error, Debug)]
pub enum SievaError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while registering type descriptions.
///
/// Registration failures leave the registry unchanged; a registry is expected
/// to be fully populated before it is shared with a metadata cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Type {0} is already registered")]
    DuplicateType(&'static str),

    #[error("Property '{property}' is declared more than once on type {ty}")]
    DuplicateProperty {
        ty: &'static str,
        property: String,
    },
}

/// Result type alias for Sieva operations.
pub type SievaResult<T> = Result<T, SievaError>;

/// Result type alias for schema registration.
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::DuplicateProperty {
            ty: "Order",
            property: "lines".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Order"));
        assert!(msg.contains("lines"));
    }

    #[test]
    fn test_error_conversion() {
        let err: SievaError = SchemaError::DuplicateType("Order").into();
        assert!(matches!(err, SievaError::Schema(_)));
    }
}
