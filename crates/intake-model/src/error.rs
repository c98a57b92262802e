//! Row-level and configuration error types.

use thiserror::Error;

use crate::field::FieldKind;

/// Reasons a single data row is rejected.
///
/// Row errors never abort an upload; the orchestrator records them in the
/// failure log and moves on to the next row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    // === Validation Errors ===
    /// A required field has no matching header column.
    #[error("missing required column '{field}'")]
    MissingRequiredColumn { field: String },

    /// A required field is empty after sanitization.
    #[error("missing required value for '{field}'")]
    MissingRequiredValue { field: String },

    /// A non-empty value does not parse as the field's declared type.
    #[error("invalid {kind} value '{value}' for '{field}'")]
    UnparseableValue {
        field: String,
        value: String,
        kind: FieldKind,
    },

    // === Dispatch Errors ===
    /// A record reached an inserter bound to a different record type.
    #[error("record type mismatch: expected {expected}, found {found}")]
    RecordTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    // === Persistence Errors ===
    /// The record store reported a failure.
    #[error("insert failed: {message}")]
    Persistence { message: String },

    /// The record store declined the record without an error.
    #[error("insert rejected by record store")]
    InsertRejected,
}

impl RowError {
    /// Short machine-friendly category name.
    pub const fn category(&self) -> &'static str {
        match self {
            RowError::MissingRequiredColumn { .. } => "missing_column",
            RowError::MissingRequiredValue { .. } => "missing_value",
            RowError::UnparseableValue { .. } => "unparseable_value",
            RowError::RecordTypeMismatch { .. } => "type_mismatch",
            RowError::Persistence { .. } => "persistence",
            RowError::InsertRejected => "insert_rejected",
        }
    }

    /// True for errors that indicate a wiring bug rather than bad data.
    pub const fn is_defect(&self) -> bool {
        matches!(self, RowError::RecordTypeMismatch { .. })
    }
}

/// Invalid ingest configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("two-digit year pivot must be between 0 and 99, got {value}")]
    PivotOutOfRange { value: i32 },

    #[error("encoding label must not be empty")]
    EmptyEncoding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RowError::UnparseableValue {
            field: "Amount".to_string(),
            value: "one hundred".to_string(),
            kind: FieldKind::Numeric,
        };
        assert_eq!(
            err.to_string(),
            "invalid numeric value 'one hundred' for 'Amount'"
        );

        let err = RowError::MissingRequiredColumn {
            field: "Customer ID".to_string(),
        };
        assert_eq!(err.to_string(), "missing required column 'Customer ID'");
    }

    #[test]
    fn test_categories() {
        assert_eq!(RowError::InsertRejected.category(), "insert_rejected");
        let mismatch = RowError::RecordTypeMismatch {
            expected: "AnrokTransaction",
            found: "NsSoLineItem",
        };
        assert!(mismatch.is_defect());
        assert!(!RowError::InsertRejected.is_defect());
    }
}
