//! Error types for fieldsel

use thiserror::Error;

/// Result type alias for selection operations
pub type SelectResult<T> = Result<T, SelectError>;

/// Errors raised while selecting fields from a record.
///
/// Every variant reflects a caller mistake (a wrong field name, a value that
/// is not a struct, a filter configured twice); none of them is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The record is not a struct (after following any pointer wrappers).
    #[error("record is not a struct or a pointer to a struct")]
    InvalidRecordKind,

    /// The filter names do not line up with the record's fields.
    #[error(
        "field set mismatch: expected {expected} selected fields, found {found}{}",
        format_unmatched(.unmatched)
    )]
    FieldSetMismatch {
        expected: usize,
        found: usize,
        /// Filter names that matched no field, or more than one.
        unmatched: Vec<String>,
    },

    /// `only` or `exclude` was called on a builder that already has a filter.
    #[error("a field filter is already configured for this selection")]
    FilterAlreadyConfigured,

    /// A selection builder was constructed from a value that is not a struct.
    #[error("cannot build a selection from a value that is not a struct")]
    NotAggregateKind,
}

fn format_unmatched(unmatched: &[String]) -> String {
    if unmatched.is_empty() {
        String::new()
    } else {
        format!(" (unmatched: {})", unmatched.join(", "))
    }
}

impl SelectError {
    /// Create a field set mismatch error
    pub fn mismatch(expected: usize, found: usize, unmatched: Vec<String>) -> Self {
        Self::FieldSetMismatch {
            expected,
            found,
            unmatched,
        }
    }

    /// Check if this is a field set mismatch error
    pub fn is_field_set_mismatch(&self) -> bool {
        matches!(self, Self::FieldSetMismatch { .. })
    }

    /// Check if the record (or builder input) was not a struct
    pub fn is_invalid_kind(&self) -> bool {
        matches!(self, Self::InvalidRecordKind | Self::NotAggregateKind)
    }

    /// Check if a filter was configured twice
    pub fn is_filter_already_configured(&self) -> bool {
        matches!(self, Self::FilterAlreadyConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_lists_unmatched_names() {
        let err = SelectError::mismatch(2, 1, vec!["nick".to_string()]);
        assert_eq!(
            err.to_string(),
            "field set mismatch: expected 2 selected fields, found 1 (unmatched: nick)"
        );
        assert!(err.is_field_set_mismatch());
    }

    #[test]
    fn mismatch_message_without_unmatched_names() {
        let err = SelectError::mismatch(3, 2, Vec::new());
        assert_eq!(
            err.to_string(),
            "field set mismatch: expected 3 selected fields, found 2"
        );
    }

    #[test]
    fn kind_predicates() {
        assert!(SelectError::InvalidRecordKind.is_invalid_kind());
        assert!(SelectError::NotAggregateKind.is_invalid_kind());
        assert!(!SelectError::FilterAlreadyConfigured.is_invalid_kind());
        assert!(SelectError::FilterAlreadyConfigured.is_filter_already_configured());
    }
}
