//! Record validation.
//!
//! Checks that a [`ParsedRecord`] carries exactly an expected field set. A
//! parser only ever hands out complete records, so this is mainly for records
//! that were loaded back from JSON or assembled by hand.
//!
//! # Examples
//!
//! ```
//! use switch_report_core::*;
//!
//! let mut record = ParsedRecord::new();
//! record.insert("port", FieldValue::Integer(1));
//! assert!(validate_record(&record, &["port"]).is_empty());
//!
//! // Missing field → error
//! let errors = validate_record(&record, &["port", "mtu"]);
//! assert_eq!(errors, vec![ValidationError::MissingField("mtu".to_string())]);
//! ```

use thiserror::Error;

use crate::ParsedRecord;

/// Record validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The record lacks a field of the expected set.
    #[error("missing field: {0}")]
    MissingField(String),
    /// The record has a field outside the expected set.
    #[error("unexpected field: {0}")]
    UnexpectedField(String),
}

/// Validates that `record` has every name in `expected` and nothing else.
///
/// Missing fields are reported first, in `expected` order, followed by
/// unexpected fields in name order.
pub fn validate_record(record: &ParsedRecord, expected: &[&str]) -> Vec<ValidationError> {
    let mut errors = expected
        .iter()
        .filter(|name| !record.contains(name))
        .map(|name| ValidationError::MissingField((*name).to_string()))
        .collect::<Vec<_>>();

    errors.extend(
        record
            .iter()
            .filter(|(name, _)| !expected.contains(name))
            .map(|(name, _)| ValidationError::UnexpectedField(name.to_string())),
    );

    errors
}
