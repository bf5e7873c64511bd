//! Error types
//!
//! Two families live here. [`ValidationFailure`] is expected, data-dependent
//! failure: the accumulated records of a failed chain, as produced by the
//! throwing result creator. [`ContractViolation`] is a programming error in
//! how a chain was driven; it is never recorded as validation data.

use serde::Serialize;

use crate::foundation::invalid::{InvalidValue, render_invalid_values};

// ============================================================================
// CONTRACT VIOLATION
// ============================================================================

/// Misuse of a validator detected at a terminal call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ContractViolation {
    /// A validator built with `Validator::nested()` reached a terminal call
    /// with failures to convert.
    #[error(
        "a nested validator can only be nested; only a top-level validator may generate a result \
         with `then` or `finish`"
    )]
    NestedTerminal,

    /// The validator is invalidated but holds no record explaining why.
    #[error("invalidated validator has no recorded failures")]
    UnrecordedFailure,
}

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// A failed validation, carrying every record of the chain.
///
/// `Display` renders the records one per line, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{}", render_invalid_values(.invalid_values))]
pub struct ValidationFailure {
    invalid_values: Vec<InvalidValue>,
}

impl ValidationFailure {
    /// Wraps the records of a failed chain.
    pub fn new(invalid_values: Vec<InvalidValue>) -> Self {
        Self { invalid_values }
    }

    /// The failed values, in the order the chain reported them.
    pub fn invalid_values(&self) -> &[InvalidValue] {
        &self.invalid_values
    }

    /// Consumes the failure and returns its records.
    pub fn into_invalid_values(self) -> Vec<InvalidValue> {
        self.invalid_values
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.invalid_values.len()
    }

    /// Whether no failure was recorded.
    pub fn is_empty(&self) -> bool {
        self.invalid_values.is_empty()
    }

    /// Iterates over the recorded descriptions.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.invalid_values.iter().map(InvalidValue::description)
    }
}

impl From<Vec<InvalidValue>> for ValidationFailure {
    fn from(invalid_values: Vec<InvalidValue>) -> Self {
        Self::new(invalid_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_messages() {
        assert!(
            ContractViolation::NestedTerminal
                .to_string()
                .starts_with("a nested validator can only be nested")
        );
        assert_eq!(
            ContractViolation::UnrecordedFailure.to_string(),
            "invalidated validator has no recorded failures"
        );
    }

    #[test]
    fn test_validation_failure_display() {
        let failure = ValidationFailure::new(vec![
            InvalidValue::capture("must be true", &false),
            InvalidValue::capture("must be abc", "xyz"),
        ]);

        assert_eq!(failure.len(), 2);
        assert_eq!(
            failure.to_string(),
            "Invalid Values:\n\tmust be true: false\n\tmust be abc: \"xyz\""
        );
        assert_eq!(
            failure.descriptions().collect::<Vec<_>>(),
            ["must be true", "must be abc"]
        );
    }

    #[test]
    fn test_validation_failure_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ValidationFailure::from(Vec::new()));
    }
}
