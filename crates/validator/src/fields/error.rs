//! Field lookup and extraction errors

/// Error type returned by fallible accessors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A field could not be looked up or read.
///
/// These are programming errors in how a checker was wired, not validation
/// failures of the checked object.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FieldError {
    /// No accessor is registered under this name.
    #[error("field \"{field}\" is missing")]
    Missing { field: String },

    /// An accessor exists but yields another type.
    #[error("field \"{field}\" is registered as `{registered}`, not `{expected}`")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        registered: &'static str,
    },

    /// The accessor ran and failed.
    #[error("accessor for field \"{field}\" failed")]
    AccessorFailed {
        field: String,
        #[source]
        source: BoxError,
    },
}

impl FieldError {
    /// The name of the field involved.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field }
            | Self::TypeMismatch { field, .. }
            | Self::AccessorFailed { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages() {
        let missing = FieldError::Missing {
            field: "name".into(),
        };
        assert_eq!(missing.to_string(), "field \"name\" is missing");

        let mismatch = FieldError::TypeMismatch {
            field: "age".into(),
            expected: "i64",
            registered: "u8",
        };
        assert_eq!(
            mismatch.to_string(),
            "field \"age\" is registered as `u8`, not `i64`"
        );
        assert_eq!(mismatch.field(), "age");
    }

    #[test]
    fn test_accessor_failed_keeps_source() {
        let err = FieldError::AccessorFailed {
            field: "email".into(),
            source: "lock poisoned".into(),
        };
        assert_eq!(err.to_string(), "accessor for field \"email\" failed");
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("lock poisoned"));
    }
}
