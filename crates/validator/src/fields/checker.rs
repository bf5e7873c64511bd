//! Single-field checks

use std::collections::BTreeSet;
use std::fmt;

use crate::engine::Validator;
use crate::foundation::{DescribedPredicate, InvalidValue};

use super::error::FieldError;
use super::registry::{Accessor, FieldRegistry};

/// A field name, the accessor that reads it, and the predicates its value
/// must satisfy.
pub struct FieldChecker<T, F> {
    accessor: Accessor<T, F>,
    predicates: Vec<DescribedPredicate<F>>,
}

impl<T: 'static, F: 'static> FieldChecker<T, F> {
    /// Builds a checker around an infallible getter.
    ///
    /// ```rust,ignore
    /// let capacity = FieldChecker::new("capacity", |s: &Store| s.capacity, [minimum(1)]);
    /// ```
    pub fn new<G>(
        field_name: &str,
        getter: G,
        predicates: impl IntoIterator<Item = DescribedPredicate<F>>,
    ) -> Self
    where
        G: Fn(&T) -> F + Send + Sync + 'static,
    {
        Self::with_accessor(Accessor::new(field_name, getter), predicates)
    }

    /// Builds a checker around an existing accessor.
    pub fn with_accessor(
        accessor: Accessor<T, F>,
        predicates: impl IntoIterator<Item = DescribedPredicate<F>>,
    ) -> Self {
        Self {
            accessor,
            predicates: predicates.into_iter().collect(),
        }
    }

    /// Builds a checker for a field registered in `registry`.
    ///
    /// Fails when the field is not registered, or is registered with
    /// another type.
    pub fn from_registry(
        registry: &FieldRegistry<T>,
        field_name: &str,
        predicates: impl IntoIterator<Item = DescribedPredicate<F>>,
    ) -> Result<Self, FieldError> {
        let accessor = registry.accessor(field_name)?;
        Ok(Self::with_accessor(accessor, predicates))
    }

    /// The checked field.
    pub fn field_name(&self) -> &str {
        self.accessor.field()
    }

    pub fn predicates(&self) -> &[DescribedPredicate<F>] {
        &self.predicates
    }

    /// Reads the field from `object`.
    pub fn extract(&self, object: &T) -> Result<F, FieldError> {
        self.accessor.get(object)
    }

    /// Descriptions of the predicates the field of `object` fails.
    ///
    /// An empty set means the field is valid. A short-circuiting predicate
    /// that fails hides the failures of the predicates after it.
    pub fn failures(&self, object: &T) -> Result<BTreeSet<String>, FieldError> {
        let value = self.extract(object)?;
        let field_name = self.field_name();

        let validator = self.predicates.iter().fold(
            Validator::new(|invalid_values: Vec<InvalidValue>| {
                invalid_values
                    .into_iter()
                    .map(|invalid| invalid.into_parts().0.into_owned())
                    .collect::<BTreeSet<_>>()
            }),
            |validator, predicate| validator.check_masked(predicate, &value, |_| field_name),
        );

        Ok(validator.then(BTreeSet::new()))
    }
}

impl<T, F> Clone for FieldChecker<T, F> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            predicates: self.predicates.clone(),
        }
    }
}

impl<T, F> fmt::Debug for FieldChecker<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldChecker")
            .field("accessor", &self.accessor)
            .field("predicates", &self.predicates)
            .finish()
    }
}

// ============================================================================
// TYPE ERASURE
// ============================================================================

/// A field check over `T` with the field type erased.
///
/// Lets a [`CompositeChecker`](super::CompositeChecker) hold checkers for
/// fields of different types.
pub trait FieldCheck<T>: Send + Sync {
    /// The checked field.
    fn field_name(&self) -> &str;

    /// Descriptions of the predicates the field of `object` fails.
    fn failures(&self, object: &T) -> Result<BTreeSet<String>, FieldError>;
}

impl<T: 'static, F: 'static> FieldCheck<T> for FieldChecker<T, F> {
    fn field_name(&self) -> &str {
        FieldChecker::field_name(self)
    }

    fn failures(&self, object: &T) -> Result<BTreeSet<String>, FieldError> {
        FieldChecker::failures(self, object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Account {
        name: String,
        age: i64,
    }

    fn min_chars(n: usize) -> DescribedPredicate<String> {
        DescribedPredicate::new(format!("must have at least {n} characters"), move |s: &String| {
            s.chars().count() >= n
        })
    }

    fn no_spaces() -> DescribedPredicate<String> {
        DescribedPredicate::new("must not contain spaces", |s: &String| !s.contains(' '))
    }

    #[test]
    fn test_failures_lists_only_failing_predicates() {
        let checker = FieldChecker::new(
            "name",
            |a: &Account| a.name.clone(),
            [min_chars(6), no_spaces()],
        );
        let account = Account {
            name: "a b".into(),
            age: 30,
        };

        let failures = checker.failures(&account).unwrap();
        assert_eq!(
            failures,
            BTreeSet::from([
                "must have at least 6 characters".to_string(),
                "must not contain spaces".to_string(),
            ])
        );

        let account = Account {
            name: "abcdefg h".into(),
            age: 30,
        };
        assert_eq!(
            checker.failures(&account).unwrap(),
            BTreeSet::from(["must not contain spaces".to_string()])
        );
    }

    #[test]
    fn test_valid_field_has_no_failures() {
        let checker = FieldChecker::new(
            "age",
            |a: &Account| a.age,
            [DescribedPredicate::new("must be an adult", |n: &i64| *n >= 18)],
        );
        let account = Account {
            name: "Ada".into(),
            age: 36,
        };
        assert!(checker.failures(&account).unwrap().is_empty());
        assert_eq!(checker.extract(&account).unwrap(), 36);
        assert_eq!(checker.field_name(), "age");
    }

    #[test]
    fn test_from_registry() {
        let registry = FieldRegistry::new().register("age", |a: &Account| a.age);
        let checker = FieldChecker::<Account, i64>::from_registry(&registry, "age", []).unwrap();
        assert_eq!(checker.predicates().len(), 0);

        let err = FieldChecker::<Account, String>::from_registry(&registry, "age", []).unwrap_err();
        assert!(matches!(err, FieldError::TypeMismatch { .. }));
    }
}
