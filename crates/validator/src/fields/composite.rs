//! Whole-object checks built from field checkers

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::DescribedPredicate;

use super::checker::{FieldCheck, FieldChecker};
use super::error::FieldError;
use super::registry::FieldRegistry;

// ============================================================================
// FAILED FIELD
// ============================================================================

/// A field and the descriptions of every predicate it failed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FailedField {
    field: String,
    failures: BTreeSet<String>,
}

impl FailedField {
    pub fn new(field: impl Into<String>, failures: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            field: field.into(),
            failures: failures.into_iter().map(Into::into).collect(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn failures(&self) -> &BTreeSet<String> {
        &self.failures
    }
}

impl fmt::Display for FailedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.field)?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(failure)?;
        }
        Ok(())
    }
}

// ============================================================================
// COMPOSITE CHECKER
// ============================================================================

/// Checks several fields of a `T` and reports the failing ones.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let checker = CompositeChecker::<Store>::builder()
///     .field_with("name", |s: &Store| s.name.clone(), [non_blank::<String>()])
///     .field_rule("capacity", |s: &Store| s.capacity, "must seat someone", |c: &u32| *c > 0)
///     .build();
///
/// for failed in checker.check(&store)? {
///     eprintln!("{failed}");
/// }
/// ```
pub struct CompositeChecker<T> {
    checkers: Vec<Box<dyn FieldCheck<T>>>,
}

impl<T: 'static> CompositeChecker<T> {
    #[must_use]
    pub fn builder() -> CompositeCheckerBuilder<T> {
        CompositeCheckerBuilder {
            checkers: Vec::new(),
        }
    }

    /// Runs every field checker against `object`.
    ///
    /// Failures are grouped by field name; a field with no failing predicate
    /// is absent from the result, so an empty set means `object` is valid.
    /// The first accessor error aborts the check.
    pub fn check(&self, object: &T) -> Result<BTreeSet<FailedField>, FieldError> {
        let mut grouped: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
        for checker in &self.checkers {
            let failures = checker.failures(object)?;
            if !failures.is_empty() {
                grouped
                    .entry(checker.field_name())
                    .or_default()
                    .extend(failures);
            }
        }

        debug!(
            checked = self.checkers.len(),
            failed = grouped.len(),
            "composite check complete"
        );

        Ok(grouped
            .into_iter()
            .map(|(field, failures)| FailedField::new(field, failures))
            .collect())
    }

    /// The checked field names, in registration order. A field checked by
    /// several checkers appears once per checker.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.checkers.iter().map(|checker| checker.field_name())
    }
}

impl<T> fmt::Debug for CompositeChecker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeChecker")
            .field(
                "fields",
                &self
                    .checkers
                    .iter()
                    .map(|checker| checker.field_name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for [`CompositeChecker`].
pub struct CompositeCheckerBuilder<T> {
    checkers: Vec<Box<dyn FieldCheck<T>>>,
}

impl<T> fmt::Debug for CompositeCheckerBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeCheckerBuilder")
            .field("checkers", &self.checkers.len())
            .finish()
    }
}

impl<T: 'static> CompositeCheckerBuilder<T> {
    /// Adds a prepared field checker.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<F: 'static>(mut self, checker: FieldChecker<T, F>) -> Self {
        self.checkers.push(Box::new(checker));
        self
    }

    /// Adds a field read by `getter` and checked against `predicates`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_with<F, G>(
        self,
        field_name: &str,
        getter: G,
        predicates: impl IntoIterator<Item = DescribedPredicate<F>>,
    ) -> Self
    where
        F: 'static,
        G: Fn(&T) -> F + Send + Sync + 'static,
    {
        self.field(FieldChecker::new(field_name, getter, predicates))
    }

    /// Adds a field read by `getter` and checked against a single inline
    /// `(description, test)` rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_rule<F, G, P>(
        self,
        field_name: &str,
        getter: G,
        description: impl Into<std::borrow::Cow<'static, str>>,
        test: P,
    ) -> Self
    where
        F: 'static,
        G: Fn(&T) -> F + Send + Sync + 'static,
        P: Fn(&F) -> bool + Send + Sync + 'static,
    {
        self.field_with(
            field_name,
            getter,
            [DescribedPredicate::new(description, test)],
        )
    }

    /// Adds a field looked up by name in `registry`.
    ///
    /// Fails when the field is not registered or yields another type than
    /// the predicates test.
    pub fn registered_field<F: 'static>(
        self,
        registry: &FieldRegistry<T>,
        field_name: &str,
        predicates: impl IntoIterator<Item = DescribedPredicate<F>>,
    ) -> Result<Self, FieldError> {
        let checker = FieldChecker::from_registry(registry, field_name, predicates)?;
        Ok(self.field(checker))
    }

    #[must_use]
    pub fn build(self) -> CompositeChecker<T> {
        CompositeChecker {
            checkers: self.checkers,
        }
    }
}
