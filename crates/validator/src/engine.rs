//! The accumulating validator
//!
//! A [`Validator`] runs a chain of checks against values and remembers every
//! failure. Nothing is reported while the chain is being built; the terminal
//! call hands the accumulated [`InvalidValue`]s to the conversion function the
//! validator was constructed with, which decides what failure looks like to
//! the caller (an `Err`, a panic, `false`, `None`, ...).
//!
//! # State machine
//!
//! A validator is in one of three states:
//!
//! | state | `is_invalidated` | `is_short_circuited` |
//! |---|---|---|
//! | valid so far | `false` | `false` |
//! | invalidated | `true` | `false` |
//! | short-circuited | `true` | `true` |
//!
//! A failing check whose predicate is short-circuiting moves the chain to the
//! short-circuited state, where every further `check*` call returns the
//! validator unchanged. Merging a nested validator with
//! [`check_nested`](Validator::check_nested) always leaves the parent
//! not short-circuited: a nested chain's short-circuit stops only the checks
//! inside that nested chain.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let result = optional()
//!     .check(&non_blank(), "abc")
//!     .check(&is_true(), &true)
//!     .then(Some(42));
//! assert_eq!(result, Some(42));
//! ```

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::foundation::{
    ContractViolation, DescribedPredicate, FullMatch, InvalidValue, NON_NULL_DESCRIPTION, snapshot,
};

// ============================================================================
// CONVERTER
// ============================================================================

type ConvertFn<A> = Arc<dyn Fn(Vec<InvalidValue>) -> A + Send + Sync>;

enum Converter<A> {
    /// Supplied by the caller; turns the failure records into a result.
    Terminal(ConvertFn<A>),
    /// Marker for `Validator::nested()`: refuses to produce a result.
    Nested,
}

impl<A> Clone for Converter<A> {
    fn clone(&self) -> Self {
        match self {
            Self::Terminal(convert) => Self::Terminal(Arc::clone(convert)),
            Self::Nested => Self::Nested,
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// An immutable accumulator over a chain of checks.
///
/// Every `check*` method consumes the validator and returns the next state;
/// clone a validator to extend one prefix in several directions.
///
/// # Type Parameters
///
/// * `A` - The result type produced by the terminal call
#[must_use = "validators are immutable; every check returns the next state"]
pub struct Validator<A> {
    invalidated: bool,
    short_circuited: bool,
    /// Most recently recorded first.
    invalid_values: VecDeque<InvalidValue>,
    converter: Converter<A>,
}

impl Validator<()> {
    /// Creates a validator that can only be merged into another one.
    ///
    /// Its terminal calls succeed while it is valid, but converting failures
    /// is a [`ContractViolation::NestedTerminal`]: pass it to
    /// [`check_nested`](Validator::check_nested) of a validator that was
    /// built with a real conversion function.
    pub fn nested() -> Self {
        Self::with_converter(Converter::Nested)
    }
}

impl<A> Validator<A> {
    /// Creates a validator that converts failure records with `converter`.
    ///
    /// The converter runs at most once per terminal call, and only when at
    /// least one check failed.
    pub fn new<F>(converter: F) -> Self
    where
        F: Fn(Vec<InvalidValue>) -> A + Send + Sync + 'static,
    {
        Self::with_converter(Converter::Terminal(Arc::new(converter)))
    }

    fn with_converter(converter: Converter<A>) -> Self {
        Self {
            invalidated: false,
            short_circuited: false,
            invalid_values: VecDeque::new(),
            converter,
        }
    }

    // ------------------------------------------------------------------------
    // Checks
    // ------------------------------------------------------------------------

    /// Checks `value` against `predicate`.
    pub fn check<T>(self, predicate: &DescribedPredicate<T>, value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        self.check_field(predicate, identity, value)
    }

    /// Checks the part of `value` selected by `accessor` against `predicate`.
    ///
    /// On failure the selected part, not the whole value, is recorded.
    ///
    /// ```rust,ignore
    /// validator.check_field(&min_length(6), |account: &Account| account.name.as_str(), &account)
    /// ```
    pub fn check_field<B, F, M>(self, predicate: &DescribedPredicate<F>, accessor: M, value: &B) -> Self
    where
        B: ?Sized,
        F: Serialize + ?Sized,
        M: FnOnce(&B) -> &F,
    {
        if self.short_circuited {
            return self.skip(predicate.description());
        }

        let field_value = accessor(value);
        let valid = predicate.test(field_value);
        self.advance(
            valid,
            predicate.description_cow().clone(),
            predicate.should_short_circuit(),
            || snapshot(field_value),
        )
    }

    /// Checks a value computed from `value` by `mapper` against `predicate`.
    ///
    /// On failure the computed value is recorded.
    ///
    /// ```rust,ignore
    /// validator.check_mapped(&minimum(1), |items: &Vec<Item>| items.len(), &order.items)
    /// ```
    pub fn check_mapped<B, F, M>(self, predicate: &DescribedPredicate<F>, mapper: M, value: &B) -> Self
    where
        B: ?Sized,
        F: Serialize,
        M: FnOnce(&B) -> F,
    {
        if self.short_circuited {
            return self.skip(predicate.description());
        }

        let field_value = mapper(value);
        let valid = predicate.test(&field_value);
        self.advance(
            valid,
            predicate.description_cow().clone(),
            predicate.should_short_circuit(),
            || snapshot(&field_value),
        )
    }

    /// Checks `value` against an inline `(description, test)` pair.
    pub fn check_with<T, P>(
        self,
        description: impl Into<Cow<'static, str>>,
        predicate: P,
        value: &T,
    ) -> Self
    where
        T: Serialize + ?Sized,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.check(&DescribedPredicate::new(description, predicate), value)
    }

    /// Checks that `value` is present and fully matches `pattern`.
    ///
    /// An absent value is invalid. The recorded description is
    /// `"a non-null object is required and {description}"`.
    pub fn check_pattern<S>(
        self,
        description: impl Into<Cow<'static, str>>,
        pattern: &FullMatch,
        value: Option<&S>,
    ) -> Self
    where
        S: AsRef<str> + Serialize + ?Sized,
    {
        let description = format!("{NON_NULL_DESCRIPTION} and {}", description.into());
        if self.short_circuited {
            return self.skip(&description);
        }

        let valid = value.is_some_and(|text| pattern.is_match(text.as_ref()));
        self.advance(valid, Cow::Owned(description), false, || snapshot(&value))
    }

    /// Checks `value` against `predicate`, recording `mask(value)` instead of
    /// the value itself on failure.
    ///
    /// Useful for values that must not end up in error messages verbatim:
    ///
    /// ```rust,ignore
    /// validator.check_masked(&min_length(12), password.as_str(), |p| "*".repeat(p.len()))
    /// ```
    pub fn check_masked<T, R, M>(self, predicate: &DescribedPredicate<T>, value: &T, mask: M) -> Self
    where
        T: ?Sized,
        R: Serialize,
        M: FnOnce(&T) -> R,
    {
        if self.short_circuited {
            return self.skip(predicate.description());
        }

        let valid = predicate.test(value);
        self.advance(
            valid,
            predicate.description_cow().clone(),
            predicate.should_short_circuit(),
            || snapshot(&mask(value)),
        )
    }

    /// Merges an independently built chain into this one.
    ///
    /// The nested records are appended after this validator's records. The
    /// nested chain's short-circuit state does not carry over: checks that
    /// follow this call still run. When this validator is itself
    /// short-circuited the nested chain is ignored.
    pub fn check_nested<B>(mut self, nested: Validator<B>) -> Self {
        if self.short_circuited {
            debug!(
                skipped_records = nested.invalid_values.len(),
                "nested validator skipped: chain is short-circuited"
            );
            return self;
        }

        self.invalidated |= nested.invalidated;
        self.short_circuited = false;
        self.invalid_values.extend(nested.invalid_values);
        self
    }

    fn advance(
        mut self,
        valid: bool,
        description: Cow<'static, str>,
        short_circuit: bool,
        offending: impl FnOnce() -> Value,
    ) -> Self {
        if !valid {
            trace!(%description, "check failed");
            if short_circuit {
                debug!(%description, "short-circuit triggered; remaining checks will be skipped");
            }
            self.invalid_values
                .push_front(InvalidValue::new(description, offending()));
        }

        self.invalidated |= !valid;
        self.short_circuited = !valid && short_circuit;
        self
    }

    fn skip(self, description: &str) -> Self {
        debug!(description, "check skipped: chain is short-circuited");
        self
    }

    // ------------------------------------------------------------------------
    // Terminal calls
    // ------------------------------------------------------------------------

    /// Returns `on_success()` if no check failed, otherwise the converted
    /// failure records.
    ///
    /// The conversion function is never invoked on the success path.
    pub fn try_then_with<F>(self, on_success: F) -> Result<A, ContractViolation>
    where
        F: FnOnce() -> A,
    {
        if self.invalidated {
            self.convert()
        } else {
            Ok(on_success())
        }
    }

    /// Returns `on_success()` if no check failed, otherwise the converted
    /// failure records.
    ///
    /// # Panics
    ///
    /// Panics on a [`ContractViolation`]: when a validator created with
    /// [`Validator::nested`] has failures to convert, or when the validator
    /// is invalidated without any record.
    pub fn then_with<F>(self, on_success: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self.try_then_with(on_success) {
            Ok(result) => result,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Returns `result` if no check failed, otherwise the converted failure
    /// records.
    ///
    /// # Panics
    ///
    /// See [`then_with`](Self::then_with).
    pub fn then(self, result: A) -> A {
        self.then_with(|| result)
    }

    /// Runs `effect` if no check failed; otherwise invokes the conversion
    /// function and discards its result.
    ///
    /// This is only useful with a conversion function that has a side effect
    /// such as panicking (see [`asserting`](crate::creators::asserting)).
    /// Prefer [`then`](Self::then) or [`then_with`](Self::then_with).
    ///
    /// # Panics
    ///
    /// See [`then_with`](Self::then_with).
    pub fn then_run<F>(self, effect: F)
    where
        F: FnOnce(),
    {
        if !self.invalidated {
            effect();
        } else if let Err(violation) = self.convert() {
            panic!("{violation}");
        }
    }

    /// Does nothing if no check failed; otherwise invokes the conversion
    /// function and discards its result.
    ///
    /// Unless the conversion function panics, this is almost certainly not
    /// what you want; see [`then_run`](Self::then_run).
    ///
    /// # Panics
    ///
    /// See [`then_with`](Self::then_with).
    pub fn finish(self) {
        self.then_run(|| {});
    }

    fn convert(self) -> Result<A, ContractViolation> {
        if self.invalid_values.is_empty() {
            return Err(ContractViolation::UnrecordedFailure);
        }

        match self.converter {
            Converter::Terminal(convert) => {
                debug!(
                    invalid_values = self.invalid_values.len(),
                    "validation failed; converting records"
                );
                Ok(convert(Vec::from(self.invalid_values)))
            }
            Converter::Nested => Err(ContractViolation::NestedTerminal),
        }
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// Whether any check, including nested ones, has failed.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Whether further checks of this chain are being skipped.
    pub fn is_short_circuited(&self) -> bool {
        self.short_circuited
    }

    /// The records so far, most recently recorded first.
    pub fn invalid_values(&self) -> impl ExactSizeIterator<Item = &InvalidValue> {
        self.invalid_values.iter()
    }

    /// Number of records so far.
    pub fn invalid_count(&self) -> usize {
        self.invalid_values.len()
    }

    /// Whether this validator was created with [`Validator::nested`].
    pub fn is_nested(&self) -> bool {
        matches!(self.converter, Converter::Nested)
    }
}

impl<E> Validator<Result<(), E>> {
    /// Ends a chain whose result is a `Result`, so it can be used with `?`.
    ///
    /// ```rust,ignore
    /// throwing()
    ///     .check(&non_blank(), name)
    ///     .check(&natural(), &age)
    ///     .into_result()?;
    /// ```
    ///
    /// # Panics
    ///
    /// See [`then_with`](Self::then_with).
    pub fn into_result(self) -> Result<(), E> {
        self.then(Ok(()))
    }
}

fn identity<T: ?Sized>(value: &T) -> &T {
    value
}

impl<A> Clone for Validator<A> {
    fn clone(&self) -> Self {
        Self {
            invalidated: self.invalidated,
            short_circuited: self.short_circuited,
            invalid_values: self.invalid_values.clone(),
            converter: self.converter.clone(),
        }
    }
}

impl<A> fmt::Debug for Validator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("invalidated", &self.invalidated)
            .field("short_circuited", &self.short_circuited)
            .field("invalid_values", &self.invalid_values)
            .field(
                "converter",
                &match self.converter {
                    Converter::Terminal(_) => "<function>",
                    Converter::Nested => "<nested>",
                },
            )
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
