//! Result creators
//!
//! Factories for the common "response styles" of a validator chain. Each one
//! only supplies the conversion function; the checks are the same whichever
//! style the chain ends with.
//!
//! | factory | failure result |
//! |---|---|
//! | [`throwing`] | `Err(ValidationFailure)` |
//! | [`asserting`] | panics with the rendered records |
//! | [`returning`] | a clone of a fixed value |
//! | [`optional`] | `None` |
//! | [`boolean`] | `false` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! fn create_store(name: &str, owner_id: i64) -> Result<Store, ValidationFailure> {
//!     throwing()
//!         .check(&non_blank(), name)
//!         .check(&id(), &owner_id)
//!         .then_with(|| Ok(Store::new(name, owner_id)))
//! }
//! ```

use std::borrow::Cow;

use serde::Serialize;

use crate::engine::Validator;
use crate::foundation::{DescribedPredicate, InvalidValue, ValidationFailure};

/// Creates a validator whose failures become `Err(ValidationFailure)`.
///
/// End the chain with [`then`](Validator::then) /
/// [`then_with`](Validator::then_with), or with
/// [`into_result`](Validator::into_result) when there is no success value.
pub fn throwing<T: 'static>() -> Validator<Result<T, ValidationFailure>> {
    Validator::new(|invalid_values| Err(ValidationFailure::new(invalid_values)))
}

/// Creates a validator that panics on failure.
///
/// The panic message lists every record; use it for invariants that a
/// failure would make a bug, typically ended with [`finish`](Validator::finish).
pub fn asserting<T: 'static>() -> Validator<T> {
    Validator::new(|invalid_values: Vec<InvalidValue>| -> T {
        panic!("{}", ValidationFailure::new(invalid_values))
    })
}

/// Creates a validator that returns a clone of `on_failure` on failure.
///
/// The records are discarded.
pub fn returning<A>(on_failure: A) -> Validator<A>
where
    A: Clone + Send + Sync + 'static,
{
    Validator::new(move |_| on_failure.clone())
}

/// Creates a validator that returns `None` on failure.
///
/// The success value is chosen by the terminal call, typically `Some(..)`.
pub fn optional<T: 'static>() -> Validator<Option<T>> {
    Validator::new(|_| None)
}

/// Creates a validator that returns `false` on failure.
pub fn boolean() -> Validator<bool> {
    returning(false)
}

/// A nested validator with a single passing check.
pub fn allow_all() -> Validator<()> {
    Validator::nested().check_with("", |_: &i32| true, &42)
}

/// Checks one value and returns the failure, if any.
///
/// Shorthand for `throwing().check(predicate, value).into_result()`.
pub fn require<T>(predicate: &DescribedPredicate<T>, value: &T) -> Result<(), ValidationFailure>
where
    T: Serialize + ?Sized,
{
    throwing().check(predicate, value).into_result()
}

/// Converts an independently built chain into a `Result`.
///
/// Shorthand for `throwing().check_nested(validator).into_result()`.
pub fn require_valid<B>(validator: Validator<B>) -> Result<(), ValidationFailure> {
    throwing().check_nested(validator).into_result()
}

/// Builds a single-record failure without running a chain.
///
/// ```rust,ignore
/// if store.is_closed() {
///     return Err(invalidate("store must be open", &store.id()));
/// }
/// ```
pub fn invalidate<T>(reason: impl Into<Cow<'static, str>>, value: &T) -> ValidationFailure
where
    T: Serialize + ?Sized,
{
    ValidationFailure::new(vec![InvalidValue::capture(reason, value)])
}
