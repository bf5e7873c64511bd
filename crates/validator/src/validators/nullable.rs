//! Predicates over `Option<T>`
//!
//! Absence is modelled with `Option`. The wrappers lift a predicate over `T`
//! into one over `Option<T>`, choosing whether `None` passes.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let nickname: Option<String> = None;
//! let valid = boolean()
//!     .check(&nullable(non_blank::<String>()), &nickname)
//!     .then(true);
//! assert!(valid);
//! ```

use crate::foundation::{DescribedPredicate, NON_NULL_DESCRIPTION};

/// Is `None`?
///
/// Described as `"nulls are allowed"`, matching the left half of
/// [`nullable`]'s description.
pub fn is_null<T: 'static>() -> DescribedPredicate<Option<T>> {
    DescribedPredicate::new("nulls are allowed", |value: &Option<T>| value.is_none())
}

/// Is `Some`?
pub fn non_null<T: 'static>() -> DescribedPredicate<Option<T>> {
    DescribedPredicate::new(NON_NULL_DESCRIPTION, |value: &Option<T>| value.is_some())
}

/// `None` passes; `Some(v)` must satisfy `predicate`.
pub fn nullable<T: 'static>(predicate: DescribedPredicate<T>) -> DescribedPredicate<Option<T>> {
    let description = format!("nulls are allowed or {predicate}");
    DescribedPredicate::new(description, move |value: &Option<T>| {
        value.as_ref().is_none_or(|inner| predicate.test(inner))
    })
}

/// `None` fails; `Some(v)` must satisfy `predicate`.
pub fn non_nullable<T: 'static>(predicate: DescribedPredicate<T>) -> DescribedPredicate<Option<T>> {
    let description = format!("{NON_NULL_DESCRIPTION} and {predicate}");
    DescribedPredicate::new(description, move |value: &Option<T>| {
        value.as_ref().is_some_and(|inner| predicate.test(inner))
    })
}

/// An empty option passes; a present value must satisfy `predicate`.
///
/// Same test as [`nullable`], described in terms of an optional field.
pub fn optional<T: 'static>(predicate: DescribedPredicate<T>) -> DescribedPredicate<Option<T>> {
    let description = format!("{predicate} or must be an empty Option");
    DescribedPredicate::new(description, move |value: &Option<T>| {
        value.as_ref().is_none_or(|inner| predicate.test(inner))
    })
}

/// The option must hold a value satisfying `predicate`.
pub fn unwrapped_optional<T: 'static>(
    predicate: DescribedPredicate<T>,
) -> DescribedPredicate<Option<T>> {
    let description = format!("{predicate} and must be a non-empty Option");
    DescribedPredicate::new(description, move |value: &Option<T>| {
        value.as_ref().is_some_and(|inner| predicate.test(inner))
    })
}
