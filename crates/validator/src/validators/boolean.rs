//! Boolean predicates

use crate::foundation::DescribedPredicate;

/// Is `true`?
pub fn is_true() -> DescribedPredicate<bool> {
    DescribedPredicate::new("must be true", |b: &bool| *b)
}

/// Is `false`?
pub fn is_false() -> DescribedPredicate<bool> {
    DescribedPredicate::new("must be false", |b: &bool| !*b)
}
