//! Numeric predicates

use std::fmt::Display;

use crate::foundation::DescribedPredicate;

/// Is at least `n`?
pub fn minimum<N>(n: N) -> DescribedPredicate<N>
where
    N: PartialOrd + Display + Send + Sync + 'static,
{
    DescribedPredicate::new(format!("must be at least {n}"), move |x: &N| *x >= n)
}

/// Is zero or more?
pub fn natural<N>() -> DescribedPredicate<N>
where
    N: PartialOrd + Display + Default + Send + Sync + 'static,
{
    minimum(N::default())
}

/// Could be used as a database primary key: zero or more.
pub fn id<N>() -> DescribedPredicate<N>
where
    N: PartialOrd + Default + 'static,
{
    DescribedPredicate::new("invalid ID; must be a positive number", |x: &N| {
        *x >= N::default()
    })
}
