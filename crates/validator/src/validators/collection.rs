//! Collection predicates
//!
//! Collections are anything whose shared reference can be iterated, so the
//! same predicate checks a `Vec<T>`, a slice, a `HashSet<T>` or a
//! `BTreeSet<T>`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let tags = vec!["RED".to_string(), "GREEN".to_string()];
//! let valid = boolean()
//!     .check(&all::<Vec<String>, String>(constant_cased()), &tags)
//!     .check(&min_size::<Vec<String>>(1), &tags)
//!     .then(true);
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::foundation::DescribedPredicate;

/// Every element satisfies `predicate`. An empty collection passes.
pub fn all<C, T>(predicate: DescribedPredicate<T>) -> DescribedPredicate<C>
where
    C: ?Sized + 'static,
    T: ?Sized + 'static,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
{
    let description = format!("{predicate}; one or more failed in sequence");
    DescribedPredicate::new(description, move |elements: &C| {
        elements.into_iter().all(|element| predicate.test(element))
    })
}

/// At least one element satisfies `predicate`. An empty collection fails.
pub fn any<C, T>(predicate: DescribedPredicate<T>) -> DescribedPredicate<C>
where
    C: ?Sized + 'static,
    T: ?Sized + 'static,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
{
    let description = format!("{predicate}; all failed in the sequence");
    DescribedPredicate::new(description, move |elements: &C| {
        elements.into_iter().any(|element| predicate.test(element))
    })
}

/// Holds at least `n` elements.
pub fn min_size<C>(n: usize) -> DescribedPredicate<C>
where
    C: ?Sized + 'static,
    for<'a> &'a C: IntoIterator,
{
    DescribedPredicate::new(
        format!("at least {n} elements must be present"),
        move |elements: &C| elements.into_iter().take(n).count() == n,
    )
}

/// Is a key of `map`?
///
/// The keys are copied when the predicate is built; later changes to `map`
/// are not seen.
pub fn contained_within<K, V>(map: &HashMap<K, V>) -> DescribedPredicate<K>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
{
    let keys: HashSet<K> = map.keys().cloned().collect();
    DescribedPredicate::new("must exist in map", move |key: &K| keys.contains(key))
}

/// Equals one of `names` exactly.
///
/// Meant for string-typed enum variants coming in from the outside:
///
/// ```rust,ignore
/// let status = variant_name::<str>(["OPEN", "CLOSED"]);
/// assert_eq!(status.description(), "value not in allowed values: [OPEN, CLOSED]");
/// ```
pub fn variant_name<S>(names: impl IntoIterator<Item = impl Into<String>>) -> DescribedPredicate<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    let description = format!("value not in allowed values: [{}]", names.join(", "));
    DescribedPredicate::new(description, move |value: &S| {
        names.iter().any(|name| name == value.as_ref())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn is_true() -> DescribedPredicate<bool> {
        DescribedPredicate::new("must be true", |b: &bool| *b)
    }

    #[test]
    fn test_all() {
        let p = all::<Vec<bool>, bool>(is_true());
        assert_eq!(p.description(), "must be true; one or more failed in sequence");
        assert!(p.test(&vec![true, true]));
        assert!(!p.test(&vec![true, false]));
        assert!(p.test(&vec![]));
    }

    #[test]
    fn test_any() {
        let p = any::<[bool], bool>(is_true());
        assert_eq!(p.description(), "must be true; all failed in the sequence");
        assert!(p.test(&[false, true]));
        assert!(!p.test(&[false, false]));
        assert!(!p.test(&[]));
    }

    #[test]
    fn test_min_size() {
        let p = min_size::<Vec<i32>>(4);
        assert_eq!(p.description(), "at least 4 elements must be present");
        assert!(!p.test(&vec![1, 2, 3]));
        assert!(p.test(&vec![1, 2, 3, 4, 5]));

        let set: BTreeSet<&str> = ["a"].into_iter().collect();
        assert!(min_size::<BTreeSet<&str>>(1).test(&set));
    }

    #[test]
    fn test_contained_within() {
        let map = HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
        let p = contained_within(&map);
        assert_eq!(p.description(), "must exist in map");
        assert!(p.test(&"a".to_string()));
        assert!(!p.test(&"c".to_string()));
    }

    #[test]
    fn test_variant_name() {
        let p = variant_name::<str>(["OPEN", "CLOSED"]);
        assert_eq!(p.description(), "value not in allowed values: [OPEN, CLOSED]");
        assert!(p.test("OPEN"));
        assert!(!p.test("open"));
    }
}
