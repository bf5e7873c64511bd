//! Described predicates
//!
//! A [`DescribedPredicate`] pairs a pure boolean test with the reason reported
//! when the test rejects a value, plus an advisory short-circuit flag that the
//! [`Validator`](crate::engine::Validator) inspects.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::foundation::DescribedPredicate;
//!
//! let adult = DescribedPredicate::new("must be an adult", |age: &u32| *age >= 18);
//! let plausible = DescribedPredicate::new("must be plausible", |age: &u32| *age < 150);
//!
//! let age = adult.and(plausible);
//! assert_eq!(age.description(), "must be an adult and must be plausible");
//! assert!(age.test(&30));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::pattern::FullMatch;

/// Description used whenever a predicate rejects an absent value.
pub const NON_NULL_DESCRIPTION: &str = "a non-null object is required";

// ============================================================================
// DESCRIBED PREDICATE
// ============================================================================

/// A named, testable condition over one value.
///
/// Predicates are immutable; every combinator returns a new predicate and the
/// underlying test is shared, so cloning is cheap.
///
/// The short-circuit flag is advisory metadata: it never changes what
/// [`test`](Self::test) returns. A validator that sees a failing
/// short-circuiting predicate stops evaluating the remaining checks of its
/// chain.
pub struct DescribedPredicate<T: ?Sized> {
    description: Cow<'static, str>,
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    short_circuit: bool,
}

impl<T: ?Sized> DescribedPredicate<T> {
    /// Creates a predicate that does not short-circuit.
    pub fn new<F>(description: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Arc::new(predicate),
            short_circuit: false,
        }
    }

    /// Creates a predicate that asks the enclosing validator to stop
    /// evaluating further checks when it fails.
    pub fn short_circuiting<F>(description: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(description, predicate).as_short_circuiting()
    }

    /// The reason reported when this predicate rejects a value.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn description_cow(&self) -> &Cow<'static, str> {
        &self.description
    }

    /// Whether a failure of this predicate should stop the enclosing chain.
    pub fn should_short_circuit(&self) -> bool {
        self.short_circuit
    }

    /// Evaluates the underlying test directly, bypassing any validator.
    pub fn test(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Returns a copy of this predicate with the short-circuit flag set.
    #[must_use]
    pub fn as_short_circuiting(self) -> Self {
        Self {
            short_circuit: true,
            ..self
        }
    }
}

impl<T: ?Sized + 'static> DescribedPredicate<T> {
    /// Logical conjunction.
    ///
    /// Both tests are evaluated. The descriptions are joined with `" and "`
    /// and the result never short-circuits, whatever the operands say.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let description = format!("{} and {}", self.description, other.description);
        let (left, right) = (self.predicate, other.predicate);
        Self::new(description, move |value: &T| {
            let left = left(value);
            let right = right(value);
            left && right
        })
    }

    /// Conjunction with an inline `(description, test)` pair.
    #[must_use]
    pub fn and_with<F>(self, description: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.and(Self::new(description, predicate))
    }

    /// Logical disjunction.
    ///
    /// Both tests are evaluated. The descriptions are joined with `" or "`
    /// and the result never short-circuits, whatever the operands say.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        let description = format!("{} or {}", self.description, other.description);
        let (left, right) = (self.predicate, other.predicate);
        Self::new(description, move |value: &T| {
            let left = left(value);
            let right = right(value);
            left || right
        })
    }

    /// Disjunction with an inline `(description, test)` pair.
    #[must_use]
    pub fn or_with<F>(self, description: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.or(Self::new(description, predicate))
    }

    /// Retargets this predicate onto a container type.
    ///
    /// The returned predicate tests `selector(value)`; the description and
    /// short-circuit flag are kept unchanged.
    ///
    /// ```rust,ignore
    /// struct Account { name: String }
    ///
    /// let name = min_length::<str>(6).map(|account: &Account| account.name.as_str());
    /// assert!(name.test(&Account { name: "test user name".into() }));
    /// ```
    pub fn map<U, S>(self, selector: S) -> DescribedPredicate<U>
    where
        U: ?Sized + 'static,
        S: Fn(&U) -> &T + Send + Sync + 'static,
    {
        let predicate = self.predicate;
        DescribedPredicate {
            description: self.description,
            predicate: Arc::new(move |value: &U| predicate(selector(value))),
            short_circuit: self.short_circuit,
        }
    }

    /// Retargets this predicate onto a value computed from the container.
    ///
    /// Like [`map`](Self::map), but `selector` returns an owned value, so
    /// derived properties can be tested:
    ///
    /// ```rust,ignore
    /// let non_empty = minimum(1_usize).map_owned(|items: &Vec<i32>| items.len());
    /// assert!(!non_empty.test(&Vec::new()));
    /// ```
    pub fn map_owned<U, S>(self, selector: S) -> DescribedPredicate<U>
    where
        T: Sized,
        U: ?Sized + 'static,
        S: Fn(&U) -> T + Send + Sync + 'static,
    {
        let predicate = self.predicate;
        DescribedPredicate {
            description: self.description,
            predicate: Arc::new(move |value: &U| predicate(&selector(value))),
            short_circuit: self.short_circuit,
        }
    }
}

impl<S: AsRef<str> + ?Sized + 'static> DescribedPredicate<S> {
    /// Creates a predicate that requires the whole string to match `pattern`.
    pub fn matching(description: impl Into<Cow<'static, str>>, pattern: FullMatch) -> Self {
        Self::new(description, move |value: &S| pattern.is_match(value.as_ref()))
    }

    /// Like [`matching`](Self::matching), but short-circuiting.
    pub fn matching_short_circuit(
        description: impl Into<Cow<'static, str>>,
        pattern: FullMatch,
    ) -> Self {
        Self::matching(description, pattern).as_short_circuiting()
    }
}

// Manual impls: the test is shared behind an `Arc`, so `T` needs no bounds.
impl<T: ?Sized> Clone for DescribedPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            predicate: Arc::clone(&self.predicate),
            short_circuit: self.short_circuit,
        }
    }
}

impl<T: ?Sized> fmt::Debug for DescribedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescribedPredicate")
            .field("description", &self.description)
            .field("predicate", &"<function>")
            .field("short_circuit", &self.short_circuit)
            .finish()
    }
}

impl<T: ?Sized> fmt::Display for DescribedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn positive() -> DescribedPredicate<i64> {
        DescribedPredicate::new("must be positive", |x: &i64| *x > 0)
    }

    fn even() -> DescribedPredicate<i64> {
        DescribedPredicate::new("must be even", |x: &i64| x % 2 == 0)
    }

    #[test]
    fn test_new_is_not_short_circuiting() {
        let p = positive();
        assert!(!p.should_short_circuit());
        assert_eq!(p.description(), "must be positive");
        assert!(p.test(&3));
        assert!(!p.test(&-3));
    }

    #[test]
    fn test_short_circuiting_constructor() {
        let p = DescribedPredicate::short_circuiting("stop", |b: &bool| *b);
        assert!(p.should_short_circuit());
        assert!(!p.test(&false));
    }

    #[test]
    fn test_and_combines_descriptions_and_tests() {
        let p = positive().and(even());
        assert_eq!(p.description(), "must be positive and must be even");
        assert!(p.test(&4));
        assert!(!p.test(&3));
        assert!(!p.test(&-4));
    }

    #[test]
    fn test_or_combines_descriptions_and_tests() {
        let p = positive().or(even());
        assert_eq!(p.description(), "must be positive or must be even");
        assert!(p.test(&3));
        assert!(p.test(&-4));
        assert!(!p.test(&-3));
    }

    #[test]
    fn test_combination_drops_short_circuit() {
        let both = positive().as_short_circuiting().and(even().as_short_circuiting());
        assert!(!both.should_short_circuit());

        let either = positive().as_short_circuiting().or(even());
        assert!(!either.should_short_circuit());

        assert!(either.as_short_circuiting().should_short_circuit());
    }

    #[test]
    fn test_and_evaluates_both_sides() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let counting = |_: &i64| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            false
        };
        let p = DescribedPredicate::new("left", counting).and_with("right", counting);
        assert!(!p.test(&1));
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_map_preserves_description_and_flag() {
        struct Account {
            balance: i64,
        }

        let p = positive()
            .as_short_circuiting()
            .map(|account: &Account| &account.balance);
        assert_eq!(p.description(), "must be positive");
        assert!(p.should_short_circuit());
        assert!(p.test(&Account { balance: 10 }));
        assert!(!p.test(&Account { balance: 0 }));
    }

    #[test]
    fn test_map_owned_tests_computed_value() {
        let short = DescribedPredicate::new("must have at most 2 items", |n: &usize| *n <= 2)
            .as_short_circuiting()
            .map_owned(|items: &Vec<i64>| items.len());
        assert_eq!(short.description(), "must have at most 2 items");
        assert!(short.should_short_circuit());
        assert!(short.test(&vec![1, 2]));
        assert!(!short.test(&vec![1, 2, 3]));

        let lower = DescribedPredicate::new("must be admin", |s: &String| s == "admin")
            .map_owned(|name: &str| name.to_lowercase());
        assert!(lower.test("ADMIN"));
        assert!(!lower.test("root"));
    }

    #[test]
    fn test_matching_requires_full_match() {
        let p = DescribedPredicate::<str>::matching("must be abc", FullMatch::new("abc").unwrap());
        assert!(p.test("abc"));
        assert!(!p.test("abcd"));
        assert!(!p.test("xabc"));

        let owned = DescribedPredicate::<String>::matching_short_circuit(
            "digits",
            FullMatch::new(r"\d+").unwrap(),
        );
        assert!(owned.should_short_circuit());
        assert!(owned.test(&"123".to_string()));
    }

    #[test]
    fn test_clone_shares_test() {
        let p = even();
        let q = p.clone();
        assert_eq!(p.test(&2), q.test(&2));
        assert_eq!(format!("{q}"), "must be even");
        assert!(format!("{q:?}").contains("<function>"));
    }
}
