//! String predicates
//!
//! All predicates here are generic over `S: AsRef<str> + ?Sized`, so the
//! same rule checks `str`, `String`, `&str` or `Cow<str>` values.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::DescribedPredicate;

static CONSTANT_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_]*$").unwrap());

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^<>$@^%!]+$").unwrap());

static LAX_PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{3,}$").unwrap());

/// Is CONSTANT_CASED?
///
/// The empty string qualifies; combine with [`non_blank`] if that is not
/// wanted.
pub fn constant_cased<S: AsRef<str> + ?Sized + 'static>() -> DescribedPredicate<S> {
    DescribedPredicate::new("must be a CONSTANT_CASED string", |s: &S| {
        CONSTANT_CASE_REGEX.is_match(s.as_ref())
    })
}

/// Contains at least one character that is not whitespace?
pub fn non_blank<S: AsRef<str> + ?Sized + 'static>() -> DescribedPredicate<S> {
    DescribedPredicate::new("a non-blank string is required", |s: &S| {
        s.as_ref().chars().any(|c| !c.is_whitespace())
    })
}

/// A customer-facing name without obscure punctuation (`<>$@^%!`).
pub fn name<S: AsRef<str> + ?Sized + 'static>() -> DescribedPredicate<S> {
    DescribedPredicate::new(
        "invalid name; must not have obscure punctuation",
        |s: &S| NAME_REGEX.is_match(s.as_ref()),
    )
}

/// Vaguely resembles a phone number: an optional `+` and three or more
/// digits.
///
/// Useful for accepting a number liberally before asking the client for a
/// country code.
pub fn lax_phone_number<S: AsRef<str> + ?Sized + 'static>() -> DescribedPredicate<S> {
    DescribedPredicate::new("invalid phone number", |s: &S| {
        LAX_PHONE_REGEX.is_match(s.as_ref())
    })
}

/// Has at least `n` characters (Unicode scalar values, not bytes)?
pub fn min_length<S: AsRef<str> + ?Sized + 'static>(n: usize) -> DescribedPredicate<S> {
    DescribedPredicate::new(format!("must have at least {n} characters"), move |s: &S| {
        s.as_ref().chars().count() >= n
    })
}

/// Does not contain `needle`, ignoring case on both sides?
pub fn does_not_contain_case_insensitive<S: AsRef<str> + ?Sized + 'static>(
    needle: impl Into<String>,
) -> DescribedPredicate<S> {
    let needle = needle.into();
    let lowered = needle.to_lowercase();
    DescribedPredicate::new(format!("must not contain '{needle}'"), move |s: &S| {
        !s.as_ref().to_lowercase().contains(&lowered)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CONSTANT_CASED_STRING", true)]
    #[case("", true)]
    #[case("not_CONSTANT_CASED_STRING", false)]
    #[case("MAX-RETRIES", false)]
    fn test_constant_cased(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(constant_cased::<str>().test(input), expected);
    }

    #[rstest]
    #[case("abc", true)]
    #[case("  a ", true)]
    #[case("", false)]
    #[case(" \t\n", false)]
    fn test_non_blank(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(non_blank::<str>().test(input), expected);
    }

    #[rstest]
    #[case("Jane O'Neil", true)]
    #[case("<script>", false)]
    #[case("50% off!", false)]
    #[case("", false)]
    fn test_name(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(name::<str>().test(input), expected);
    }

    #[rstest]
    #[case("+447700900584", true)]
    #[case("999", true)]
    #[case("12", false)]
    #[case("+44 7700", false)]
    #[case("phone", false)]
    fn test_lax_phone_number(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(lax_phone_number::<str>().test(input), expected);
    }

    #[test]
    fn test_min_length_counts_characters() {
        let p = min_length::<String>(3);
        assert_eq!(p.description(), "must have at least 3 characters");
        assert!(p.test(&"ééé".to_string()));
        assert!(!p.test(&"ab".to_string()));
    }

    #[test]
    fn test_does_not_contain_case_insensitive() {
        let p = does_not_contain_case_insensitive::<str>("Admin");
        assert_eq!(p.description(), "must not contain 'Admin'");
        assert!(p.test("alice"));
        assert!(!p.test("the ADMIN account"));
    }

    #[test]
    fn test_string_predicates_accept_owned_and_borrowed() {
        assert!(non_blank::<&str>().test(&"x"));
        assert!(non_blank::<String>().test(&"x".to_string()));
        assert!(non_blank::<std::borrow::Cow<'static, str>>().test(&"x".into()));
    }
}
