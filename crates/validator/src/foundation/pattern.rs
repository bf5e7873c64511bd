//! Anchored regular expressions
//!
//! [`FullMatch`] wraps a compiled [`Regex`] so that it only accepts inputs the
//! pattern matches from the first character to the last.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

/// A regular expression that must match the whole input.
///
/// The pattern is compiled once, at construction.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::foundation::FullMatch;
///
/// let abc = FullMatch::new("abc")?;
/// assert!(abc.is_match("abc"));
/// assert!(!abc.is_match("abcd"));
/// ```
#[derive(Clone)]
pub struct FullMatch {
    anchored: Regex,
    source: String,
}

impl FullMatch {
    /// Compiles `pattern` with full-string anchoring.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Self::with_options(pattern, |builder| builder)
    }

    /// Compiles `pattern` with full-string anchoring, letting `configure` set
    /// the [`RegexBuilder`] options (case folding, verbose mode and so on).
    ///
    /// ```rust,ignore
    /// let code = FullMatch::with_options("abc", |b| b.case_insensitive(true))?;
    /// assert!(code.is_match("ABC"));
    /// ```
    pub fn with_options<C>(pattern: &str, configure: C) -> Result<Self, regex::Error>
    where
        C: Fn(&mut RegexBuilder) -> &mut RegexBuilder,
    {
        let build = |source: &str| configure(&mut RegexBuilder::new(source)).build();

        // `\A`/`\z` stay whole-input anchors under `multi_line`.
        let anchored = match build(&format!(r"\A(?:{pattern})\z")) {
            Ok(anchored) => anchored,
            Err(err) => {
                // A trailing verbose-mode comment swallows the closing group;
                // a newline ends the comment and is ignored in that mode.
                build(pattern).map_err(|_| err)?;
                build(&format!("\\A(?:{pattern}\n)\\z"))?
            }
        };

        Ok(Self {
            anchored,
            source: pattern.to_owned(),
        })
    }

    /// Returns `true` when the entire `input` matches.
    pub fn is_match(&self, input: &str) -> bool {
        self.anchored.is_match(input)
    }

    /// The pattern as written by the caller, without the anchoring.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for FullMatch {
    type Err = regex::Error;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::new(pattern)
    }
}

impl fmt::Debug for FullMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FullMatch").field(&self.source).finish()
    }
}

impl fmt::Display for FullMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
