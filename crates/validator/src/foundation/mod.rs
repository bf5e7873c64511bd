//! Core validation types
//!
//! This module contains the building blocks every validator chain is made
//! of:
//!
//! - **Predicates**: [`DescribedPredicate`], a named test with a
//!   short-circuit intent flag and an `and` / `or` / `map` algebra
//! - **Records**: [`InvalidValue`], one rejected value and its reason
//! - **Errors**: [`ValidationFailure`], [`ContractViolation`]
//! - **Patterns**: [`FullMatch`], an anchored regular expression
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::foundation::{DescribedPredicate, FullMatch};
//!
//! let constant = DescribedPredicate::<str>::matching(
//!     "must be a CONSTANT_CASED string",
//!     FullMatch::new("[A-Z_]*")?,
//! );
//! let short = DescribedPredicate::new("must be short", |s: &str| s.len() < 16);
//!
//! let rule = constant.and(short);
//! assert!(rule.test("MAX_RETRIES"));
//! ```

pub mod error;
pub mod invalid;
pub mod pattern;
pub mod predicate;

pub use error::{ContractViolation, ValidationFailure};
pub use invalid::{InvalidValue, render_invalid_values};
pub use pattern::FullMatch;
pub use predicate::{DescribedPredicate, NON_NULL_DESCRIPTION};

pub(crate) use invalid::snapshot;
