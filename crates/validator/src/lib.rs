//! # verity-validator
//!
//! Accumulating validation chains for request handling.
//!
//! A [`Validator`](engine::Validator) runs every check of a chain, records
//! each failure with its description and the offending value, and hands the
//! records to a conversion function only at the end. The conversion decides
//! what failure looks like to the caller, so the same chain can end in an
//! `Err`, a panic, `false` or `None`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! fn rename_store(store_id: i64, name: &str) -> Result<(), ValidationFailure> {
//!     throwing()
//!         .check(&id(), &store_id)
//!         .check(&non_blank::<str>().and(min_length(3)), name)
//!         .into_result()
//! }
//! ```
//!
//! ## Building Blocks
//!
//! - [`DescribedPredicate`](foundation::DescribedPredicate): a test with a
//!   human-readable failure reason, composable with `and` / `or` / `map`
//! - [`creators`]: result styles (`throwing`, `asserting`, `returning`,
//!   `optional`, `boolean`)
//! - [`validators`]: ready-made predicates for strings, numbers,
//!   collections, options and JSON bodies
//! - [`fields`]: per-field checks of whole objects (feature `fields`)
//!
//! ## Nesting
//!
//! Chains built elsewhere are merged with
//! [`check_nested`](engine::Validator::check_nested), starting from
//! [`Validator::nested`](engine::Validator::nested). A nested chain cannot
//! produce a result on its own.

pub mod creators;
pub mod engine;
#[cfg(feature = "fields")]
pub mod fields;
pub mod foundation;
pub mod prelude;
pub mod validators;

pub use engine::Validator;
pub use foundation::{DescribedPredicate, InvalidValue, ValidationFailure};
