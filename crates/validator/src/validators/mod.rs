//! Built-in predicates
//!
//! Ready-made [`DescribedPredicate`](crate::foundation::DescribedPredicate)s
//! for the checks that come up again and again in request handling.
//!
//! # Categories
//!
//! - **Nullable**: presence and absence of `Option` values, and wrappers that
//!   lift a predicate over `T` to `Option<T>`
//! - **String**: blankness, length, casing, names, phone numbers
//! - **Numeric**: minimum, natural numbers, database IDs
//! - **Collection**: element-wise checks, size, membership
//! - **Boolean**: `true` / `false`
//! - **JSON**: property presence and kind in decoded objects
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let username = non_blank::<str>().and(min_length(3));
//! let nickname = nullable(name::<String>());
//! let owner = id::<i64>();
//! ```
//!
//! Note that [`nullable::optional`] (a predicate over `Option<T>`) and
//! [`crate::creators::optional`] (a validator returning `None` on failure)
//! share a name; the prelude exports the latter.

pub mod boolean;
pub mod collection;
pub mod json;
pub mod nullable;
pub mod numeric;
pub mod string;

pub use boolean::{is_false, is_true};
pub use collection::{all, any, contained_within, min_size, variant_name};
pub use json::{JsonKind, valid_typed_map_element};
pub use nullable::{is_null, non_null, non_nullable, nullable, unwrapped_optional};
pub use numeric::{id, minimum, natural};
pub use string::{
    constant_cased, does_not_contain_case_insensitive, lax_phone_number, min_length, name,
    non_blank,
};
