//! Prelude module for convenient imports.
//!
//! Provides a single `use verity_validator::prelude::*;` import that brings
//! in the validator, the result creators and every built-in predicate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let valid = boolean()
//!     .check(&non_blank::<str>(), "Main St")
//!     .check(&minimum(1_u32), &40)
//!     .then(true);
//! ```
//!
//! The `Option` wrapper named `optional` is reachable as
//! `nullable::optional`; the bare name is the result creator.

// ============================================================================
// FOUNDATION: Predicates, records, errors
// ============================================================================

pub use crate::foundation::{
    ContractViolation, DescribedPredicate, FullMatch, InvalidValue, NON_NULL_DESCRIPTION,
    ValidationFailure,
};

// ============================================================================
// ENGINE AND CREATORS
// ============================================================================

pub use crate::creators::{
    allow_all, asserting, boolean, invalidate, optional, require, require_valid, returning,
    throwing,
};
pub use crate::engine::Validator;

// ============================================================================
// VALIDATORS: All built-in predicates
// ============================================================================

pub use crate::validators::{
    JsonKind, all, any, constant_cased, contained_within, does_not_contain_case_insensitive, id,
    is_false, is_null, is_true, lax_phone_number, min_length, min_size, minimum, name, natural,
    non_blank, non_null, non_nullable, nullable, unwrapped_optional, valid_typed_map_element,
    variant_name,
};

// ============================================================================
// FIELDS-GATED: Field checkers
// ============================================================================

#[cfg(feature = "fields")]
pub use crate::fields::{
    CompositeChecker, FailedField, FieldCheck, FieldChecker, FieldError, FieldRegistry,
};
