//! Field checkers
//!
//! Declarative per-field validation of whole objects. Each field is read
//! through an explicit accessor, either passed inline or looked up by name in
//! a [`FieldRegistry`], and checked against a set of predicates. A
//! [`CompositeChecker`] runs many field checkers and reports every failing
//! field with the descriptions of the predicates it failed.
//!
//! Enabled by the `fields` feature (on by default).

mod checker;
mod composite;
mod error;
mod registry;

pub use checker::{FieldCheck, FieldChecker};
pub use composite::{CompositeChecker, CompositeCheckerBuilder, FailedField};
pub use error::{BoxError, FieldError};
pub use registry::{Accessor, FieldRegistry};
