//! Predicates over JSON request bodies
//!
//! Checks the existence and kind of properties in a decoded JSON object,
//! typically a request body before it is mapped onto a typed struct.
//!
//! # Examples
//!
//! ```rust,ignore
//! use serde_json::json;
//! use verity_validator::prelude::*;
//!
//! let body = json!({ "name": "Main St", "capacity": 40 });
//! let object = body.as_object().unwrap();
//!
//! let result = throwing()
//!     .check(&valid_typed_map_element::<str>(object, JsonKind::String), "name")
//!     .check(&valid_typed_map_element::<str>(object, JsonKind::Number), "capacity")
//!     .into_result();
//! assert!(result.is_ok());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::DescribedPredicate;

/// The kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// The kind of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Whether `value` is of this kind.
    pub fn matches(self, value: &Value) -> bool {
        Self::of(value) == self
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
        };
        f.write_str(name)
    }
}

/// The tested key is present in `object` and its value is a non-null
/// value of `kind`.
///
/// A property explicitly set to `null` always fails, even for
/// [`JsonKind::Null`]. The object is copied when the predicate is built.
pub fn valid_typed_map_element<S>(object: &Map<String, Value>, kind: JsonKind) -> DescribedPredicate<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    let object = object.clone();
    DescribedPredicate::new(
        format!("must be passed as a JSON property as a {kind}"),
        move |key: &S| object
            .get(key.as_ref())
            .is_some_and(|value| !value.is_null() && kind.matches(value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn body() -> Map<String, Value> {
        match json!({
            "name": "Main St",
            "capacity": 40,
            "open": true,
            "tags": ["a"],
            "manager": null,
        }) {
            Value::Object(object) => object,
            _ => unreachable!(),
        }
    }

    #[rstest]
    #[case("name", JsonKind::String, true)]
    #[case("capacity", JsonKind::Number, true)]
    #[case("open", JsonKind::Boolean, true)]
    #[case("tags", JsonKind::Array, true)]
    #[case("manager", JsonKind::Null, false)]
    #[case("manager", JsonKind::String, false)]
    #[case("capacity", JsonKind::String, false)]
    #[case("missing", JsonKind::String, false)]
    fn test_valid_typed_map_element(
        #[case] key: &str,
        #[case] kind: JsonKind,
        #[case] expected: bool,
    ) {
        let p = valid_typed_map_element::<str>(&body(), kind);
        assert_eq!(p.test(key), expected);
    }

    #[test]
    fn test_description_names_kind() {
        let p = valid_typed_map_element::<String>(&body(), JsonKind::Number);
        assert_eq!(p.description(), "must be passed as a JSON property as a Number");
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::Boolean.to_string(), "Boolean");
    }
}
