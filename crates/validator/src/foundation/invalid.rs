//! Invalid value records
//!
//! Each failing check leaves behind one [`InvalidValue`]: the description of
//! the predicate that rejected the value and a JSON snapshot of the value
//! itself. Snapshots let records of unrelated Rust types share one ordered
//! sequence; an absent value (`None`) is captured as `null`.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded validation failure.
///
/// Records are never deduplicated: the same `(description, value)` pair
/// produced twice is kept twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidValue {
    description: Cow<'static, str>,
    value: Value,
}

impl InvalidValue {
    /// Creates a record from an already captured value.
    pub fn new(description: impl Into<Cow<'static, str>>, value: Value) -> Self {
        Self {
            description: description.into(),
            value,
        }
    }

    /// Creates a record, capturing `value` as JSON.
    pub fn capture<T>(description: impl Into<Cow<'static, str>>, value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        Self::new(description, snapshot(value))
    }

    /// Why the value was rejected.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The rejected value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Splits the record into its description and value.
    pub fn into_parts(self) -> (Cow<'static, str>, Value) {
        (self.description, self.value)
    }
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.value)
    }
}

/// Captures `value` as JSON.
///
/// Values serde cannot represent as JSON (maps with non-string keys, for
/// instance) are kept as a placeholder string naming the serializer error.
pub(crate) fn snapshot<T>(value: &T) -> Value
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, "offending value could not be captured as JSON");
            Value::String(format!("<unrepresentable value: {error}>"))
        }
    }
}

/// Renders records one per line under an `Invalid Values:` header.
///
/// ```text
/// Invalid Values:
///     must be true: false
///     at least 4 elements must be present: [1,2,3]
/// ```
pub fn render_invalid_values<'a, I>(invalid_values: I) -> String
where
    I: IntoIterator<Item = &'a InvalidValue>,
{
    let lines: Vec<String> = invalid_values
        .into_iter()
        .map(|invalid| format!("\t{invalid}"))
        .collect();
    format!("Invalid Values:\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_capture_snapshots_value() {
        let invalid = InvalidValue::capture("must be true", &false);
        assert_eq!(invalid.description(), "must be true");
        assert_eq!(invalid.value(), &json!(false));
    }

    #[test]
    fn test_absent_value_is_null() {
        let invalid = InvalidValue::capture("required", &None::<String>);
        assert_eq!(invalid.value(), &Value::Null);
        assert_eq!(invalid.to_string(), "required: null");
    }

    #[test]
    fn test_unrepresentable_value_is_kept_as_placeholder() {
        let mut map = HashMap::new();
        map.insert((1, 2), "pair keys are not JSON object keys");

        let invalid = InvalidValue::capture("bad map", &map);
        let placeholder = invalid.value().as_str().unwrap();
        assert!(placeholder.starts_with("<unrepresentable value:"));
    }

    #[test]
    fn test_render_lists_every_record() {
        let records = vec![
            InvalidValue::capture("must be true", &false),
            InvalidValue::capture("at least 4 elements must be present", &[1, 2, 3]),
        ];
        assert_eq!(
            render_invalid_values(&records),
            "Invalid Values:\n\tmust be true: false\n\tat least 4 elements must be present: [1,2,3]"
        );
    }

    #[test]
    fn test_serde_shape() {
        let invalid = InvalidValue::capture("must be abc", "");
        let encoded = serde_json::to_value(&invalid).unwrap();
        assert_eq!(encoded, json!({ "description": "must be abc", "value": "" }));

        let decoded: InvalidValue = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, invalid);
    }
}
