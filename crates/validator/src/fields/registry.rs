//! Named field accessors
//!
//! A [`FieldRegistry`] maps field names to accessor functions, so checkers
//! can be declared by name and resolved once, when the checker is built.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::trace;

use super::error::{BoxError, FieldError};

type AccessorFn<T, F> = Arc<dyn Fn(&T) -> Result<F, BoxError> + Send + Sync>;

// ============================================================================
// ACCESSOR
// ============================================================================

/// Reads one field of type `F` from a `T`.
pub struct Accessor<T, F> {
    field: Arc<str>,
    get: AccessorFn<T, F>,
}

impl<T: 'static, F: 'static> Accessor<T, F> {
    /// Wraps an infallible getter.
    pub fn new<G>(field: impl Into<Arc<str>>, getter: G) -> Self
    where
        G: Fn(&T) -> F + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            get: Arc::new(move |object: &T| -> Result<F, BoxError> { Ok(getter(object)) }),
        }
    }

    /// Wraps a getter that may fail.
    pub fn fallible<G, E>(field: impl Into<Arc<str>>, getter: G) -> Self
    where
        G: Fn(&T) -> Result<F, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            field: field.into(),
            get: Arc::new(move |object: &T| -> Result<F, BoxError> {
                getter(object).map_err(Into::into)
            }),
        }
    }

    /// The field this accessor reads.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Reads the field from `object`.
    pub fn get(&self, object: &T) -> Result<F, FieldError> {
        (self.get)(object).map_err(|source| FieldError::AccessorFailed {
            field: self.field.to_string(),
            source,
        })
    }
}

impl<T, F> Clone for Accessor<T, F> {
    fn clone(&self) -> Self {
        Self {
            field: Arc::clone(&self.field),
            get: Arc::clone(&self.get),
        }
    }
}

impl<T, F> fmt::Debug for Accessor<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("field", &self.field)
            .field("type", &type_name::<F>())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

struct Entry {
    type_name: &'static str,
    accessor: Arc<dyn Any + Send + Sync>,
}

/// Field accessors of `T`, keyed by field name.
///
/// ```rust,ignore
/// let registry = FieldRegistry::<Store>::new()
///     .register("name", |store: &Store| store.name.clone())
///     .register("capacity", |store: &Store| store.capacity);
///
/// let capacity = registry.accessor::<u32>("capacity")?;
/// ```
pub struct FieldRegistry<T> {
    entries: HashMap<String, Entry>,
    _object: PhantomData<fn(&T)>,
}

impl<T: 'static> FieldRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            _object: PhantomData,
        }
    }

    /// Registers an infallible getter under `name`, replacing any previous
    /// registration.
    #[must_use = "builder methods must be chained or built"]
    pub fn register<F, G>(self, name: impl Into<String>, getter: G) -> Self
    where
        F: 'static,
        G: Fn(&T) -> F + Send + Sync + 'static,
    {
        let name = name.into();
        let accessor = Accessor::new(name.as_str(), getter);
        self.insert(name, accessor)
    }

    /// Registers a getter that may fail under `name`.
    ///
    /// A failure surfaces as [`FieldError::AccessorFailed`] when the field is
    /// read.
    #[must_use = "builder methods must be chained or built"]
    pub fn register_fallible<F, E, G>(self, name: impl Into<String>, getter: G) -> Self
    where
        F: 'static,
        E: Into<BoxError>,
        G: Fn(&T) -> Result<F, E> + Send + Sync + 'static,
    {
        let name = name.into();
        let accessor = Accessor::fallible(name.as_str(), getter);
        self.insert(name, accessor)
    }

    fn insert<F: 'static>(mut self, name: String, accessor: Accessor<T, F>) -> Self {
        trace!(field = %name, r#type = type_name::<F>(), "field accessor registered");
        self.entries.insert(
            name,
            Entry {
                type_name: type_name::<F>(),
                accessor: Arc::new(accessor),
            },
        );
        self
    }

    /// Whether an accessor is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The registered field names, in no particular order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Looks up the accessor for `name`, which must yield an `F`.
    pub fn accessor<F: 'static>(&self, name: &str) -> Result<Accessor<T, F>, FieldError> {
        let entry = self.entries.get(name).ok_or_else(|| FieldError::Missing {
            field: name.to_string(),
        })?;

        entry
            .accessor
            .downcast_ref::<Accessor<T, F>>()
            .cloned()
            .ok_or_else(|| FieldError::TypeMismatch {
                field: name.to_string(),
                expected: type_name::<F>(),
                registered: entry.type_name,
            })
    }
}

impl<T: 'static> Default for FieldRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.type_name))
            .collect();
        fields.sort_unstable();
        f.debug_struct("FieldRegistry")
            .field("fields", &fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Store {
        name: String,
        capacity: u32,
        manager: Option<String>,
    }

    fn store() -> Store {
        Store {
            name: "Main St".into(),
            capacity: 40,
            manager: None,
        }
    }

    fn registry() -> FieldRegistry<Store> {
        FieldRegistry::new()
            .register("name", |s: &Store| s.name.clone())
            .register("capacity", |s: &Store| s.capacity)
            .register_fallible("manager", |s: &Store| {
                s.manager.clone().ok_or("manager not loaded")
            })
    }

    #[test]
    fn test_accessor_lookup() {
        let registry = registry();
        assert!(registry.contains("name"));
        assert_eq!(registry.accessor::<u32>("capacity").unwrap().get(&store()).unwrap(), 40);
        assert_eq!(
            registry.accessor::<String>("name").unwrap().get(&store()).unwrap(),
            "Main St"
        );
    }

    #[test]
    fn test_missing_field() {
        let err = registry().accessor::<u32>("seats").unwrap_err();
        assert!(matches!(err, FieldError::Missing { ref field } if field == "seats"));
    }

    #[test]
    fn test_type_mismatch() {
        let err = registry().accessor::<i64>("capacity").unwrap_err();
        match err {
            FieldError::TypeMismatch {
                field,
                expected,
                registered,
            } => {
                assert_eq!(field, "capacity");
                assert_eq!(expected, "i64");
                assert_eq!(registered, "u32");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fallible_accessor_failure() {
        let accessor = registry().accessor::<String>("manager").unwrap();
        let err = accessor.get(&store()).unwrap_err();
        assert_eq!(err.field(), "manager");
        assert!(matches!(err, FieldError::AccessorFailed { .. }));
    }

    #[test]
    fn test_field_names() {
        let mut names: Vec<_> = registry().field_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(names, ["capacity", "manager", "name"]);
    }
}
