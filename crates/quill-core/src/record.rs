//! Field descriptors for typed contexts.
//!
//! A [`Record`] lists the readable fields of a type as name/accessor pairs.
//! Usually generated with `#[derive(Record)]`, which takes the `pub` named fields
//! of a struct; hand-written impls work the same way.

use crate::{ToValue, Value};
use std::fmt;
use std::sync::Arc;

type Accessor<T> = Arc<dyn Fn(&T) -> Option<Value> + Send + Sync>;

/// One readable field of `T`.
pub struct FieldDescriptor<T> {
    name: String,
    accessor: Accessor<T>,
}

impl<T: 'static> FieldDescriptor<T> {
    /// Describe a field by name and accessor.
    ///
    /// The accessor returns `None` for an absent value.
    pub fn new<F>(name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> Option<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            accessor: Arc::new(accessor),
        }
    }

    /// Describe a field whose type implements [`ToValue`].
    pub fn of<V, F>(name: impl Into<String>, get: F) -> Self
    where
        V: ToValue + ?Sized,
        F: Fn(&T) -> &V + Send + Sync + 'static,
    {
        Self::new(name, move |owner| get(owner).to_value())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read this field from `owner`.
    pub fn read(&self, owner: &T) -> Option<Value> {
        (self.accessor)(owner)
    }

    /// Re-root this descriptor on an outer type that embeds `T`.
    pub fn project<U, F>(self, inner: F) -> FieldDescriptor<U>
    where
        U: 'static,
        F: Fn(&U) -> &T + Send + Sync + 'static,
    {
        let accessor = self.accessor;
        FieldDescriptor {
            name: self.name,
            accessor: Arc::new(move |outer: &U| accessor(inner(outer))),
        }
    }
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A type whose fields can feed a template.
pub trait Record: Sized + 'static {
    /// Readable fields, in declaration order.
    fn fields() -> Vec<FieldDescriptor<Self>>;

    /// Name used in error messages.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inner {
        city: String,
    }

    struct Outer {
        name: String,
        nickname: Option<String>,
        inner: Inner,
    }

    impl Record for Inner {
        fn fields() -> Vec<FieldDescriptor<Self>> {
            vec![FieldDescriptor::of("city", |i: &Inner| &i.city)]
        }
    }

    impl Record for Outer {
        fn fields() -> Vec<FieldDescriptor<Self>> {
            let mut fields = vec![
                FieldDescriptor::of("name", |o: &Outer| &o.name),
                FieldDescriptor::of("nickname", |o: &Outer| &o.nickname),
            ];
            fields.extend(
                Inner::fields()
                    .into_iter()
                    .map(|f| f.project(|o: &Outer| &o.inner)),
            );
            fields
        }
    }

    #[test]
    fn test_read_fields() {
        let outer = Outer {
            name: "Ada".into(),
            nickname: None,
            inner: Inner {
                city: "London".into(),
            },
        };
        let fields = Outer::fields();
        let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "nickname", "city"]);

        assert_eq!(fields[0].read(&outer), Some(Value::String("Ada".into())));
        assert_eq!(fields[1].read(&outer), None);
        assert_eq!(fields[2].read(&outer), Some(Value::String("London".into())));
    }

    #[test]
    fn test_custom_accessor() {
        let field = FieldDescriptor::new("initial", |o: &Outer| {
            o.name.chars().next().map(|c| Value::String(c.to_string()))
        });
        let outer = Outer {
            name: "Bo".into(),
            nickname: None,
            inner: Inner { city: String::new() },
        };
        assert_eq!(field.read(&outer), Some(Value::String("B".into())));
        assert!(format!("{:?}", field).contains("initial"));
    }
}
