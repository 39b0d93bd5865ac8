//! Rendering context.
//!
//! Maps token names to the values substituted for them.

use crate::{Result, Value};
use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Values for one render call.
///
/// ```
/// use quill_core::Context;
///
/// let ctx = Context::new()
///     .with("name", "Matteo")
///     .with("fruits", vec!["apple", "banana"]);
///
/// assert!(ctx.contains_key("name"));
/// assert_eq!(ctx.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: HashMap<String, Value>,
}

impl Context {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from any serializable struct or string-keyed map.
    /// Null fields are left out; a `null` input gives an empty context.
    /// Anything that does not serialize to an object is an error.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let values = match Value::from_json(serde_json::to_value(value)?) {
            None => HashMap::new(),
            Some(Value::Map(map)) => map.into_iter().collect(),
            Some(other) => {
                return Err(serde_json::Error::custom(format!(
                    "context must serialize to an object, got {:?}",
                    other
                ))
                .into())
            }
        };
        Ok(Self { values })
    }

    /// Set a value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Context {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
