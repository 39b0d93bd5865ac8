//! Context values.
//!
//! Everything a template can print is one of the variants of [`Value`]. Absence is
//! expressed with `Option::None` at the edges, never inside the enum.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A value that can be substituted into a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// `true` / `false`.
    Bool(bool),

    /// Whole number.
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Text, printed verbatim.
    String(String),

    /// Ordered sequence, printed joined by the configured separator.
    List(Vec<Value>),

    /// Nested context, printed as `key=value` entries in key order.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Convert a JSON value. `null` becomes `None`, and null entries inside
    /// arrays and objects are dropped.
    pub fn from_json(json: serde_json::Value) -> Option<Self> {
        use serde_json::Value as Json;

        match json {
            Json::Null => None,
            Json::Bool(b) => Some(Value::Bool(b)),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Some(Value::Int(i)),
                None => n.as_f64().map(Value::Float),
            },
            Json::String(s) => Some(Value::String(s)),
            Json::Array(items) => Some(Value::List(
                items.into_iter().filter_map(Value::from_json).collect(),
            )),
            Json::Object(map) => Some(Value::Map(
                map.into_iter()
                    .filter_map(|(k, v)| Value::from_json(v).map(|v| (k, v)))
                    .collect(),
            )),
        }
    }

    /// Whether this is an `Int` or a `Float`.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }
}

/// Conversion of a Rust value into an optional [`Value`].
///
/// `None` means "absent": the template falls back to its defaults.
/// Implemented for the usual scalars, strings, sequences, string-keyed maps
/// and `Option`. `#[derive(Record)]` relies on it for every field.
pub trait ToValue {
    fn to_value(&self) -> Option<Value>;
}

impl ToValue for Value {
    fn to_value(&self) -> Option<Value> {
        Some(self.clone())
    }
}

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Option<Value> {
        Value::from_json(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.to_string()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.clone()))
    }
}

impl ToValue for char {
    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.to_string()))
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Bool(*self))
    }
}

macro_rules! impl_small_int {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Option<Value> {
                    Some(Value::Int(i64::from(*self)))
                }
            }

            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_small_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_wide_int {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Option<Value> {
                    Some(Value::from(*self))
                }
            }

            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    match i64::try_from(v) {
                        Ok(i) => Value::Int(i),
                        Err(_) => Value::Float(v as f64),
                    }
                }
            }
        )*
    };
}

impl_wide_int!(u64, usize, isize, i128, u128);

impl ToValue for f32 {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Float(f64::from(*self)))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Float(*self))
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Option<Value> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Option<Value> {
        Some(Value::List(self.iter().filter_map(ToValue::to_value).collect()))
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Option<Value> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Option<Value> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Map(
            self.iter()
                .filter_map(|(k, v)| v.to_value().map(|v| (k.clone(), v)))
                .collect(),
        ))
    }
}

impl<T: ToValue, S> ToValue for HashMap<String, T, S> {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Map(
            self.iter()
                .filter_map(|(k, v)| v.to_value().map(|v| (k.clone(), v)))
                .collect(),
        ))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(map: BTreeMap<String, T>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
