//! JSON value types.
//!
//! [`Value`] is a closed tree: every container owns its children, and the
//! parser never aliases, so there is no sharing and no cycles.
//!
//! # Equality
//!
//! `PartialEq` is deep and structural. Numbers compare as `f64` (`2` and
//! `2.0` are the same value), arrays compare element-wise in order, and
//! objects compare as key/value sets regardless of insertion order.

use indexmap::IndexMap;

use super::serializer;
use crate::error::{Error, JsonResult};

/// Object storage: unique keys, iterated in insertion order.
///
/// `IndexMap` equality ignores insertion order.
pub type Map = IndexMap<String, Value>;

/// A JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean (true/false)
    Bool(bool),
    /// JSON number; integers and fractions alike are doubles
    Number(f64),
    /// JSON string
    String(String),
    /// JSON array of values
    Array(Vec<Value>),
    /// JSON object in insertion order
    Object(Map),
}

impl Value {
    /// An empty object.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mutable form of [`Value::as_array`].
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Mutable form of [`Value::as_object`].
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Look up `key` in an object.
    ///
    /// Fails with [`Error::KeyNotFound`] when the key is absent and with
    /// [`Error::TypeMismatch`] when `self` is not an object.
    pub fn get(&self, key: &str) -> JsonResult<&Value> {
        match self {
            Value::Object(map) => map
                .get(key)
                .ok_or_else(|| Error::KeyNotFound(key.to_string())),
            other => Err(other.mismatch("object")),
        }
    }

    /// Mutable form of [`Value::get`].
    pub fn get_mut(&mut self, key: &str) -> JsonResult<&mut Value> {
        match self {
            Value::Object(map) => map
                .get_mut(key)
                .ok_or_else(|| Error::KeyNotFound(key.to_string())),
            other => Err(other.mismatch("object")),
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Returns true if this is an object containing `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            Value::Object(map) => map.contains_key(key),
            _ => false,
        }
    }

    /// Returns true if this is an array with an element at `index`.
    pub fn contains_index(&self, index: usize) -> bool {
        match self {
            Value::Array(arr) => index < arr.len(),
            _ => false,
        }
    }

    /// Remove `key` from an object, returning the removed value.
    ///
    /// Absent keys and non-object values are left untouched. The order of
    /// the remaining members is preserved.
    pub fn delete_key(&mut self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.shift_remove(key),
            _ => None,
        }
    }

    /// Remove the first array element structurally equal to `needle`.
    ///
    /// Returns the removed element. Arrays without a match and non-array
    /// values are left untouched.
    pub fn delete_value(&mut self, needle: &Value) -> Option<Value> {
        let arr = self.as_array_mut()?;
        let index = arr.iter().position(|item| item == needle)?;
        Some(arr.remove(index))
    }

    /// Short textual form of the value.
    ///
    /// Scalars render as their JSON text except strings, which render raw;
    /// containers render as `array` / `object`.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => "false".to_string(),
            Value::Number(n) => serializer::serialize_number(*n),
            Value::String(s) => s.clone(),
            Value::Array(_) => "array".to_string(),
            Value::Object(_) => "object".to_string(),
        }
    }

    /// Truthiness: null and false are false, numbers are true unless zero,
    /// strings unless empty, containers always.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}
