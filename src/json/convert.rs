//! Conversions between Rust values and [`Value`].
//!
//! All integer types convert through `f64`; magnitudes above 2^53 lose
//! precision exactly as they would in any JSON number.

use std::fmt;
use std::str::FromStr;

use super::parser::parse;
use super::serializer::{stringify, stringify_pretty};
use super::types::{Map, Value};
use crate::error::Error;

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

/// Collects key/value pairs into an object; a repeated key keeps the last
/// value, like the parser.
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// `{}` writes compact JSON, `{:#}` writes it indented.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&stringify_pretty(self))
        } else {
            f.write_str(&stringify(self))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42), Value::Number(42.0));
        assert_eq!(Value::from(7u8), Value::Number(7.0));
        assert_eq!(Value::from(41.5), Value::Number(41.5));
        assert_eq!(Value::from(0.5f32), Value::Number(0.5));
        assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
        assert_eq!(Value::from(()), Value::Null);
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_collect_array() {
        let value: Value = (1..=3).map(Value::from).collect();
        assert_eq!(value, "[1,2,3]".parse::<Value>().unwrap());
    }

    #[test]
    fn test_collect_object() {
        let value: Value = vec![("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(value, r#"{"b":2,"a":3}"#.parse::<Value>().unwrap());
    }

    #[test]
    fn test_from_str_error() {
        let err = "{]".parse::<Value>().unwrap_err();
        assert_eq!(err.to_string(), "syntax error at line 1 near: ]");
    }

    #[test]
    fn test_display() {
        let value: Value = r#"{"a": [1, 2.5]}"#.parse().unwrap();
        assert_eq!(value.to_string(), r#"{"a":[1,2.5]}"#);
        assert_eq!(
            format!("{value:#}"),
            "{\n  \"a\": [\n    1,\n    2.5\n  ]\n}"
        );
    }
}
