//! JSON serialization.
//!
//! Output is deterministic for a given value: objects are written in
//! insertion order, numbers in their shortest round-tripping form, and
//! integral numbers within the exact-integer range without a decimal point.
//!
//! Serialization is total. The only values JSON cannot express, non-finite
//! numbers, can only be built programmatically and are written as `null`.

use super::limits::Limits;
use super::types::{Map, Value};

/// Serialize a value to compact JSON.
///
/// ```
/// use picojson::json::{stringify, Value};
///
/// assert_eq!(stringify(&Value::Number(42.0)), "42");
/// assert_eq!(stringify(&Value::Number(41.5)), "41.5");
/// ```
pub fn stringify(value: &Value) -> String {
    Serializer::new().serialize(value)
}

/// Serialize a value to indented JSON, two spaces per level.
pub fn stringify_pretty(value: &Value) -> String {
    Serializer::with_indent(2).serialize(value)
}

/// Serialize a number.
///
/// Integral values within ±(2^53-1) print as plain integers. Everything else
/// prints the shortest decimal that parses back to the same double, switching
/// to exponent form outside `[1e-5, 1e17)`.
pub fn serialize_number(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    if Limits::is_safe_integer(value) {
        // Exact: the magnitude is at most 2^53 - 1
        return format!("{}", value as i64);
    }
    let magnitude = value.abs();
    if (1e-5..1e17).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

/// Configurable serializer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Serializer {
    indent: Option<usize>,
}

impl Serializer {
    /// Compact output, no whitespace.
    pub fn new() -> Self {
        Self { indent: None }
    }

    /// Pretty output: one member per line, indented by `width` spaces per
    /// level, `": "` after keys.
    pub fn with_indent(width: usize) -> Self {
        Self {
            indent: Some(width),
        }
    }

    /// Serialize `value` to a new string.
    pub fn serialize(&self, value: &Value) -> String {
        let mut output = String::new();
        self.serialize_into(value, &mut output);
        output
    }

    /// Append the serialization of `value` to `output`.
    pub fn serialize_into(&self, value: &Value, output: &mut String) {
        self.serialize_value(value, output, 0);
    }

    fn serialize_value(&self, value: &Value, output: &mut String, depth: usize) {
        match value {
            Value::Null => output.push_str("null"),
            Value::Bool(true) => output.push_str("true"),
            Value::Bool(false) => output.push_str("false"),
            Value::Number(n) => output.push_str(&serialize_number(*n)),
            Value::String(s) => serialize_string(s, output),
            Value::Array(arr) => self.serialize_array(arr, output, depth),
            Value::Object(obj) => self.serialize_object(obj, output, depth),
        }
    }

    /// Serialize an array.
    fn serialize_array(&self, arr: &[Value], output: &mut String, depth: usize) {
        if arr.is_empty() {
            output.push_str("[]");
            return;
        }

        output.push('[');
        for (i, value) in arr.iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            self.newline(output, depth + 1);
            self.serialize_value(value, output, depth + 1);
        }
        self.newline(output, depth);
        output.push(']');
    }

    /// Serialize an object in insertion order.
    fn serialize_object(&self, obj: &Map, output: &mut String, depth: usize) {
        if obj.is_empty() {
            output.push_str("{}");
            return;
        }

        output.push('{');
        for (i, (key, value)) in obj.iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            self.newline(output, depth + 1);
            serialize_string(key, output);
            output.push(':');
            if self.indent.is_some() {
                output.push(' ');
            }
            self.serialize_value(value, output, depth + 1);
        }
        self.newline(output, depth);
        output.push('}');
    }

    fn newline(&self, output: &mut String, depth: usize) {
        if let Some(width) = self.indent {
            output.push('\n');
            output.extend(std::iter::repeat(' ').take(width * depth));
        }
    }
}

/// Serialize a string with JSON escaping.
///
/// Quote, backslash and slash get backslash escapes, control characters and
/// DEL get `\u00XX`; everything else, non-ASCII included, is copied as is.
fn serialize_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '/' => output.push_str("\\/"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' || c == '\x7f' => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}
