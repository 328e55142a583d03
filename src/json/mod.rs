//! JSON parsing and serialization.
//!
//! # Architecture
//!
//! The JSON subsystem is organized into focused modules:
//!
//! - [`types`] - The [`Value`] tree, equality and mutation
//! - [`limits`] - Parser resource limits
//! - [`lexer`] - Tokenizer with line tracking and escape handling
//! - [`parser`] - Recursive descent parser
//! - [`serializer`] - Compact and indented output
//! - `convert` - `From`, `FromStr` and `Display` impls
//!
//! # Example
//!
//! ```
//! use picojson::json::{parse, stringify, Value};
//!
//! let mut value = parse(r#"{ "b": true, "a": [1, 2, "three"], "d": 2 }"#).unwrap();
//! value.delete_key("b");
//! value.get_mut("a").unwrap().delete_value(&Value::from("three"));
//!
//! assert_eq!(value, parse(r#"{ "a": [1, 2], "d": 2.0 }"#).unwrap());
//! assert_eq!(stringify(&value), r#"{"a":[1,2],"d":2}"#);
//! ```

mod convert;
pub mod lexer;
pub mod limits;
pub mod parser;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod serializer;
pub mod types;

// Re-export commonly used items
pub use limits::Limits;
pub use parser::{parse, parse_prefix, parse_with_limits, Parser};
pub use serializer::{stringify, stringify_pretty, Serializer};
pub use types::{Map, Value};
