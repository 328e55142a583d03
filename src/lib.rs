//! picojson - a small JSON value model, parser and serializer.
//!
//! Parsing is a line-tracking recursive descent that reports failures as
//! `syntax error at line {line} near: {context}`. Serialization is canonical
//! for a given value: integral numbers print without a decimal point, other
//! numbers in their shortest round-tripping form.
//!
//! # Modules
//!
//! - [`json`] - Value model, lexer, parser and serializer
//! - [`error`] - Error type shared by parsing and value access
//!
//! # Example
//!
//! ```
//! use picojson::{parse, stringify};
//!
//! let value = parse(r#"{"ok": true, "n": 42.0}"#).unwrap();
//! assert_eq!(stringify(&value), r#"{"ok":true,"n":42}"#);
//! ```

// Library code propagates errors instead of panicking.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{Error, JsonResult};
pub use json::{parse, parse_prefix, parse_with_limits, stringify, stringify_pretty, Limits, Map, Value};
