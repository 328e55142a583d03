//! Error handling for JSON parsing and value access.
//!
//! Every failure the crate can report is a variant of [`Error`]. Syntax errors
//! render exactly as `syntax error at line {line} near: {context}`; callers and
//! conformance tests compare that text byte for byte.

use thiserror::Error;

/// All errors produced by parsing and by the value accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input. `context` is the rest of the offending line, starting
    /// at the point of failure.
    #[error("syntax error at line {line} near: {context}")]
    Syntax {
        /// 1-based line of the failure
        line: usize,
        /// Diagnostic slice of the remaining input on that line
        context: String,
    },

    /// Arrays/objects nested deeper than the configured limit.
    #[error("nesting too deep at line {line} (limit {limit})")]
    NestingTooDeep {
        /// 1-based line of the container that crossed the limit
        line: usize,
        /// Configured maximum depth
        limit: usize,
    },

    /// Input larger than the configured limit.
    #[error("input too large: {size} bytes (limit {limit})")]
    InputTooLarge {
        /// Input size in bytes
        size: usize,
        /// Configured maximum size
        limit: usize,
    },

    /// Decoded string longer than the configured limit.
    #[error("string too long at line {line} (limit {limit} bytes)")]
    StringTooLong {
        /// 1-based line where the string starts
        line: usize,
        /// Configured maximum length
        limit: usize,
    },

    /// Object with more members than the configured limit.
    #[error("too many object fields at line {line} (limit {limit})")]
    TooManyFields {
        /// 1-based line of the member that crossed the limit
        line: usize,
        /// Configured maximum field count
        limit: usize,
    },

    /// Array with more elements than the configured limit.
    #[error("array too long at line {line} (limit {limit})")]
    ArrayTooLong {
        /// 1-based line of the element that crossed the limit
        line: usize,
        /// Configured maximum element count
        limit: usize,
    },

    /// Lookup of a key that the object does not contain.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Accessor used on the wrong kind of value.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind the accessor works on
        expected: &'static str,
        /// Kind of the value it was called on
        found: &'static str,
    },
}

impl Error {
    /// Builds a syntax error.
    pub fn syntax(line: usize, context: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            context: context.into(),
        }
    }

    /// Line the error points at, for errors tied to an input position.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. }
            | Error::NestingTooDeep { line, .. }
            | Error::StringTooLong { line, .. }
            | Error::TooManyFields { line, .. }
            | Error::ArrayTooLong { line, .. } => Some(*line),
            Error::InputTooLarge { .. } | Error::KeyNotFound(_) | Error::TypeMismatch { .. } => {
                None
            }
        }
    }

    /// Returns true for malformed-input errors.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }

    /// Returns true for errors caused by a configured [`Limits`] bound.
    ///
    /// [`Limits`]: crate::json::Limits
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            Error::NestingTooDeep { .. }
                | Error::InputTooLarge { .. }
                | Error::StringTooLong { .. }
                | Error::TooManyFields { .. }
                | Error::ArrayTooLong { .. }
        )
    }
}

/// Result type for parsing and value access.
pub type JsonResult<T> = Result<T, Error>;
