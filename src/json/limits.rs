//! Resource limits for JSON parsing.
//!
//! The parser is recursive, so nesting depth is always bounded. The other
//! limits protect callers that parse untrusted input from oversized documents.

/// Largest integer magnitude a double represents exactly (2^53 - 1).
///
/// Integral numbers up to this magnitude serialize without a decimal point.
pub const MAX_SAFE_INT: i64 = (1i64 << 53) - 1;

/// Minimum safe integer value (-(2^53 - 1)).
pub const MIN_SAFE_INT: i64 = -MAX_SAFE_INT;

/// Parser limits.
///
/// Fields are public so a preset can be tweaked:
///
/// ```
/// use picojson::json::Limits;
///
/// let mut limits = Limits::standard();
/// limits.max_nesting_depth = 16;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes
    pub max_input_size: usize,
    /// Maximum nesting depth for arrays/objects
    pub max_nesting_depth: usize,
    /// Maximum decoded string length in bytes
    pub max_string_length: usize,
    /// Maximum number of fields in an object
    pub max_object_fields: usize,
    /// Maximum number of elements in an array
    pub max_array_length: usize,
    /// Maximum number of characters in a syntax error's context
    pub max_context_chars: usize,
}

impl Limits {
    /// Default limits: only nesting depth and error context are bounded.
    pub const fn standard() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_nesting_depth: 128,
            max_string_length: usize::MAX,
            max_object_fields: usize::MAX,
            max_array_length: usize::MAX,
            max_context_chars: 256,
        }
    }

    /// Tight limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024,  // 1 MiB
            max_nesting_depth: 32,
            max_string_length: 64 * 1024, // 64 KiB
            max_object_fields: 1024,
            max_array_length: 10_000,
            max_context_chars: 64,
        }
    }

    /// Check if an integral double is within exact integer bounds.
    pub fn is_safe_integer(value: f64) -> bool {
        value.fract() == 0.0 && value.abs() <= MAX_SAFE_INT as f64
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}
