//! # Error Types
//!
//! Input validation errors raised while constructing a formula. There are
//! exactly two kinds, and both name the offending parameter and its value so
//! a caller can report precisely which argument violated which constraint.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::errors::{FormulaError, FormulaResult};
//!
//! fn check_span(span_mm: f64) -> FormulaResult<()> {
//!     if span_mm <= 0.0 {
//!         return Err(FormulaError::less_or_equal_to_zero("span_mm", span_mm));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_span(0.0).unwrap_err();
//! assert_eq!(err.name(), "span_mm");
//! assert_eq!(err.error_code(), "LESS_OR_EQUAL_TO_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for formula construction
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Structured error raised by the validation guards.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FormulaError {
    /// A value that may be zero was negative (or NaN)
    #[error("Invalid value for '{name}': {value} - value must not be negative")]
    NegativeValue { name: String, value: f64 },

    /// A denominator or root operand was zero, negative (or NaN)
    #[error("Invalid value for '{name}': {value} - value must be strictly positive")]
    LessOrEqualToZero { name: String, value: f64 },
}

impl FormulaError {
    /// Create a NegativeValue error
    pub fn negative_value(name: impl Into<String>, value: f64) -> Self {
        FormulaError::NegativeValue {
            name: name.into(),
            value,
        }
    }

    /// Create a LessOrEqualToZero error
    pub fn less_or_equal_to_zero(name: impl Into<String>, value: f64) -> Self {
        FormulaError::LessOrEqualToZero {
            name: name.into(),
            value,
        }
    }

    /// Name of the parameter that failed validation
    pub fn name(&self) -> &str {
        match self {
            FormulaError::NegativeValue { name, .. } | FormulaError::LessOrEqualToZero { name, .. } => name,
        }
    }

    /// The rejected value
    pub fn value(&self) -> f64 {
        match self {
            FormulaError::NegativeValue { value, .. } | FormulaError::LessOrEqualToZero { value, .. } => *value,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FormulaError::NegativeValue { .. } => "NEGATIVE_VALUE",
            FormulaError::LessOrEqualToZero { .. } => "LESS_OR_EQUAL_TO_ZERO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FormulaError::negative_value("f_ck", -5.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"NegativeValue\""));
        let roundtrip: FormulaError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FormulaError::negative_value("x", -1.0).error_code(), "NEGATIVE_VALUE");
        assert_eq!(
            FormulaError::less_or_equal_to_zero("y", 0.0).error_code(),
            "LESS_OR_EQUAL_TO_ZERO"
        );
    }

    #[test]
    fn test_error_message_names_parameter() {
        let error = FormulaError::less_or_equal_to_zero("gamma_m0", 0.0);
        assert_eq!(error.name(), "gamma_m0");
        assert_eq!(error.value(), 0.0);
        assert_eq!(
            error.to_string(),
            "Invalid value for 'gamma_m0': 0 - value must be strictly positive"
        );
    }
}
