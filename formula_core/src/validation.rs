//! # Validation Guards
//!
//! Sign checks run by every clause before any arithmetic, so a malformed
//! input never turns into a NaN or infinite result.
//!
//! Arguments are `(name, value)` pairs; the first failing pair determines the
//! error. NaN fails both guards.
//!
//! ```rust
//! use formula_core::validation::{raise_if_less_or_equal_to_zero, raise_if_negative};
//!
//! let (n_ed, n_t_rd) = (120.0, 0.0);
//! assert!(raise_if_negative(&[("n_ed", n_ed)]).is_ok());
//! let err = raise_if_less_or_equal_to_zero(&[("n_t_rd", n_t_rd)]).unwrap_err();
//! assert_eq!(err.name(), "n_t_rd");
//! ```

use crate::errors::{FormulaError, FormulaResult};

/// Fail with [`FormulaError::NegativeValue`] if any value is below zero.
///
/// Zero is accepted.
pub fn raise_if_negative(values: &[(&str, f64)]) -> FormulaResult<()> {
    match values.iter().find(|(_, value)| value.is_nan() || *value < 0.0) {
        Some((name, value)) => Err(FormulaError::negative_value(*name, *value)),
        None => Ok(()),
    }
}

/// Fail with [`FormulaError::LessOrEqualToZero`] if any value is zero or below.
///
/// Used for denominators and root/logarithm operands.
pub fn raise_if_less_or_equal_to_zero(values: &[(&str, f64)]) -> FormulaResult<()> {
    match values.iter().find(|(_, value)| value.is_nan() || *value <= 0.0) {
        Some((name, value)) => Err(FormulaError::less_or_equal_to_zero(*name, *value)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_guard_accepts_zero() {
        assert!(raise_if_negative(&[("a", 0.0), ("b", 12.5)]).is_ok());
    }

    #[test]
    fn test_negative_guard_names_first_offender() {
        let err = raise_if_negative(&[("a", 1.0), ("b", -2.0), ("c", -3.0)]).unwrap_err();
        assert_eq!(err, FormulaError::negative_value("b", -2.0));
    }

    #[test]
    fn test_positive_guard_rejects_zero_and_negative() {
        let zero = raise_if_less_or_equal_to_zero(&[("gamma", 0.0)]).unwrap_err();
        assert_eq!(zero.error_code(), "LESS_OR_EQUAL_TO_ZERO");

        let negative = raise_if_less_or_equal_to_zero(&[("gamma", -1.0)]).unwrap_err();
        assert_eq!(negative.value(), -1.0);
    }

    #[test]
    fn test_guards_reject_nan() {
        assert!(raise_if_negative(&[("x", f64::NAN)]).is_err());
        assert!(raise_if_less_or_equal_to_zero(&[("y", f64::NAN)]).is_err());
    }

    #[test]
    fn test_empty_arguments_pass() {
        assert!(raise_if_negative(&[]).is_ok());
        assert!(raise_if_less_or_equal_to_zero(&[]).is_ok());
    }
}
