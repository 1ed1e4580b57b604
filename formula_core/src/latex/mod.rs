//! # LaTeX Rendering
//!
//! Everything needed to turn a formula into documentation text.
//!
//! ## Modules
//!
//! - [`formula`] - The [`LatexFormula`] snapshot and its derived views
//! - [`substitution`] - Token replacement for symbolic templates
//!
//! All numbers are rendered with a fixed number of decimals,
//! [`DEFAULT_PRECISION`] unless the caller asks otherwise.

pub mod formula;
pub mod substitution;

pub use formula::{ComparisonOperator, LatexFormula, CHECK_SYMBOL, NOT_OK, OK};
pub use substitution::{replace_symbols, substitute_values, SymbolValue};

/// Number of decimals used when no precision is given
pub const DEFAULT_PRECISION: usize = 3;

/// Render a value rounded to exactly `precision` decimals.
///
/// Negative values that round to zero are rendered without the sign.
///
/// ```rust
/// use formula_core::latex::format_value;
///
/// assert_eq!(format_value(0.06, 3), "0.060");
/// assert_eq!(format_value(2.0 / 3.0, 2), "0.67");
/// assert_eq!(format_value(-0.0001, 3), "0.000");
/// ```
pub fn format_value(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_pads_decimals() {
        assert_eq!(format_value(50.0, 3), "50.000");
        assert_eq!(format_value(355_000.0, 3), "355000.000");
        assert_eq!(format_value(1.23456, 0), "1");
    }

    #[test]
    fn test_format_value_keeps_real_negatives() {
        assert_eq!(format_value(-1.5, 3), "-1.500");
        assert_eq!(format_value(-0.0, 3), "0.000");
    }
}
