//! # LaTeX Formula Snapshot
//!
//! [`LatexFormula`] is what a formula hands to report generators: the
//! symbolic equation, the same equation with numbers filled in, and the
//! result. It is a plain value; it does not refer back to the formula that
//! produced it.
//!
//! ```rust
//! use formula_core::latex::LatexFormula;
//!
//! let latex = LatexFormula {
//!     return_symbol: "R".to_string(),
//!     equation: r"\frac{x}{y}".to_string(),
//!     numeric_equation: r"\frac{12.000}{200.000}".to_string(),
//!     numeric_equation_with_units: r"\frac{12.000 mm}{200.000 mm}".to_string(),
//!     result: "0.060".to_string(),
//!     comparison_operator_label: "=".to_string(),
//!     unit: "-".to_string(),
//! };
//!
//! assert_eq!(latex.short(), "R = 0.060 -");
//! assert_eq!(
//!     latex.complete(),
//!     r"R = \frac{x}{y} = \frac{12.000}{200.000} = 0.060 -"
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Return symbol used for pass/fail checks
pub const CHECK_SYMBOL: &str = r"\text{CHECK}";

/// Result label of a satisfied check
pub const OK: &str = r"\text{OK}";

/// Result label of a failed check
pub const NOT_OK: &str = r"\text{Not OK}";

/// Rendered equation of a single formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatexFormula {
    /// Symbol of the computed quantity (e.g. `N_{pl,Rd}`)
    pub return_symbol: String,
    /// Symbolic right-hand side
    pub equation: String,
    /// Right-hand side with every symbol replaced by its value
    pub numeric_equation: String,
    /// Same as `numeric_equation`, values carrying their units
    pub numeric_equation_with_units: String,
    /// Final value, or the OK / Not OK label of a check
    pub result: String,
    /// Operator between the parts (`=` for formulas, `\to` for checks)
    pub comparison_operator_label: String,
    /// Unit of the result; `-` when dimensionless, empty for checks
    pub unit: String,
}

impl LatexFormula {
    /// `{return_symbol} {op} {result} {unit}`
    pub fn short(&self) -> String {
        self.join(&[self.return_symbol.as_str(), self.result.as_str()])
    }

    /// `{return_symbol} {op} {equation} {op} {numeric_equation} {op} {result} {unit}`
    pub fn complete(&self) -> String {
        self.join(&[
            self.return_symbol.as_str(),
            self.equation.as_str(),
            self.numeric_equation.as_str(),
            self.result.as_str(),
        ])
    }

    /// Like [`complete`](Self::complete), with unit-suffixed input values
    pub fn complete_with_units(&self) -> String {
        self.join(&[
            self.return_symbol.as_str(),
            self.equation.as_str(),
            self.numeric_equation_with_units.as_str(),
            self.result.as_str(),
        ])
    }

    fn join(&self, parts: &[&str]) -> String {
        let separator = format!(" {} ", self.comparison_operator_label);
        let body = parts.join(separator.as_str());
        if self.unit.is_empty() {
            body
        } else {
            format!("{} {}", body, self.unit)
        }
    }
}

impl fmt::Display for LatexFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.complete())
    }
}

/// Relational operator of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl ComparisonOperator {
    /// Apply the operator to `lhs` and `rhs`
    pub fn evaluate(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            ComparisonOperator::Equal => lhs == rhs,
            ComparisonOperator::NotEqual => lhs != rhs,
            ComparisonOperator::Less => lhs < rhs,
            ComparisonOperator::LessOrEqual => lhs <= rhs,
            ComparisonOperator::Greater => lhs > rhs,
            ComparisonOperator::GreaterOrEqual => lhs >= rhs,
        }
    }

    /// LaTeX for the operator
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => r"\neq",
            ComparisonOperator::Less => "<",
            ComparisonOperator::LessOrEqual => r"\leq",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::GreaterOrEqual => r"\geq",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
