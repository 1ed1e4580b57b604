//! # Formula Core
//!
//! The traits every clause implements, and the glue that renders them.
//!
//! A clause is a plain struct: private input fields, a result computed once in
//! its constructor, and accessors. Construction runs the validation guards
//! first and either returns a fully evaluated value or an error; there is no
//! partially built state.
//!
//! ## Traits
//!
//! - [`Clause`] - metadata, named inputs and LaTeX rendering (shared)
//! - [`Formula`] - a clause that evaluates to a number
//! - [`ComparisonFormula`] - a clause that evaluates to pass/fail
//!
//! ## Inputs and provenance
//!
//! Each input is an [`Operand`]: a plain number, another formula, or a check
//! (entering the calculation as its unity check). Clause inputs are held
//! behind an [`Arc`], so one upstream result can feed any number of
//! downstream clauses. Inputs must exist before they are passed in, which
//! keeps the provenance graph acyclic.
//!
//! ## Numbers in, numbers out
//!
//! [`impl_formula_numeric!`](crate::impl_formula_numeric) gives a formula type
//! the arithmetic and comparison operators of `f64`. Arithmetic always returns
//! a plain `f64`: provenance is only recorded by explicit construction.
//!
//! ```rust
//! use formula_core::clauses::en_1993_1_1::Form6Dot6DesignPlasticResistance;
//! use formula_core::formula::{Clause, Formula};
//!
//! let n_pl_rd = Form6Dot6DesignPlasticResistance::new(1000.0, 355.0, 1.0).unwrap();
//!
//! assert_eq!(n_pl_rd.value(), 355_000.0);
//! assert_eq!(n_pl_rd.label(), "6.6");
//! assert!(n_pl_rd > 300_000.0);
//!
//! let doubled: f64 = &n_pl_rd * 2.0;
//! assert_eq!(doubled, 710_000.0);
//! ```
//!
//! Fields are private, so a constructed formula cannot be changed:
//!
//! ```compile_fail
//! use formula_core::clauses::en_1993_1_1::Form6Dot6DesignPlasticResistance;
//!
//! let mut n_pl_rd = Form6Dot6DesignPlasticResistance::new(1000.0, 355.0, 1.0).unwrap();
//! n_pl_rd.value = 0.0;
//! ```

pub mod metadata;

use std::fmt;
use std::sync::Arc;

use crate::latex::{
    format_value, substitute_values, ComparisonOperator, LatexFormula, SymbolValue, CHECK_SYMBOL, DEFAULT_PRECISION,
    NOT_OK, OK,
};

pub use metadata::{ClauseMetadata, SourceDocument, Variable};

// ============================================================================
// Operands
// ============================================================================

/// A named input: a raw number, or the result of another formula or check.
#[derive(Debug, Clone)]
pub enum Operand {
    /// Plain number supplied by the caller
    Value(f64),
    /// Result of another formula, shared with whoever else holds it
    Formula(Arc<dyn Formula>),
    /// A check, valued as its unity check `lhs / rhs`
    Check(Arc<dyn ComparisonFormula>),
}

impl Operand {
    /// Wrap an already shared formula
    pub fn shared(formula: Arc<dyn Formula>) -> Self {
        Operand::Formula(formula)
    }

    /// Wrap an already shared check
    pub fn shared_check(check: Arc<dyn ComparisonFormula>) -> Self {
        Operand::Check(check)
    }

    /// Numeric value of the input
    pub fn value(&self) -> f64 {
        match self {
            Operand::Value(value) => *value,
            Operand::Formula(formula) => formula.value(),
            Operand::Check(check) => check.unity_check(),
        }
    }

    /// The upstream formula, if this input has one
    pub fn as_formula(&self) -> Option<&dyn Formula> {
        match self {
            Operand::Formula(formula) => Some(formula.as_ref()),
            Operand::Value(_) | Operand::Check(_) => None,
        }
    }

    /// The upstream check, if this input is one
    pub fn as_check(&self) -> Option<&dyn ComparisonFormula> {
        match self {
            Operand::Check(check) => Some(check.as_ref()),
            Operand::Value(_) | Operand::Formula(_) => None,
        }
    }

    /// Label of the upstream clause, `None` for plain numbers
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Operand::Value(_) => None,
            Operand::Formula(formula) => Some(formula.label()),
            Operand::Check(check) => Some(check.label()),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Value(value)
    }
}

impl<F: Formula + 'static> From<F> for Operand {
    fn from(formula: F) -> Self {
        Operand::Formula(Arc::new(formula))
    }
}

impl<F: Formula + 'static> From<Arc<F>> for Operand {
    fn from(formula: Arc<F>) -> Self {
        Operand::Formula(formula)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

/// An input together with its name, as returned by [`Clause::inputs`].
#[derive(Debug, Clone, Copy)]
pub struct NamedInput<'a> {
    pub name: &'static str,
    pub operand: &'a Operand,
}

impl<'a> NamedInput<'a> {
    pub fn new(name: &'static str, operand: &'a Operand) -> Self {
        Self { name, operand }
    }
}

// ============================================================================
// Traits
// ============================================================================

/// One numbered formula or check from a technical standard.
pub trait Clause: fmt::Debug + Send + Sync {
    /// Static description of the clause
    fn metadata(&self) -> &'static ClauseMetadata;

    /// Named inputs exactly as supplied at construction, in declaration order
    fn inputs(&self) -> Vec<NamedInput<'_>>;

    /// Render with `precision` decimals
    fn latex_with_precision(&self, precision: usize) -> LatexFormula;

    /// Render with [`DEFAULT_PRECISION`] decimals
    fn latex(&self) -> LatexFormula {
        self.latex_with_precision(DEFAULT_PRECISION)
    }

    /// Formula number in the source document
    fn label(&self) -> &'static str {
        self.metadata().label
    }

    /// Originating standard
    fn source_document(&self) -> SourceDocument {
        self.metadata().source_document
    }

    /// Look up one input by name
    fn input(&self, name: &str) -> Option<&Operand> {
        self.inputs()
            .into_iter()
            .find(|input| input.name == name)
            .map(|input| input.operand)
    }
}

/// A clause whose result is a number.
pub trait Formula: Clause {
    /// The number this formula is
    fn value(&self) -> f64;
}

/// A clause whose result is the comparison of two numbers.
pub trait ComparisonFormula: Clause {
    /// Left-hand side of the comparison
    fn lhs(&self) -> f64;

    /// Right-hand side of the comparison
    fn rhs(&self) -> f64;

    /// Relational operator
    fn operator(&self) -> ComparisonOperator {
        self.metadata().operator
    }

    /// Outcome of the check
    fn is_ok(&self) -> bool {
        self.operator().evaluate(self.lhs(), self.rhs())
    }

    /// Utilization `lhs / rhs`
    fn unity_check(&self) -> f64 {
        self.lhs() / self.rhs()
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Values of every declared variable, taken from the clause's inputs.
///
/// A variable without a matching input is skipped and stays unresolved in
/// the rendered equation.
pub fn symbol_values<C: Clause + ?Sized>(clause: &C) -> Vec<SymbolValue<'static>> {
    let metadata = clause.metadata();
    let inputs = clause.inputs();

    metadata
        .variables
        .iter()
        .filter_map(|variable| {
            let input = inputs.iter().find(|input| input.name == variable.name);
            if input.is_none() {
                log::warn!(
                    "clause {} ({}): no input named '{}', symbol {} left unresolved",
                    metadata.label,
                    metadata.source_document,
                    variable.name,
                    variable.symbol
                );
            }
            input.map(|input| SymbolValue::new(variable.symbol, input.operand.value(), variable.unit))
        })
        .collect()
}

/// Render a numeric formula: `return_symbol = equation = numbers = result unit`.
pub fn render_formula<F: Formula + ?Sized>(formula: &F, precision: usize) -> LatexFormula {
    let metadata = formula.metadata();
    log::trace!("rendering formula {} ({})", metadata.label, metadata.source_document);

    let values = symbol_values(formula);
    LatexFormula {
        return_symbol: metadata.return_symbol.to_string(),
        equation: metadata.equation.to_string(),
        numeric_equation: substitute_values(metadata.equation, &values, precision, false),
        numeric_equation_with_units: substitute_values(metadata.equation, &values, precision, true),
        result: format_value(formula.value(), precision),
        comparison_operator_label: ComparisonOperator::Equal.label().to_string(),
        unit: metadata.unit.symbol().to_string(),
    }
}

/// Render a check: `CHECK \to comparison \to numbers \to lhs op rhs \to OK`.
pub fn render_comparison<C: ComparisonFormula + ?Sized>(check: &C, precision: usize) -> LatexFormula {
    let metadata = check.metadata();
    log::trace!("rendering check {} ({})", metadata.label, metadata.source_document);

    let values = symbol_values(check);
    let intermediate = format!(
        r" \to {} {} {}",
        format_value(check.lhs(), precision),
        check.operator().label(),
        format_value(check.rhs(), precision)
    );

    LatexFormula {
        return_symbol: CHECK_SYMBOL.to_string(),
        equation: metadata.equation.to_string(),
        numeric_equation: substitute_values(metadata.equation, &values, precision, false) + &intermediate,
        numeric_equation_with_units: substitute_values(metadata.equation, &values, precision, true) + &intermediate,
        result: if check.is_ok() { OK } else { NOT_OK }.to_string(),
        comparison_operator_label: r"\to".to_string(),
        unit: String::new(),
    }
}

// ============================================================================
// Numeric Behavior (macros to reduce boilerplate)
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __formula_binary_ops {
    ($type:ty, $($trait:ident $method:ident),*) => {
        $(
            impl ::std::ops::$trait<f64> for $type {
                type Output = f64;
                fn $method(self, rhs: f64) -> f64 {
                    ::std::ops::$trait::$method($crate::formula::Formula::value(&self), rhs)
                }
            }

            impl ::std::ops::$trait<f64> for &$type {
                type Output = f64;
                fn $method(self, rhs: f64) -> f64 {
                    ::std::ops::$trait::$method($crate::formula::Formula::value(self), rhs)
                }
            }

            impl ::std::ops::$trait<$type> for f64 {
                type Output = f64;
                fn $method(self, rhs: $type) -> f64 {
                    ::std::ops::$trait::$method(self, $crate::formula::Formula::value(&rhs))
                }
            }

            impl ::std::ops::$trait<&$type> for f64 {
                type Output = f64;
                fn $method(self, rhs: &$type) -> f64 {
                    ::std::ops::$trait::$method(self, $crate::formula::Formula::value(rhs))
                }
            }

            impl ::std::ops::$trait for $type {
                type Output = f64;
                fn $method(self, rhs: $type) -> f64 {
                    ::std::ops::$trait::$method(
                        $crate::formula::Formula::value(&self),
                        $crate::formula::Formula::value(&rhs),
                    )
                }
            }

            impl ::std::ops::$trait<&$type> for &$type {
                type Output = f64;
                fn $method(self, rhs: &$type) -> f64 {
                    ::std::ops::$trait::$method(
                        $crate::formula::Formula::value(self),
                        $crate::formula::Formula::value(rhs),
                    )
                }
            }
        )*
    };
}

/// Make a [`Formula`] type usable wherever an `f64` is.
///
/// Implements arithmetic (`+ - * /`, unary `-`) with `f64` on either side and
/// between two values of the type, comparisons with `f64`, conversion into
/// `f64`, `Sum` into `f64` and `Display`. Every operation yields a plain
/// `f64`.
#[macro_export]
macro_rules! impl_formula_numeric {
    ($type:ty) => {
        $crate::__formula_binary_ops!($type, Add add, Sub sub, Mul mul, Div div);

        impl ::std::ops::Neg for $type {
            type Output = f64;
            fn neg(self) -> f64 {
                -$crate::formula::Formula::value(&self)
            }
        }

        impl ::std::ops::Neg for &$type {
            type Output = f64;
            fn neg(self) -> f64 {
                -$crate::formula::Formula::value(self)
            }
        }

        impl ::std::convert::From<$type> for f64 {
            fn from(formula: $type) -> f64 {
                $crate::formula::Formula::value(&formula)
            }
        }

        impl ::std::convert::From<&$type> for f64 {
            fn from(formula: &$type) -> f64 {
                $crate::formula::Formula::value(formula)
            }
        }

        impl ::std::cmp::PartialEq for $type {
            fn eq(&self, other: &Self) -> bool {
                $crate::formula::Formula::value(self) == $crate::formula::Formula::value(other)
            }
        }

        impl ::std::cmp::PartialEq<f64> for $type {
            fn eq(&self, other: &f64) -> bool {
                $crate::formula::Formula::value(self) == *other
            }
        }

        impl ::std::cmp::PartialEq<$type> for f64 {
            fn eq(&self, other: &$type) -> bool {
                *self == $crate::formula::Formula::value(other)
            }
        }

        impl ::std::cmp::PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                $crate::formula::Formula::value(self).partial_cmp(&$crate::formula::Formula::value(other))
            }
        }

        impl ::std::cmp::PartialOrd<f64> for $type {
            fn partial_cmp(&self, other: &f64) -> ::std::option::Option<::std::cmp::Ordering> {
                $crate::formula::Formula::value(self).partial_cmp(other)
            }
        }

        impl ::std::cmp::PartialOrd<$type> for f64 {
            fn partial_cmp(&self, other: &$type) -> ::std::option::Option<::std::cmp::Ordering> {
                self.partial_cmp(&$crate::formula::Formula::value(other))
            }
        }

        impl ::std::iter::Sum<$type> for f64 {
            fn sum<I: ::std::iter::Iterator<Item = $type>>(iter: I) -> f64 {
                iter.map(|formula| $crate::formula::Formula::value(&formula)).sum()
            }
        }

        impl<'a> ::std::iter::Sum<&'a $type> for f64 {
            fn sum<I: ::std::iter::Iterator<Item = &'a $type>>(iter: I) -> f64 {
                iter.map(|formula| $crate::formula::Formula::value(formula)).sum()
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&$crate::formula::Formula::value(self), f)
            }
        }
    };
}

/// Make a [`ComparisonFormula`] type usable as a `bool` and as its unity check.
///
/// Implements conversion into `bool`, comparison with `bool`, `!` and
/// `Display` (`true` / `false`). As a number the check is its unity check:
/// conversion into `f64`, comparison and ordering against `f64`, and
/// conversion into [`Operand`] so it can feed another clause.
#[macro_export]
macro_rules! impl_check_boolean {
    ($type:ty) => {
        impl ::std::convert::From<$type> for bool {
            fn from(check: $type) -> bool {
                $crate::formula::ComparisonFormula::is_ok(&check)
            }
        }

        impl ::std::convert::From<&$type> for bool {
            fn from(check: &$type) -> bool {
                $crate::formula::ComparisonFormula::is_ok(check)
            }
        }

        impl ::std::cmp::PartialEq<bool> for $type {
            fn eq(&self, other: &bool) -> bool {
                $crate::formula::ComparisonFormula::is_ok(self) == *other
            }
        }

        impl ::std::cmp::PartialEq<$type> for bool {
            fn eq(&self, other: &$type) -> bool {
                *self == $crate::formula::ComparisonFormula::is_ok(other)
            }
        }

        impl ::std::ops::Not for $type {
            type Output = bool;
            fn not(self) -> bool {
                !$crate::formula::ComparisonFormula::is_ok(&self)
            }
        }

        impl ::std::ops::Not for &$type {
            type Output = bool;
            fn not(self) -> bool {
                !$crate::formula::ComparisonFormula::is_ok(self)
            }
        }

        impl ::std::convert::From<$type> for f64 {
            fn from(check: $type) -> f64 {
                $crate::formula::ComparisonFormula::unity_check(&check)
            }
        }

        impl ::std::convert::From<&$type> for f64 {
            fn from(check: &$type) -> f64 {
                $crate::formula::ComparisonFormula::unity_check(check)
            }
        }

        impl ::std::cmp::PartialEq<f64> for $type {
            fn eq(&self, other: &f64) -> bool {
                $crate::formula::ComparisonFormula::unity_check(self) == *other
            }
        }

        impl ::std::cmp::PartialOrd<f64> for $type {
            fn partial_cmp(&self, other: &f64) -> ::std::option::Option<::std::cmp::Ordering> {
                $crate::formula::ComparisonFormula::unity_check(self).partial_cmp(other)
            }
        }

        impl ::std::convert::From<$type> for $crate::formula::Operand {
            fn from(check: $type) -> $crate::formula::Operand {
                $crate::formula::Operand::Check(::std::sync::Arc::new(check))
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&$crate::formula::ComparisonFormula::is_ok(self), f)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clauses::en_1993_1_1::{Form6Dot5UnityCheckTensileStrength, Form6Dot6DesignPlasticResistance};

    #[test]
    fn test_operand_from_value_and_formula() {
        let plain = Operand::from(2.5);
        assert_eq!(plain.value(), 2.5);
        assert!(plain.as_formula().is_none());
        assert_eq!(plain.to_string(), "2.5");

        let n_pl_rd = Form6Dot6DesignPlasticResistance::new(100.0, 355.0, 1.0).unwrap();
        let derived = Operand::from(n_pl_rd);
        assert_eq!(derived.value(), 35_500.0);
        assert_eq!(derived.as_formula().map(|f| f.label()), Some("6.6"));
    }

    #[test]
    fn test_input_lookup_keeps_operand() {
        let n_pl_rd = Arc::new(Form6Dot6DesignPlasticResistance::new(100.0, 355.0, 1.0).unwrap());
        let check = Form6Dot5UnityCheckTensileStrength::new(10_000.0, Arc::clone(&n_pl_rd)).unwrap();

        let names: Vec<&str> = check.inputs().iter().map(|input| input.name).collect();
        assert_eq!(names, vec!["n_ed", "n_t_rd"]);
        assert_eq!(check.input("n_ed").map(Operand::value), Some(10_000.0));
        assert!(check.input("n_t_rd").and_then(Operand::as_formula).is_some());
        assert!(check.input("gamma_m0").is_none());
    }

    #[test]
    fn test_check_defaults() {
        let check = Form6Dot5UnityCheckTensileStrength::new(50.0, 100.0).unwrap();
        assert_eq!(check.operator(), ComparisonOperator::LessOrEqual);
        assert_eq!(check.rhs(), 1.0);
        assert_eq!(check.to_string(), "true");
    }

    #[test]
    fn test_check_as_operand() {
        let check = Form6Dot5UnityCheckTensileStrength::new(50.0, 200.0).unwrap();
        assert_eq!(f64::from(&check), 0.25);
        assert!(check < 1.0);
        assert_eq!(check, 0.25);

        let operand = Operand::from(check);
        assert_eq!(operand.value(), 0.25);
        assert_eq!(operand.label(), Some("6.5"));
        assert!(operand.as_formula().is_none());
        assert_eq!(operand.as_check().map(|check| check.is_ok()), Some(true));

        let shared: Arc<dyn ComparisonFormula> =
            Arc::new(Form6Dot5UnityCheckTensileStrength::new(300.0, 200.0).unwrap());
        let operand = Operand::shared_check(Arc::clone(&shared));
        assert_eq!(operand.value(), 1.5);
        assert_eq!(operand.as_check().map(|check| check.is_ok()), Some(false));
        assert_eq!(Operand::from(2.0).label(), None);
    }

    #[test]
    fn test_symbol_values_follow_declaration_order() {
        let n_pl_rd = Form6Dot6DesignPlasticResistance::new(100.0, 355.0, 1.0).unwrap();
        let symbols: Vec<&str> = symbol_values(&n_pl_rd).iter().map(|value| value.symbol).collect();
        assert_eq!(symbols, vec!["A", "f_{y}", r"\gamma_{M0}"]);
    }
}
