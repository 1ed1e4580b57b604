//! # Clause Metadata
//!
//! Static description of a clause: where it comes from, what it computes and
//! how it is written. Every clause type exposes one `const METADATA`.
//!
//! ```rust
//! use formula_core::formula::metadata::{SourceDocument, EN_1993_1_1_2005};
//!
//! assert_eq!(EN_1993_1_1_2005.citation(), "EN 1993-1-1:2005");
//! assert_eq!(SourceDocument::Other("Company guideline 12").citation(), "Company guideline 12");
//! ```

use std::fmt;

use serde::Serialize;

use crate::latex::ComparisonOperator;
use crate::units::Unit;

// ============================================================================
// Source Documents
// ============================================================================

/// Standard (and edition) a clause is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceDocument {
    /// EN 1992 - Eurocode 2: Design of concrete structures
    Eurocode2 { part: &'static str, year: u16 },
    /// EN 1993 - Eurocode 3: Design of steel structures
    Eurocode3 { part: &'static str, year: u16 },
    /// A document defined outside this crate, cited verbatim
    Other(&'static str),
}

/// EN 1992-1-1:2004, general rules and rules for buildings (concrete)
pub const EN_1992_1_1_2004: SourceDocument = SourceDocument::Eurocode2 { part: "1-1", year: 2004 };

/// EN 1993-1-1:2005, general rules and rules for buildings (steel)
pub const EN_1993_1_1_2005: SourceDocument = SourceDocument::Eurocode3 { part: "1-1", year: 2005 };

impl SourceDocument {
    /// Full citation for reports
    pub fn citation(&self) -> String {
        match self {
            SourceDocument::Eurocode2 { part, year } => format!("EN 1992-{}:{}", part, year),
            SourceDocument::Eurocode3 { part, year } => format!("EN 1993-{}:{}", part, year),
            SourceDocument::Other(name) => name.to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            SourceDocument::Eurocode2 { .. } => "Eurocode 2",
            SourceDocument::Eurocode3 { .. } => "Eurocode 3",
            SourceDocument::Other(name) => name,
        }
    }
}

impl fmt::Display for SourceDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.citation())
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a named input used in a clause's equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variable {
    /// LaTeX token in the equation template (e.g. `f_{ck}`)
    pub symbol: &'static str,
    /// Name of the input it is substituted from (e.g. `f_ck`)
    pub name: &'static str,
    /// Description
    pub description: &'static str,
    /// Unit of the input
    pub unit: Unit,
}

impl Variable {
    pub const fn new(symbol: &'static str, name: &'static str, description: &'static str, unit: Unit) -> Self {
        Self {
            symbol,
            name,
            description,
            unit,
        }
    }
}

// ============================================================================
// Clause Metadata
// ============================================================================

/// Everything needed to render and document a clause.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClauseMetadata {
    /// Formula number in the source document (e.g. "6.6")
    pub label: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what the clause computes or checks
    pub description: &'static str,
    /// Originating standard
    pub source_document: SourceDocument,
    /// LaTeX symbol of the result
    pub return_symbol: &'static str,
    /// LaTeX template of the right-hand side (the full comparison for checks)
    pub equation: &'static str,
    /// Unit of the result
    pub unit: Unit,
    /// `Equal` for formulas, the relational operator for checks
    pub operator: ComparisonOperator,
    /// Inputs that appear in `equation`
    pub variables: &'static [Variable],
}

impl ClauseMetadata {
    /// Whether this clause is a pass/fail check
    pub fn is_check(&self) -> bool {
        self.operator != ComparisonOperator::Equal
    }

    /// Look up a variable by input name
    pub fn variable(&self, name: &str) -> Option<&'static Variable> {
        self.variables.iter().find(|variable| variable.name == name)
    }
}
