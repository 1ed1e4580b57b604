//! # formula_core - Engineering Formulas with Provenance
//!
//! `formula_core` models numbered formulas and checks from technical
//! standards (Eurocodes) as values that remember where they came from. A
//! formula behaves like the number it computes, yet it can still tell you its
//! label, its source document, the inputs it was built from and how to write
//! it down in LaTeX.
//!
//! ## Design Philosophy
//!
//! - **Immutable**: Inputs are fixed at construction, results computed once
//! - **Guarded**: Invalid inputs are rejected before anything is evaluated
//! - **Traceable**: Formulas can be inputs to formulas, the chain is kept
//! - **JSON-First**: Renderings, provenance trees and errors serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use formula_core::clauses::en_1993_1_1::{
//!     Form6Dot5UnityCheckTensileStrength, Form6Dot6DesignPlasticResistance,
//! };
//! use formula_core::{Clause, ComparisonFormula};
//!
//! let n_pl_rd = Form6Dot6DesignPlasticResistance::new(1000.0, 355.0, 1.0)?;
//! assert_eq!(n_pl_rd.latex().short(), "N_{pl,Rd} = 355000.000 N");
//!
//! let check = Form6Dot5UnityCheckTensileStrength::new(200_000.0, n_pl_rd)?;
//! assert!(check.is_ok());
//! # Ok::<(), formula_core::FormulaError>(())
//! ```
//!
//! ## Modules
//!
//! - [`formula`] - The `Clause`, `Formula` and `ComparisonFormula` traits
//! - [`clauses`] - Shipped Eurocode clauses
//! - [`latex`] - LaTeX snapshot and symbol substitution
//! - [`validation`] - Input guards
//! - [`catalog`] - Registry of all clauses and the markdown reference
//! - [`provenance`] - Audit trail of composed formulas
//! - [`settings`] - Rendering preferences
//! - [`units`] - Unit symbols used in rendering
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod clauses;
pub mod errors;
pub mod formula;
pub mod latex;
pub mod provenance;
pub mod settings;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use errors::{FormulaError, FormulaResult};
pub use formula::{Clause, ClauseMetadata, ComparisonFormula, Formula, NamedInput, Operand, SourceDocument, Variable};
pub use latex::{ComparisonOperator, LatexFormula};
pub use provenance::{trace, ProvenanceNode};
pub use settings::RenderSettings;
pub use units::Unit;
