//! # Clauses
//!
//! Numbered formulas and checks from the Eurocodes. Each clause follows the
//! pattern:
//!
//! - `Form<N>Dot<M><Name>::METADATA` - static description (label, symbols, units)
//! - `Form<N>Dot<M><Name>::new(inputs..) -> FormulaResult<Self>` - guarded construction
//! - accessors for every input, returning the [`Operand`](crate::formula::Operand)
//!   as it was supplied
//!
//! Formulas implement [`Formula`](crate::formula::Formula); checks implement
//! [`ComparisonFormula`](crate::formula::ComparisonFormula).
//!
//! ## Available Clauses
//!
//! - [`en_1992_1_1`] - concrete material design values
//! - [`en_1993_1_1`] - steel cross-section resistances and unity checks

pub mod en_1992_1_1;
pub mod en_1993_1_1;

pub use en_1992_1_1::{Form3Dot15DesignCompressiveStrength, Form3Dot16DesignTensileStrength};
pub use en_1993_1_1::{
    Form6Dot10NcRdClass1And2And3, Form6Dot12UnityCheckBendingMoment, Form6Dot13MCRdClass1And2,
    Form6Dot5UnityCheckTensileStrength, Form6Dot6DesignPlasticResistance, Form6Dot9UnityCheckCompressiveStrength,
};
