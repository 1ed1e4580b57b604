//! # EN 1992-1-1:2004 - Design of Concrete Structures
//!
//! Material design values from chapter 3.
//!
//! ## Notation
//!
//! - `f_ck` = Characteristic cylinder compressive strength at 28 days
//! - `f_ctk,0.05` = Characteristic axial tensile strength (5% fractile)
//! - `α_cc`, `α_ct` = Coefficients for long term effects and load application
//! - `γ_C` = Partial safety factor for concrete
//!
//! ## Example
//!
//! ```rust
//! use formula_core::clauses::en_1992_1_1::Form3Dot15DesignCompressiveStrength;
//! use formula_core::formula::Clause;
//!
//! let f_cd = Form3Dot15DesignCompressiveStrength::new(1.0, 30.0, 1.5).unwrap();
//! assert_eq!(f_cd.latex().short(), "f_{cd} = 20.000 MPa");
//! ```

use crate::errors::FormulaResult;
use crate::formula::metadata::{ClauseMetadata, Variable, EN_1992_1_1_2004};
use crate::formula::{render_formula, Clause, Formula, NamedInput, Operand};
use crate::latex::{ComparisonOperator, LatexFormula};
use crate::units::Unit;
use crate::impl_formula_numeric;
use crate::validation::{raise_if_less_or_equal_to_zero, raise_if_negative};

// =============================================================================
// FORMULA 3.15
// Design value of the concrete compressive strength
// =============================================================================

/// Formula (3.15): design compressive strength
///
/// ```text
/// f_cd = α_cc · f_ck / γ_C
/// ```
#[derive(Debug, Clone)]
pub struct Form3Dot15DesignCompressiveStrength {
    alpha_cc: Operand,
    f_ck: Operand,
    gamma_c: Operand,
    value: f64,
}

impl Form3Dot15DesignCompressiveStrength {
    pub const METADATA: ClauseMetadata = ClauseMetadata {
        label: "3.15",
        name: "Design Compressive Strength",
        description: "Design value of the concrete compressive strength",
        source_document: EN_1992_1_1_2004,
        return_symbol: "f_{cd}",
        equation: r"\frac{\alpha_{cc} \cdot f_{ck}}{\gamma_{C}}",
        unit: Unit::MegaPascal,
        operator: ComparisonOperator::Equal,
        variables: &[
            Variable::new(r"\alpha_{cc}", "alpha_cc", "Coefficient for long term effects", Unit::Dimensionless),
            Variable::new("f_{ck}", "f_ck", "Characteristic compressive strength", Unit::MegaPascal),
            Variable::new(r"\gamma_{C}", "gamma_c", "Partial safety factor for concrete", Unit::Dimensionless),
        ],
    };

    /// # Arguments
    /// * `alpha_cc` - Coefficient for long term effects on compressive strength [-]
    /// * `f_ck` - Characteristic compressive cylinder strength at 28 days [MPa]
    /// * `gamma_c` - Partial safety factor for concrete [-]
    pub fn new(
        alpha_cc: impl Into<Operand>,
        f_ck: impl Into<Operand>,
        gamma_c: impl Into<Operand>,
    ) -> FormulaResult<Self> {
        let (alpha_cc, f_ck, gamma_c) = (alpha_cc.into(), f_ck.into(), gamma_c.into());
        let value = Self::evaluate(alpha_cc.value(), f_ck.value(), gamma_c.value())?;
        Ok(Self {
            alpha_cc,
            f_ck,
            gamma_c,
            value,
        })
    }

    /// Guards and computes f_cd [MPa]
    pub fn evaluate(alpha_cc: f64, f_ck: f64, gamma_c: f64) -> FormulaResult<f64> {
        raise_if_less_or_equal_to_zero(&[("gamma_c", gamma_c)])?;
        raise_if_negative(&[("alpha_cc", alpha_cc), ("f_ck", f_ck)])?;
        Ok(alpha_cc * f_ck / gamma_c)
    }

    pub fn alpha_cc(&self) -> &Operand {
        &self.alpha_cc
    }

    pub fn f_ck(&self) -> &Operand {
        &self.f_ck
    }

    pub fn gamma_c(&self) -> &Operand {
        &self.gamma_c
    }
}

impl Clause for Form3Dot15DesignCompressiveStrength {
    fn metadata(&self) -> &'static ClauseMetadata {
        &Self::METADATA
    }

    fn inputs(&self) -> Vec<NamedInput<'_>> {
        vec![
            NamedInput::new("alpha_cc", &self.alpha_cc),
            NamedInput::new("f_ck", &self.f_ck),
            NamedInput::new("gamma_c", &self.gamma_c),
        ]
    }

    fn latex_with_precision(&self, precision: usize) -> LatexFormula {
        render_formula(self, precision)
    }
}

impl Formula for Form3Dot15DesignCompressiveStrength {
    fn value(&self) -> f64 {
        self.value
    }
}

impl_formula_numeric!(Form3Dot15DesignCompressiveStrength);

// =============================================================================
// FORMULA 3.16
// Design value of the concrete tensile strength
// =============================================================================

/// Formula (3.16): design tensile strength
///
/// ```text
/// f_ctd = α_ct · f_ctk,0.05 / γ_C
/// ```
#[derive(Debug, Clone)]
pub struct Form3Dot16DesignTensileStrength {
    alpha_ct: Operand,
    f_ctk_0_05: Operand,
    gamma_c: Operand,
    value: f64,
}

impl Form3Dot16DesignTensileStrength {
    pub const METADATA: ClauseMetadata = ClauseMetadata {
        label: "3.16",
        name: "Design Tensile Strength",
        description: "Design value of the concrete tensile strength",
        source_document: EN_1992_1_1_2004,
        return_symbol: "f_{ctd}",
        equation: r"\frac{\alpha_{ct} \cdot f_{ctk,0.05}}{\gamma_{C}}",
        unit: Unit::MegaPascal,
        operator: ComparisonOperator::Equal,
        variables: &[
            Variable::new(r"\alpha_{ct}", "alpha_ct", "Coefficient for long term effects", Unit::Dimensionless),
            Variable::new("f_{ctk,0.05}", "f_ctk_0_05", "Characteristic axial tensile strength", Unit::MegaPascal),
            Variable::new(r"\gamma_{C}", "gamma_c", "Partial safety factor for concrete", Unit::Dimensionless),
        ],
    };

    /// # Arguments
    /// * `alpha_ct` - Coefficient for long term effects on tensile strength [-]
    /// * `f_ctk_0_05` - Characteristic axial tensile strength, 5% fractile [MPa]
    /// * `gamma_c` - Partial safety factor for concrete [-]
    pub fn new(
        alpha_ct: impl Into<Operand>,
        f_ctk_0_05: impl Into<Operand>,
        gamma_c: impl Into<Operand>,
    ) -> FormulaResult<Self> {
        let (alpha_ct, f_ctk_0_05, gamma_c) = (alpha_ct.into(), f_ctk_0_05.into(), gamma_c.into());
        let value = Self::evaluate(alpha_ct.value(), f_ctk_0_05.value(), gamma_c.value())?;
        Ok(Self {
            alpha_ct,
            f_ctk_0_05,
            gamma_c,
            value,
        })
    }

    pub fn evaluate(alpha_ct: f64, f_ctk_0_05: f64, gamma_c: f64) -> FormulaResult<f64> {
        raise_if_less_or_equal_to_zero(&[("gamma_c", gamma_c)])?;
        raise_if_negative(&[("alpha_ct", alpha_ct), ("f_ctk_0_05", f_ctk_0_05)])?;
        Ok(alpha_ct * f_ctk_0_05 / gamma_c)
    }

    pub fn alpha_ct(&self) -> &Operand {
        &self.alpha_ct
    }

    pub fn f_ctk_0_05(&self) -> &Operand {
        &self.f_ctk_0_05
    }

    pub fn gamma_c(&self) -> &Operand {
        &self.gamma_c
    }
}

impl Clause for Form3Dot16DesignTensileStrength {
    fn metadata(&self) -> &'static ClauseMetadata {
        &Self::METADATA
    }

    fn inputs(&self) -> Vec<NamedInput<'_>> {
        vec![
            NamedInput::new("alpha_ct", &self.alpha_ct),
            NamedInput::new("f_ctk_0_05", &self.f_ctk_0_05),
            NamedInput::new("gamma_c", &self.gamma_c),
        ]
    }

    fn latex_with_precision(&self, precision: usize) -> LatexFormula {
        render_formula(self, precision)
    }
}

impl Formula for Form3Dot16DesignTensileStrength {
    fn value(&self) -> f64 {
        self.value
    }
}

impl_formula_numeric!(Form3Dot16DesignTensileStrength);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormulaError;
    use approx::assert_relative_eq;

    #[test]
    fn test_design_compressive_strength() {
        // f_cd = 0.85 * 35 / 1.5 = 19.833 MPa
        let f_cd = Form3Dot15DesignCompressiveStrength::new(0.85, 35.0, 1.5).unwrap();
        assert_relative_eq!(f_cd.value(), 19.833_333, epsilon = 1e-5);
    }

    #[test]
    fn test_design_compressive_strength_latex() {
        let f_cd = Form3Dot15DesignCompressiveStrength::new(0.85, 35.0, 1.5).unwrap();
        let latex = f_cd.latex();

        assert_eq!(latex.equation, r"\frac{\alpha_{cc} \cdot f_{ck}}{\gamma_{C}}");
        assert_eq!(latex.numeric_equation, r"\frac{0.850 \cdot 35.000}{1.500}");
        assert_eq!(latex.numeric_equation_with_units, r"\frac{0.850 \cdot 35.000 MPa}{1.500}");
        assert_eq!(
            latex.complete(),
            r"f_{cd} = \frac{\alpha_{cc} \cdot f_{ck}}{\gamma_{C}} = \frac{0.850 \cdot 35.000}{1.500} = 19.833 MPa"
        );
    }

    #[test]
    fn test_zero_gamma_rejected() {
        let err = Form3Dot15DesignCompressiveStrength::new(1.0, 30.0, 0.0).unwrap_err();
        assert_eq!(err, FormulaError::less_or_equal_to_zero("gamma_c", 0.0));
    }

    #[test]
    fn test_negative_strength_rejected() {
        let err = Form3Dot15DesignCompressiveStrength::new(1.0, -30.0, 1.5).unwrap_err();
        assert_eq!(err, FormulaError::negative_value("f_ck", -30.0));
    }

    #[test]
    fn test_zero_strength_accepted() {
        let f_cd = Form3Dot15DesignCompressiveStrength::new(1.0, 0.0, 1.5).unwrap();
        assert_eq!(f_cd, 0.0);
    }

    #[test]
    fn test_design_tensile_strength() {
        // f_ctd = 1.0 * 2.0 / 1.5 = 1.333 MPa
        let f_ctd = Form3Dot16DesignTensileStrength::new(1.0, 2.0, 1.5).unwrap();
        assert_relative_eq!(f_ctd.value(), 1.333_333, epsilon = 1e-5);
        assert_eq!(f_ctd.latex().numeric_equation, r"\frac{1.000 \cdot 2.000}{1.500}");
    }

    #[test]
    fn test_compressive_strength_guards_cover_every_input() {
        let new = Form3Dot15DesignCompressiveStrength::new;

        for gamma_c in [0.0, -1.5] {
            let err = new(1.0, 30.0, gamma_c).unwrap_err();
            assert_eq!(err, FormulaError::less_or_equal_to_zero("gamma_c", gamma_c));
        }
        assert_eq!(new(-0.85, 30.0, 1.5).unwrap_err(), FormulaError::negative_value("alpha_cc", -0.85));
        assert_eq!(new(1.0, -30.0, 1.5).unwrap_err(), FormulaError::negative_value("f_ck", -30.0));

        assert_eq!(new(0.0, 30.0, 1.5).unwrap(), 0.0);
        assert_eq!(new(1.0, 0.0, 1.5).unwrap(), 0.0);
    }

    #[test]
    fn test_tensile_strength_guards_cover_every_input() {
        let new = Form3Dot16DesignTensileStrength::new;

        for gamma_c in [0.0, -1.5] {
            let err = new(1.0, 2.0, gamma_c).unwrap_err();
            assert_eq!(err, FormulaError::less_or_equal_to_zero("gamma_c", gamma_c));
        }
        assert_eq!(new(-1.0, 2.0, 1.5).unwrap_err(), FormulaError::negative_value("alpha_ct", -1.0));
        assert_eq!(new(1.0, -2.0, 1.5).unwrap_err(), FormulaError::negative_value("f_ctk_0_05", -2.0));

        assert_eq!(new(0.0, 2.0, 1.5).unwrap(), 0.0);
        assert_eq!(new(1.0, 0.0, 1.5).unwrap(), 0.0);
    }

    #[test]
    fn test_tensile_strength_guards() {
        let err = Form3Dot16DesignTensileStrength::new(-1.0, 2.0, 1.5).unwrap_err();
        assert_eq!(err.name(), "alpha_ct");

        let err = Form3Dot16DesignTensileStrength::new(1.0, 2.0, -1.5).unwrap_err();
        assert_eq!(err.error_code(), "LESS_OR_EQUAL_TO_ZERO");
    }
}
