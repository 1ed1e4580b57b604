//! # EN 1993-1-1:2005 - Design of Steel Structures
//!
//! Cross-section resistances and the matching unity checks from section 6.2.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `W_pl` = Plastic section modulus
//! - `f_y` = Yield strength
//! - `γ_M0` = Partial factor for resistance of cross-sections
//! - `N_Ed`, `M_Ed` = Design values of the axial force and bending moment
//!
//! ## Composition
//!
//! Resistances feed straight into the checks, keeping their provenance:
//!
//! ```rust
//! use formula_core::clauses::en_1993_1_1::{
//!     Form6Dot5UnityCheckTensileStrength, Form6Dot6DesignPlasticResistance,
//! };
//! use formula_core::formula::{Clause, ComparisonFormula};
//!
//! let n_pl_rd = Form6Dot6DesignPlasticResistance::new(1000.0, 355.0, 1.0).unwrap();
//! let check = Form6Dot5UnityCheckTensileStrength::new(177_500.0, n_pl_rd).unwrap();
//!
//! assert!(check.is_ok());
//! assert_eq!(check.unity_check(), 0.5);
//! assert_eq!(check.n_t_rd().as_formula().map(|f| f.label()), Some("6.6"));
//! ```

use crate::errors::FormulaResult;
use crate::formula::metadata::{ClauseMetadata, Variable, EN_1993_1_1_2005};
use crate::formula::{render_comparison, render_formula, Clause, ComparisonFormula, Formula, NamedInput, Operand};
use crate::latex::{ComparisonOperator, LatexFormula};
use crate::units::Unit;
use crate::validation::{raise_if_less_or_equal_to_zero, raise_if_negative};
use crate::{impl_check_boolean, impl_formula_numeric};

const GAMMA_M0: Variable = Variable::new(
    r"\gamma_{M0}",
    "gamma_m0",
    "Partial factor for resistance of cross-sections",
    Unit::Dimensionless,
);

const F_Y: Variable = Variable::new("f_{y}", "f_y", "Yield strength", Unit::MegaPascal);

/// `A · f_y / γ_M0`, shared by the plastic and compression resistances
fn area_resistance(a: f64, f_y: f64, gamma_m0: f64) -> FormulaResult<f64> {
    raise_if_less_or_equal_to_zero(&[("gamma_m0", gamma_m0)])?;
    raise_if_negative(&[("a", a), ("f_y", f_y)])?;
    Ok(a * f_y / gamma_m0)
}

/// `action / resistance`, the left-hand side of every unity check
fn utilization(action_name: &str, action: f64, resistance_name: &str, resistance: f64) -> FormulaResult<f64> {
    raise_if_less_or_equal_to_zero(&[(resistance_name, resistance)])?;
    raise_if_negative(&[(action_name, action)])?;
    Ok(action / resistance)
}

// =============================================================================
// FORMULA 6.6
// Design plastic resistance of the gross cross-section
// =============================================================================

/// Formula (6.6): design plastic resistance of the gross cross-section
///
/// ```text
/// N_pl,Rd = A · f_y / γ_M0
/// ```
#[derive(Debug, Clone)]
pub struct Form6Dot6DesignPlasticResistance {
    a: Operand,
    f_y: Operand,
    gamma_m0: Operand,
    value: f64,
}

impl Form6Dot6DesignPlasticResistance {
    pub const METADATA: ClauseMetadata = ClauseMetadata {
        label: "6.6",
        name: "Design Plastic Resistance",
        description: "Design plastic resistance of the gross cross-section in tension",
        source_document: EN_1993_1_1_2005,
        return_symbol: "N_{pl,Rd}",
        equation: r"\frac{A \cdot f_{y}}{\gamma_{M0}}",
        unit: Unit::Newton,
        operator: ComparisonOperator::Equal,
        variables: &[
            Variable::new("A", "a", "Gross cross-sectional area", Unit::SquareMillimeter),
            F_Y,
            GAMMA_M0,
        ],
    };

    /// # Arguments
    /// * `a` - Gross cross-sectional area [mm²]
    /// * `f_y` - Yield strength [MPa]
    /// * `gamma_m0` - Partial factor for resistance of cross-sections [-]
    pub fn new(a: impl Into<Operand>, f_y: impl Into<Operand>, gamma_m0: impl Into<Operand>) -> FormulaResult<Self> {
        let (a, f_y, gamma_m0) = (a.into(), f_y.into(), gamma_m0.into());
        let value = area_resistance(a.value(), f_y.value(), gamma_m0.value())?;
        Ok(Self { a, f_y, gamma_m0, value })
    }

    pub fn a(&self) -> &Operand {
        &self.a
    }

    pub fn f_y(&self) -> &Operand {
        &self.f_y
    }

    pub fn gamma_m0(&self) -> &Operand {
        &self.gamma_m0
    }
}

impl Clause for Form6Dot6DesignPlasticResistance {
    fn metadata(&self) -> &'static ClauseMetadata {
        &Self::METADATA
    }

    fn inputs(&self) -> Vec<NamedInput<'_>> {
        vec![
            NamedInput::new("a", &self.a),
            NamedInput::new("f_y", &self.f_y),
            NamedInput::new("gamma_m0", &self.gamma_m0),
        ]
    }

    fn latex_with_precision(&self, precision: usize) -> LatexFormula {
        render_formula(self, precision)
    }
}

impl Formula for Form6Dot6DesignPlasticResistance {
    fn value(&self) -> f64 {
        self.value
    }
}

impl_formula_numeric!(Form6Dot6DesignPlasticResistance);

// =============================================================================
// FORMULA 6.10
// Design compression resistance for class 1, 2 and 3 cross-sections
// =============================================================================

/// Formula (6.10): design resistance for uniform compression (class 1, 2, 3)
///
/// ```text
/// N_c,Rd = A · f_y / γ_M0
/// ```
#[derive(Debug, Clone)]
pub struct Form6Dot10NcRdClass1And2And3 {
    a: Operand,
    f_y: Operand,
    gamma_m0: Operand,
    value: f64,
}

impl Form6Dot10NcRdClass1And2And3 {
    pub const METADATA: ClauseMetadata = ClauseMetadata {
        label: "6.10",
        name: "Design Compression Resistance",
        description: "Design resistance for uniform compression of class 1, 2 and 3 cross-sections",
        source_document: EN_1993_1_1_2005,
        return_symbol: "N_{c,Rd}",
        equation: r"\frac{A \cdot f_{y}}{\gamma_{M0}}",
        unit: Unit::Newton,
        operator: ComparisonOperator::Equal,
        variables: &[
            Variable::new("A", "a", "Cross-sectional area", Unit::SquareMillimeter),
            F_Y,
            GAMMA_M0,
        ],
    };

    /// # Arguments
    /// * `a` - Cross-sectional area [mm²]
    /// * `f_y` - Yield strength [MPa]
    /// * `gamma_m0` - Partial factor for resistance of cross-sections [-]
    pub fn new(a: impl Into<Operand>, f_y: impl Into<Operand>, gamma_m0: impl Into<Operand>) -> FormulaResult<Self> {
        let (a, f_y, gamma_m0) = (a.into(), f_y.into(), gamma_m0.into());
        let value = area_resistance(a.value(), f_y.value(), gamma_m0.value())?;
        Ok(Self { a, f_y, gamma_m0, value })
    }

    pub fn a(&self) -> &Operand {
        &self.a
    }

    pub fn f_y(&self) -> &Operand {
        &self.f_y
    }

    pub fn gamma_m0(&self) -> &Operand {
        &self.gamma_m0
    }
}

impl Clause for Form6Dot10NcRdClass1And2And3 {
    fn metadata(&self) -> &'static ClauseMetadata {
        &Self::METADATA
    }

    fn inputs(&self) -> Vec<NamedInput<'_>> {
        vec![
            NamedInput::new("a", &self.a),
            NamedInput::new("f_y", &self.f_y),
            NamedInput::new("gamma_m0", &self.gamma_m0),
        ]
    }

    fn latex_with_precision(&self, precision: usize) -> LatexFormula {
        render_formula(self, precision)
    }
}

impl Formula for Form6Dot10NcRdClass1And2And3 {
    fn value(&self) -> f64 {
        self.value
    }
}

impl_formula_numeric!(Form6Dot10NcRdClass1And2And3);

// =============================================================================
// FORMULA 6.13
// Design plastic bending resistance for class 1 and 2 cross-sections
// =============================================================================

/// Formula (6.13): design resistance for bending (class 1, 2)
///
/// ```text
/// M_c,Rd = W_pl · f_y / γ_M0
/// ```
#[derive(Debug, Clone)]
pub struct Form6Dot13MCRdClass1And2 {
    w_pl: Operand,
    f_y: Operand,
    gamma_m0: Operand,
    value: f64,
}

impl Form6Dot13MCRdClass1And2 {
    pub const METADATA: ClauseMetadata = ClauseMetadata {
        label: "6.13",
        name: "Design Bending Resistance",
        description: "Design plastic resistance for bending of class 1 and 2 cross-sections",
        source_document: EN_1993_1_1_2005,
        return_symbol: "M_{c,Rd}",
        equation: r"\frac{W_{pl} \cdot f_{y}}{\gamma_{M0}}",
        unit: Unit::NewtonMillimeter,
        operator: ComparisonOperator::Equal,
        variables: &[
            Variable::new("W_{pl}", "w_pl", "Plastic section modulus", Unit::CubicMillimeter),
            F_Y,
            GAMMA_M0,
        ],
    };

    /// # Arguments
    /// * `w_pl` - Plastic section modulus [mm³]
    /// * `f_y` - Yield strength [MPa]
    /// * `gamma_m0` - Partial factor for resistance of cross-sections [-]
    pub fn new(w_pl: impl Into<Operand>, f_y: impl Into<Operand>, gamma_m0: impl Into<Operand>) -> FormulaResult<Self> {
        let (w_pl, f_y, gamma_m0) = (w_pl.into(), f_y.into(), gamma_m0.into());
        let value = Self::evaluate(w_pl.value(), f_y.value(), gamma_m0.value())?;
        Ok(Self {
            w_pl,
            f_y,
            gamma_m0,
            value,
        })
    }

    pub fn evaluate(w_pl: f64, f_y: f64, gamma_m0: f64) -> FormulaResult<f64> {
        raise_if_less_or_equal_to_zero(&[("gamma_m0", gamma_m0)])?;
        raise_if_negative(&[("w_pl", w_pl), ("f_y", f_y)])?;
        Ok(w_pl * f_y / gamma_m0)
    }

    pub fn w_pl(&self) -> &Operand {
        &self.w_pl
    }

    pub fn f_y(&self) -> &Operand {
        &self.f_y
    }

    pub fn gamma_m0(&self) -> &Operand {
        &self.gamma_m0
    }
}

impl Clause for Form6Dot13MCRdClass1And2 {
    fn metadata(&self) -> &'static ClauseMetadata {
        &Self::METADATA
    }

    fn inputs(&self) -> Vec<NamedInput<'_>> {
        vec![
            NamedInput::new("w_pl", &self.w_pl),
            NamedInput::new("f_y", &self.f_y),
            NamedInput::new("gamma_m0", &self.gamma_m0),
        ]
    }

    fn latex_with_precision(&self, precision: usize) -> LatexFormula {
        render_formula(self, precision)
    }
}

impl Formula for Form6Dot13MCRdClass1And2 {
    fn value(&self) -> f64 {
        self.value
    }
}

impl_formula_numeric!(Form6Dot13MCRdClass1And2);

// =============================================================================
// UNITY CHECKS 6.5, 6.9, 6.12
// =============================================================================

/// Formula (6.5): tension unity check
///
/// ```text
/// N_Ed / N_t,Rd ≤ 1.0
/// ```
#[derive(Debug, Clone)]
pub struct Form6Dot5UnityCheckTensileStrength {
    n_ed: Operand,
    n_t_rd: Operand,
    lhs: f64,
}

impl Form6Dot5UnityCheckTensileStrength {
    pub const METADATA: ClauseMetadata = ClauseMetadata {
        label: "6.5",
        name: "Tension Unity Check",
        description: "Design tensile force against the design tension resistance",
        source_document: EN_1993_1_1_2005,
        return_symbol: crate::latex::CHECK_SYMBOL,
        equation: r"\frac{N_{Ed}}{N_{t,Rd}} \leq 1",
        unit: Unit::Dimensionless,
        operator: ComparisonOperator::LessOrEqual,
        variables: &[
            Variable::new("N_{Ed}", "n_ed", "Design value of the tension force", Unit::Newton),
            Variable::new("N_{t,Rd}", "n_t_rd", "Design tension resistance", Unit::Newton),
        ],
    };

    /// # Arguments
    /// * `n_ed` - Design value of the tension force [N]
    /// * `n_t_rd` - Design tension resistance, e.g. formula (6.6) [N]
    pub fn new(n_ed: impl Into<Operand>, n_t_rd: impl Into<Operand>) -> FormulaResult<Self> {
        let (n_ed, n_t_rd) = (n_ed.into(), n_t_rd.into());
        let lhs = utilization("n_ed", n_ed.value(), "n_t_rd", n_t_rd.value())?;
        Ok(Self { n_ed, n_t_rd, lhs })
    }

    pub fn n_ed(&self) -> &Operand {
        &self.n_ed
    }

    pub fn n_t_rd(&self) -> &Operand {
        &self.n_t_rd
    }
}

impl Clause for Form6Dot5UnityCheckTensileStrength {
    fn metadata(&self) -> &'static ClauseMetadata {
        &Self::METADATA
    }

    fn inputs(&self) -> Vec<NamedInput<'_>> {
        vec![NamedInput::new("n_ed", &self.n_ed), NamedInput::new("n_t_rd", &self.n_t_rd)]
    }

    fn latex_with_precision(&self, precision: usize) -> LatexFormula {
        render_comparison(self, precision)
    }
}

impl ComparisonFormula for Form6Dot5UnityCheckTensileStrength {
    fn lhs(&self) -> f64 {
        self.lhs
    }

    fn rhs(&self) -> f64 {
        1.0
    }
}

impl_check_boolean!(Form6Dot5UnityCheckTensileStrength);

/// Formula (6.9): compression unity check
///
/// ```text
/// N_Ed / N_c,Rd ≤ 1.0
/// ```
#[derive(Debug, Clone)]
pub struct Form6Dot9UnityCheckCompressiveStrength {
    n_ed: Operand,
    n_c_rd: Operand,
    lhs: f64,
}

impl Form6Dot9UnityCheckCompressiveStrength {
    pub const METADATA: ClauseMetadata = ClauseMetadata {
        label: "6.9",
        name: "Compression Unity Check",
        description: "Design compression force against the design compression resistance",
        source_document: EN_1993_1_1_2005,
        return_symbol: crate::latex::CHECK_SYMBOL,
        equation: r"\frac{N_{Ed}}{N_{c,Rd}} \leq 1",
        unit: Unit::Dimensionless,
        operator: ComparisonOperator::LessOrEqual,
        variables: &[
            Variable::new("N_{Ed}", "n_ed", "Design value of the compression force", Unit::Newton),
            Variable::new("N_{c,Rd}", "n_c_rd", "Design compression resistance", Unit::Newton),
        ],
    };

    /// # Arguments
    /// * `n_ed` - Design value of the compression force [N]
    /// * `n_c_rd` - Design compression resistance, e.g. formula (6.10) [N]
    pub fn new(n_ed: impl Into<Operand>, n_c_rd: impl Into<Operand>) -> FormulaResult<Self> {
        let (n_ed, n_c_rd) = (n_ed.into(), n_c_rd.into());
        let lhs = utilization("n_ed", n_ed.value(), "n_c_rd", n_c_rd.value())?;
        Ok(Self { n_ed, n_c_rd, lhs })
    }

    pub fn n_ed(&self) -> &Operand {
        &self.n_ed
    }

    pub fn n_c_rd(&self) -> &Operand {
        &self.n_c_rd
    }
}

impl Clause for Form6Dot9UnityCheckCompressiveStrength {
    fn metadata(&self) -> &'static ClauseMetadata {
        &Self::METADATA
    }

    fn inputs(&self) -> Vec<NamedInput<'_>> {
        vec![NamedInput::new("n_ed", &self.n_ed), NamedInput::new("n_c_rd", &self.n_c_rd)]
    }

    fn latex_with_precision(&self, precision: usize) -> LatexFormula {
        render_comparison(self, precision)
    }
}

impl ComparisonFormula for Form6Dot9UnityCheckCompressiveStrength {
    fn lhs(&self) -> f64 {
        self.lhs
    }

    fn rhs(&self) -> f64 {
        1.0
    }
}

impl_check_boolean!(Form6Dot9UnityCheckCompressiveStrength);

/// Formula (6.12): bending unity check
///
/// ```text
/// M_Ed / M_c,Rd ≤ 1.0
/// ```
#[derive(Debug, Clone)]
pub struct Form6Dot12UnityCheckBendingMoment {
    m_ed: Operand,
    m_c_rd: Operand,
    lhs: f64,
}

impl Form6Dot12UnityCheckBendingMoment {
    pub const METADATA: ClauseMetadata = ClauseMetadata {
        label: "6.12",
        name: "Bending Unity Check",
        description: "Design bending moment against the design bending resistance",
        source_document: EN_1993_1_1_2005,
        return_symbol: crate::latex::CHECK_SYMBOL,
        equation: r"\frac{M_{Ed}}{M_{c,Rd}} \leq 1",
        unit: Unit::Dimensionless,
        operator: ComparisonOperator::LessOrEqual,
        variables: &[
            Variable::new("M_{Ed}", "m_ed", "Design value of the bending moment", Unit::NewtonMillimeter),
            Variable::new("M_{c,Rd}", "m_c_rd", "Design bending resistance", Unit::NewtonMillimeter),
        ],
    };

    /// # Arguments
    /// * `m_ed` - Design value of the bending moment [Nmm]
    /// * `m_c_rd` - Design bending resistance, e.g. formula (6.13) [Nmm]
    pub fn new(m_ed: impl Into<Operand>, m_c_rd: impl Into<Operand>) -> FormulaResult<Self> {
        let (m_ed, m_c_rd) = (m_ed.into(), m_c_rd.into());
        let lhs = utilization("m_ed", m_ed.value(), "m_c_rd", m_c_rd.value())?;
        Ok(Self { m_ed, m_c_rd, lhs })
    }

    pub fn m_ed(&self) -> &Operand {
        &self.m_ed
    }

    pub fn m_c_rd(&self) -> &Operand {
        &self.m_c_rd
    }
}

impl Clause for Form6Dot12UnityCheckBendingMoment {
    fn metadata(&self) -> &'static ClauseMetadata {
        &Self::METADATA
    }

    fn inputs(&self) -> Vec<NamedInput<'_>> {
        vec![NamedInput::new("m_ed", &self.m_ed), NamedInput::new("m_c_rd", &self.m_c_rd)]
    }

    fn latex_with_precision(&self, precision: usize) -> LatexFormula {
        render_comparison(self, precision)
    }
}

impl ComparisonFormula for Form6Dot12UnityCheckBendingMoment {
    fn lhs(&self) -> f64 {
        self.lhs
    }

    fn rhs(&self) -> f64 {
        1.0
    }
}

impl_check_boolean!(Form6Dot12UnityCheckBendingMoment);
