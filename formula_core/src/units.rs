//! # Unit Labels
//!
//! Physical units as they appear in rendered equations. These are labels
//! only: values are never converted between units, a formula simply states
//! the unit its inputs and result are expressed in.
//!
//! ## SI Units (Eurocode convention)
//!
//! - Length: millimeters (mm)
//! - Force: newtons (N), kilonewtons (kN)
//! - Stress: megapascals (MPa)
//! - Moment: newton-millimeters (Nmm), kilonewton-meters (kNm)
//!
//! ## Example
//!
//! ```rust
//! use formula_core::units::Unit;
//!
//! assert_eq!(Unit::MegaPascal.suffix(), Some(" MPa".to_string()));
//! assert_eq!(Unit::Dimensionless.suffix(), None);
//! assert_eq!(Unit::Dimensionless.symbol(), "-");
//! ```

use std::fmt;

use serde::Serialize;

/// Marker shown in place of a unit for dimensionless quantities
pub const DIMENSIONLESS_MARKER: &str = "-";

/// Unit of a formula input or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    /// Ratio, factor or count (no unit)
    Dimensionless,
    /// Length in millimeters
    Millimeter,
    /// Area in square millimeters
    SquareMillimeter,
    /// Section modulus in cubic millimeters
    CubicMillimeter,
    /// Force in newtons
    Newton,
    /// Force in kilonewtons
    KiloNewton,
    /// Moment in newton-millimeters
    NewtonMillimeter,
    /// Moment in kilonewton-meters
    KiloNewtonMeter,
    /// Stress in megapascals
    MegaPascal,
    /// Any unit not listed above, rendered verbatim
    Other(&'static str),
}

impl Unit {
    /// Text used for this unit in rendered equations
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Dimensionless => DIMENSIONLESS_MARKER,
            Unit::Millimeter => "mm",
            Unit::SquareMillimeter => "mm^2",
            Unit::CubicMillimeter => "mm^3",
            Unit::Newton => "N",
            Unit::KiloNewton => "kN",
            Unit::NewtonMillimeter => "Nmm",
            Unit::KiloNewtonMeter => "kNm",
            Unit::MegaPascal => "MPa",
            Unit::Other(symbol) => symbol,
        }
    }

    /// True for quantities without a physical unit
    pub fn is_dimensionless(&self) -> bool {
        matches!(self, Unit::Dimensionless)
    }

    /// Suffix appended to a numeric value (space + unit), `None` when dimensionless
    pub fn suffix(&self) -> Option<String> {
        if self.is_dimensionless() {
            None
        } else {
            Some(format!(" {}", self.symbol()))
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
