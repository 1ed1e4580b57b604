//! # Render Settings
//!
//! Consumer-side rendering preferences, stored alongside reports as JSON.
//! Clauses never read these on their own; pass them in when rendering.
//!
//! ```rust
//! use formula_core::settings::RenderSettings;
//!
//! let settings: RenderSettings = serde_json::from_str(r#"{ "precision": 1 }"#).unwrap();
//! assert_eq!(settings.precision, 1);
//! assert!(settings.with_units);
//! ```

use serde::{Deserialize, Serialize};

use crate::formula::Clause;
use crate::latex::{LatexFormula, DEFAULT_PRECISION};

/// Rendering preferences for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Decimal places of substituted values and results
    pub precision: usize,

    /// Prefer the unit-suffixed view of the numeric equation
    pub with_units: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            precision: DEFAULT_PRECISION,
            with_units: true,
        }
    }
}

impl RenderSettings {
    /// Render `clause` at the configured precision
    pub fn render<C: Clause + ?Sized>(&self, clause: &C) -> LatexFormula {
        clause.latex_with_precision(self.precision)
    }

    /// Full one-line rendering of `clause`, with or without units
    pub fn complete<C: Clause + ?Sized>(&self, clause: &C) -> String {
        let latex = self.render(clause);
        if self.with_units {
            latex.complete_with_units()
        } else {
            latex.complete()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clauses::en_1992_1_1::Form3Dot15DesignCompressiveStrength;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.precision, 3);
        assert!(settings.with_units);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: RenderSettings = serde_json::from_str(r#"{ "with_units": false }"#).unwrap();
        assert_eq!(settings, RenderSettings { precision: 3, with_units: false });

        let settings: RenderSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, RenderSettings::default());
    }

    #[test]
    fn test_render_uses_precision() {
        let f_cd = Form3Dot15DesignCompressiveStrength::new(1.0, 30.0, 1.5).unwrap();
        let settings = RenderSettings { precision: 1, with_units: true };

        assert_eq!(settings.render(&f_cd).short(), "f_{cd} = 20.0 MPa");
        assert_eq!(
            settings.complete(&f_cd),
            r"f_{cd} = \frac{\alpha_{cc} \cdot f_{ck}}{\gamma_{C}} = \frac{1.0 \cdot 30.0 MPa}{1.5} = 20.0 MPa"
        );

        let plain = RenderSettings { with_units: false, ..settings };
        assert_eq!(
            plain.complete(&f_cd),
            r"f_{cd} = \frac{\alpha_{cc} \cdot f_{ck}}{\gamma_{C}} = \frac{1.0 \cdot 30.0}{1.5} = 20.0 MPa"
        );
    }
}
