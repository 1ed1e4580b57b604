//! End-to-end member design with the shipped Eurocode clauses.

use std::sync::Arc;

use approx::assert_relative_eq;
use formula_core::catalog;
use formula_core::clauses::{
    Form6Dot10NcRdClass1And2And3, Form6Dot12UnityCheckBendingMoment, Form6Dot13MCRdClass1And2,
    Form6Dot9UnityCheckCompressiveStrength,
};
use formula_core::{provenance, Clause, ComparisonFormula, Formula, RenderSettings};

// IPE 300, S355
const AREA: f64 = 5381.0;
const W_PL_Y: f64 = 628_400.0;
const F_Y: f64 = 355.0;
const GAMMA_M0: f64 = 1.0;

#[test]
fn test_ipe_300_compression_and_bending() {
    let n_c_rd = Arc::new(Form6Dot10NcRdClass1And2And3::new(AREA, F_Y, GAMMA_M0).unwrap());
    let m_c_rd = Arc::new(Form6Dot13MCRdClass1And2::new(W_PL_Y, F_Y, GAMMA_M0).unwrap());

    assert_relative_eq!(n_c_rd.value(), 1_910_255.0, epsilon = 1e-6);
    assert_relative_eq!(m_c_rd.value(), 223_082_000.0, epsilon = 1e-6);

    let compression = Form6Dot9UnityCheckCompressiveStrength::new(1_500_000.0, Arc::clone(&n_c_rd)).unwrap();
    let bending = Form6Dot12UnityCheckBendingMoment::new(250_000_000.0, Arc::clone(&m_c_rd)).unwrap();

    assert!(compression.is_ok());
    assert_relative_eq!(compression.unity_check(), 0.785_235, epsilon = 1e-5);
    assert!(!bending.is_ok());
    assert_eq!(bending.latex().result, r"\text{Not OK}");
}

#[test]
fn test_rendered_clause_matches_catalog() {
    let m_c_rd = Form6Dot13MCRdClass1And2::new(W_PL_Y, F_Y, GAMMA_M0).unwrap();
    let check = Form6Dot12UnityCheckBendingMoment::new(100_000_000.0, m_c_rd.clone()).unwrap();

    for clause in [&m_c_rd as &dyn Clause, &check as &dyn Clause] {
        let entry = catalog::find(clause.source_document(), clause.label()).unwrap();
        assert_eq!(entry, clause.metadata());
        assert_eq!(clause.latex().equation, entry.equation);
    }
}

#[test]
fn test_report_rendering_with_settings() {
    let m_c_rd = Form6Dot13MCRdClass1And2::new(W_PL_Y, F_Y, GAMMA_M0).unwrap();
    let check = Form6Dot12UnityCheckBendingMoment::new(100_000_000.0, m_c_rd).unwrap();
    let settings = RenderSettings { precision: 2, with_units: true };

    assert_eq!(
        settings.complete(&check),
        r"\text{CHECK} \to \frac{M_{Ed}}{M_{c,Rd}} \leq 1 \to \frac{100000000.00 Nmm}{223082000.00 Nmm} \leq 1 \to 0.45 \leq 1.00 \to \text{OK}"
    );

    let trail = provenance::trace_with_precision(&check, settings.precision);
    assert_eq!(trail.labels(), vec!["6.12", "6.13"]);
    assert_eq!(trail.inputs[1].source.as_ref().map(|node| node.unit.as_str()), Some("Nmm"));
}
