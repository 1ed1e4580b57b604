//! # Formulary CLI
//!
//! Evaluates shipped clauses from the command line and prints their LaTeX
//! renderings and provenance trail.
//!
//! ```bash
//! formula_cli steel-tension --area 1000 --fy 355 --n-ed 200000 --json
//! formula_cli concrete-strength --fck 30 --precision 2
//! formula_cli catalog > CATALOG.md
//! ```

mod cli;

use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use formula_core::catalog::generate_catalog_markdown;
use formula_core::clauses::en_1992_1_1::Form3Dot15DesignCompressiveStrength;
use formula_core::clauses::en_1993_1_1::{Form6Dot5UnityCheckTensileStrength, Form6Dot6DesignPlasticResistance};
use formula_core::provenance::{trace_with_precision, ProvenanceNode};
use formula_core::{Clause, ComparisonFormula, FormulaError, FormulaResult, RenderSettings};

use crate::cli::{Cli, Commands};

const RULE: &str = "═══════════════════════════════════════";

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    let settings = match load_settings(cli.settings.as_deref(), cli.precision) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match cli.command {
        Commands::Catalog => {
            print!("{}", generate_catalog_markdown());
            Ok(())
        }
        Commands::SteelTension {
            area,
            fy,
            n_ed,
            gamma_m0,
            json,
        } => steel_tension(&settings, area, fy, n_ed, gamma_m0, json),
        Commands::ConcreteStrength {
            fck,
            alpha_cc,
            gamma_c,
            json,
        } => concrete_strength(&settings, fck, alpha_cc, gamma_c, json),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Settings file (if any) with the `--precision` flag applied on top
fn load_settings(path: Option<&Path>, precision: Option<usize>) -> Result<RenderSettings, Box<dyn Error>> {
    let mut settings: RenderSettings = match path {
        Some(path) => {
            tracing::info!("loading render settings from {}", path.display());
            let text = fs::read_to_string(path)?;
            serde_json::from_str(&text)?
        }
        None => RenderSettings::default(),
    };

    if let Some(precision) = precision {
        settings.precision = precision;
    }

    tracing::debug!("render settings: {:?}", settings);
    Ok(settings)
}

fn steel_tension(
    settings: &RenderSettings,
    area: f64,
    fy: f64,
    n_ed: f64,
    gamma_m0: f64,
    json: bool,
) -> FormulaResult<()> {
    let n_pl_rd = Arc::new(Form6Dot6DesignPlasticResistance::new(area, fy, gamma_m0)?);
    let check = Form6Dot5UnityCheckTensileStrength::new(n_ed, Arc::clone(&n_pl_rd))?;

    print_header(&format!("STEEL TENSION ({})", check.source_document()));

    println!("Resistance ({}):", n_pl_rd.label());
    println!("  {}", settings.render(n_pl_rd.as_ref()).short());
    println!("  {}", settings.complete(n_pl_rd.as_ref()));
    println!();
    println!("Check ({}):", check.label());
    println!("  Unity: {:.2} {}", check.unity_check(), status_icon(check.is_ok()));
    println!("  {}", settings.complete(&check));
    println!();

    let trail = trace_with_precision(&check, settings.precision);
    print_provenance(&trail, json);

    println!("{}", RULE);
    println!("  RESULT: {}", if check.is_ok() { "PASS" } else { "FAIL" });
    println!("{}", RULE);
    Ok(())
}

fn concrete_strength(settings: &RenderSettings, fck: f64, alpha_cc: f64, gamma_c: f64, json: bool) -> FormulaResult<()> {
    let f_cd = Form3Dot15DesignCompressiveStrength::new(alpha_cc, fck, gamma_c)?;

    print_header(&format!("CONCRETE STRENGTH ({})", f_cd.source_document()));

    println!("Design value ({}):", f_cd.label());
    println!("  {}", settings.render(&f_cd).short());
    println!("  {}", settings.complete(&f_cd));
    println!();

    print_provenance(&trace_with_precision(&f_cd, settings.precision), json);
    Ok(())
}

fn print_header(title: &str) {
    println!("{}", RULE);
    println!("  {}", title);
    println!("{}", RULE);
    println!();
}

fn print_provenance(trail: &ProvenanceNode, json: bool) {
    println!("Provenance:");
    print!("{}", trail.to_markdown());
    println!();

    if json {
        println!("JSON Output:");
        match serde_json::to_string_pretty(trail) {
            Ok(text) => println!("{}", text),
            Err(e) => tracing::error!("could not serialize provenance: {}", e),
        }
        println!();
    }
}

fn report_error(error: &FormulaError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_steel_tension() {
        let cli = Cli::parse_from([
            "formula_cli",
            "steel-tension",
            "--area",
            "1000",
            "--fy",
            "355",
            "--n-ed",
            "200000",
            "--precision",
            "1",
        ]);

        assert_eq!(cli.precision, Some(1));
        match cli.command {
            Commands::SteelTension {
                area, n_ed, gamma_m0, json, ..
            } => {
                assert_eq!(area, 1000.0);
                assert_eq!(n_ed, 200_000.0);
                assert_eq!(gamma_m0, 1.0);
                assert!(!json);
            }
            _ => panic!("expected steel-tension"),
        }
    }

    #[test]
    fn test_parse_negative_input() {
        let cli = Cli::parse_from(["formula_cli", "concrete-strength", "--fck", "-30"]);
        match cli.command {
            Commands::ConcreteStrength { fck, gamma_c, .. } => {
                assert_eq!(fck, -30.0);
                assert_eq!(gamma_c, 1.5);
            }
            _ => panic!("expected concrete-strength"),
        }
    }

    #[test]
    fn test_precision_flag_overrides_default() {
        let settings = load_settings(None, Some(5)).unwrap();
        assert_eq!(settings.precision, 5);
        assert!(settings.with_units);
    }

    #[test]
    fn test_guard_error_propagates() {
        let err = steel_tension(&RenderSettings::default(), 1000.0, 355.0, 1.0, 0.0, false).unwrap_err();
        assert_eq!(err, FormulaError::less_or_equal_to_zero("gamma_m0", 0.0));
    }
}
