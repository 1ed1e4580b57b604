use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Formulary CLI
#[derive(Parser)]
#[command(name = "formula_cli")]
#[command(about = "Evaluate Eurocode clauses and print their LaTeX and provenance", long_about = None)]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decimal places of rendered values, overrides the settings file
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Render settings as JSON
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the markdown reference of every clause
    Catalog,

    /// Plastic tension resistance (6.6) fed into the tension check (6.5)
    #[command(allow_negative_numbers = true)]
    SteelTension {
        /// Gross cross-sectional area [mm²]
        #[arg(long)]
        area: f64,

        /// Yield strength [MPa]
        #[arg(long)]
        fy: f64,

        /// Design tension force [N]
        #[arg(long)]
        n_ed: f64,

        /// Partial factor for cross-section resistance [-]
        #[arg(long, default_value_t = 1.0)]
        gamma_m0: f64,

        /// Also print the provenance tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Design compressive strength of concrete (3.15)
    #[command(allow_negative_numbers = true)]
    ConcreteStrength {
        /// Characteristic cylinder strength [MPa]
        #[arg(long)]
        fck: f64,

        /// Coefficient for long term effects [-]
        #[arg(long, default_value_t = 1.0)]
        alpha_cc: f64,

        /// Partial safety factor for concrete [-]
        #[arg(long, default_value_t = 1.5)]
        gamma_c: f64,

        /// Also print the provenance tree as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Filter directive for the `-v` count. `RUST_LOG` takes precedence when set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Install the stderr subscriber. Records from `formula_core`'s `log` calls
    /// are forwarded to it.
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level()));

        if let Err(e) = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
        {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_follows_verbose_count() {
        let level = |args: &[&str]| Cli::parse_from(args).log_level();

        assert_eq!(level(&["formula_cli", "catalog"]), "warn");
        assert_eq!(level(&["formula_cli", "-v", "catalog"]), "info");
        assert_eq!(level(&["formula_cli", "catalog", "-vv"]), "debug");
        assert_eq!(level(&["formula_cli", "-vvv", "catalog"]), "trace");
        assert_eq!(level(&["formula_cli", "-vvvvv", "catalog"]), "trace");
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        let cli = Cli::parse_from(["formula_cli", "-vv", "catalog"]);
        cli.init_logging();
        cli.init_logging();
        tracing::debug!("subscriber installed");
    }
}
