//! # footprint CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use footprint_cli::average::{run_average, AverageArgs};
use footprint_cli::estimate::{run_estimate, EstimateArgs};
use footprint_cli::factors::{run_factors, FactorsArgs};

/// Footprint CLI
///
/// Estimates monthly household carbon emissions from transport, electricity,
/// waste, and food activity.
#[derive(Parser, Debug)]
#[command(name = "footprint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate emissions from an activity document.
    Estimate(EstimateArgs),

    /// Print the emission-factor catalogue.
    Factors(FactorsArgs),

    /// Average the totals of saved result documents.
    Average(AverageArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs on stderr keep stdout parseable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Estimate(args) => run_estimate(&args),
        Commands::Factors(args) => run_factors(&args),
        Commands::Average(args) => run_average(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
