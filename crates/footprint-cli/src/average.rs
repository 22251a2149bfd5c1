//! # Average Subcommand
//!
//! Reads result documents previously written by
//! `footprint estimate --format json` and prints the mean total.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use footprint_core::{average_total, EmissionsResult};

use crate::OutputFormat;

/// Arguments for the `footprint average` subcommand.
#[derive(Args, Debug)]
pub struct AverageArgs {
    /// Result documents (JSON) to average.
    #[arg(value_name = "RESULT", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AverageReport {
    results: usize,
    #[serde(rename = "averageKgCO2e")]
    average_kg_co2e: f64,
}

/// Execute the average subcommand, printing to stdout.
pub fn run_average(args: &AverageArgs) -> Result<u8> {
    let history = args
        .paths
        .iter()
        .map(|path| load_result(path))
        .collect::<Result<Vec<_>>>()?;

    let mut stdout = std::io::stdout().lock();
    average_to(&history, args.format, &mut stdout)
}

/// Load one result document from disk.
pub fn load_result(path: &Path) -> Result<EmissionsResult> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to decode {}", path.display()))
}

/// Average `history` and render it to `out`.
pub fn average_to(
    history: &[EmissionsResult],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<u8> {
    let report = AverageReport {
        results: history.len(),
        average_kg_co2e: average_total(history),
    };
    tracing::info!(
        results = report.results,
        average_kg_co2e = report.average_kg_co2e,
        "history averaged"
    );

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Text => writeln!(
            out,
            "{:<12} {:>12.1} kg CO2e over {} results",
            "average", report.average_kg_co2e, report.results
        )?,
    }
    Ok(0)
}
