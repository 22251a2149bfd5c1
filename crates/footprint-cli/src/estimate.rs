//! # Estimate Subcommand
//!
//! Reads an activity document, runs the estimator, and prints the result as
//! a table or JSON. Documents are JSON unless the file extension is `.yaml`
//! or `.yml`; `-` reads JSON from stdin.
//!
//! Exit codes: 0 on success, 1 when `--require-input` finds nothing usable
//! (reported on stderr, stdout stays empty). Read and decode failures
//! propagate as errors.

use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use footprint_core::{
    ranked_categories, reduction_tips, ActivityInput, Category, EmissionsEstimator,
    EmissionsResult, RankedCategory,
};

use crate::OutputFormat;

/// Arguments for the `footprint estimate` subcommand.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Activity document (JSON, or YAML by extension). Use `-` for stdin.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print ranked categories and reduction tips.
    #[arg(long)]
    pub insights: bool,

    /// Exit with status 1 if no entry carries a usable amount.
    #[arg(long)]
    pub require_input: bool,
}

/// Estimate plus derived insights, as printed with `--insights --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsightsReport {
    result: EmissionsResult,
    ranked_categories: Vec<RankedCategory>,
    tips: Vec<&'static str>,
}

/// Execute the estimate subcommand, printing to stdout.
pub fn run_estimate(args: &EstimateArgs) -> Result<u8> {
    let input = if args.path.as_os_str() == "-" {
        ActivityInput::from_json_reader(std::io::stdin().lock())
            .context("failed to load activity document from stdin")?
    } else {
        load_input(&args.path)?
    };

    let mut stdout = std::io::stdout().lock();
    estimate_to(&input, args, &mut stdout)
}

/// Load an activity document from disk, choosing the decoder by extension.
pub fn load_input(path: &Path) -> Result<ActivityInput> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let input = if is_yaml {
        ActivityInput::from_yaml_str(&raw)
    } else {
        ActivityInput::from_json_str(&raw)
    };
    input.with_context(|| format!("failed to decode {}", path.display()))
}

/// Estimate `input` and render it to `out`.
pub fn estimate_to(input: &ActivityInput, args: &EstimateArgs, out: &mut impl Write) -> Result<u8> {
    for category in Category::all() {
        let tally = input.tally(*category);
        tracing::debug!(
            category = %category,
            usable = tally.usable,
            excluded = tally.excluded,
            "entry tally"
        );
    }

    if args.require_input {
        if let Err(e) = input.require_usable() {
            tracing::warn!("{e}");
            return Ok(1);
        }
    }

    let result = EmissionsEstimator.compute(input);
    tracing::info!(total_kg_co2e = result.total_kg_co2e, "estimate computed");

    let rendered = match (args.format, args.insights) {
        (OutputFormat::Json, false) => serde_json::to_string_pretty(&result)?,
        (OutputFormat::Json, true) => serde_json::to_string_pretty(&InsightsReport {
            ranked_categories: ranked_categories(&result),
            tips: reduction_tips(&result),
            result,
        })?,
        (OutputFormat::Text, insights) => render_text(&result, insights),
    };
    writeln!(out, "{rendered}")?;
    Ok(0)
}

/// Plain-text table of the breakdown, optionally followed by insights.
pub fn render_text(result: &EmissionsResult, insights: bool) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{:<12} {:>12} {:>6}", "CATEGORY", "KG CO2E", "%");
    for (category, figures) in result.breakdown.iter() {
        let _ = writeln!(
            text,
            "{:<12} {:>12.1} {:>6}",
            category.as_str(),
            figures.emissions_kg_co2e,
            figures.percentage_of_total
        );
    }
    let _ = write!(text, "{:<12} {:>12.1}", "total", result.total_kg_co2e);

    if insights {
        let ranked = ranked_categories(result);
        if ranked.is_empty() {
            let _ = write!(text, "\n\nNo emissions recorded.");
        } else {
            let _ = write!(text, "\n\nTop categories:");
            for (rank, r) in ranked.iter().enumerate() {
                let _ = write!(
                    text,
                    "\n  {}. {} ({}%)",
                    rank + 1,
                    r.category,
                    r.percentage_of_total
                );
            }
            let _ = write!(text, "\n\nTips:");
            for tip in reduction_tips(result) {
                let _ = write!(text, "\n  - {tip}");
            }
        }
    }
    text
}
