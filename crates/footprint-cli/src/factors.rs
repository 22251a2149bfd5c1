//! # Factors Subcommand
//!
//! Prints the emission-factor catalogue, optionally narrowed to one category.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use clap::Args;

use footprint_core::{factor_table, Category, FactorEntry};

use crate::OutputFormat;

/// Arguments for the `footprint factors` subcommand.
#[derive(Args, Debug)]
pub struct FactorsArgs {
    /// Only show factors of this category (transport, electricity, waste, food).
    #[arg(long)]
    pub category: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the factors subcommand, printing to stdout.
pub fn run_factors(args: &FactorsArgs) -> Result<u8> {
    let mut stdout = std::io::stdout().lock();
    factors_to(args, &mut stdout)
}

/// Render the selected factors to `out`.
pub fn factors_to(args: &FactorsArgs, out: &mut impl Write) -> Result<u8> {
    let category = args
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()?;

    let rows: Vec<FactorEntry> = factor_table()
        .into_iter()
        .filter(|row| category.map_or(true, |c| row.category == c))
        .collect();
    tracing::debug!(rows = rows.len(), "selected emission factors");

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
        OutputFormat::Text => render_text(&rows),
    };
    writeln!(out, "{rendered}")?;
    Ok(0)
}

fn render_text(rows: &[FactorEntry]) -> String {
    let mut text = String::new();
    let _ = write!(
        text,
        "{:<12} {:<16} {:>10} {}",
        "CATEGORY", "ACTIVITY", "KG CO2E", "PER"
    );
    for row in rows {
        let _ = write!(
            text,
            "\n{:<12} {:<16} {:>10} {}",
            row.category.as_str(),
            row.activity,
            row.kg_co2e_per_unit,
            row.unit
        );
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(category: Option<&str>, format: OutputFormat) -> Result<String> {
        let args = FactorsArgs {
            category: category.map(str::to_string),
            format,
        };
        let mut out = Vec::new();
        factors_to(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn lists_all_factors() {
        let out = run(None, OutputFormat::Text).unwrap();
        // Header plus thirteen rows.
        assert_eq!(out.lines().count(), 14);
        assert!(out.contains("plane/first"));
        assert!(out.contains("garbage_bag"));
    }

    #[test]
    fn filters_by_category() {
        let out = run(Some("Electricity"), OutputFormat::Text).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("grid"));
        assert!(out.contains("kWh"));
    }

    #[test]
    fn json_rows() {
        let out = run(Some("food"), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2]["activity"], "restaurant");
        assert_eq!(rows[2]["kgCO2ePerUnit"], 2.0);
    }

    #[test]
    fn unknown_category_is_an_error() {
        let err = run(Some("water"), OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }
}
