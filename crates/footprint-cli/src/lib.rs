//! # footprint-cli — Command-Line Front End
//!
//! Provides the `footprint` command.
//!
//! ## Subcommands
//!
//! - `footprint estimate` — estimate emissions from an activity document.
//! - `footprint factors` — print the emission-factor catalogue.
//! - `footprint average` — mean total over saved result documents.
//!
//! ```bash
//! footprint estimate household.yaml --insights
//! cat input.json | footprint estimate - --format json
//! footprint factors --category transport
//! footprint estimate march.json --format json > march.result.json
//! footprint average jan.result.json feb.result.json march.result.json
//! ```
//!
//! Results go to stdout; logs go to stderr.

pub mod average;
pub mod estimate;
pub mod factors;

use clap::ValueEnum;

/// Output rendering shared by all subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}
