//! # Error Hierarchy
//!
//! Structured errors for the callers of the estimation engine, built with
//! `thiserror`. The estimator itself has no error path: malformed entries are
//! excluded, not reported. These types cover what surrounds it: decoding an
//! [`ActivityInput`](crate::ActivityInput) from a document, the opt-in
//! "anything usable at all" pre-check, and category-name parsing.

use thiserror::Error;

/// Top-level error type for the Footprint Stack.
#[derive(Error, Debug)]
pub enum FootprintError {
    /// Input failed a caller-level validation rule.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON decoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML decoding failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error while reading an input document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation failures raised outside the estimator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No entry in any category carries a positive numeric quantity.
    #[error("no usable input: provide a positive amount for at least one category")]
    NoUsableInput,

    /// A category name did not match any known category.
    #[error("unknown category: \"{0}\" (expected transport, electricity, waste, or food)")]
    UnknownCategory(String),
}
