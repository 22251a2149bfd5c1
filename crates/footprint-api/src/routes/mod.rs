//! # API Route Modules
//!
//! - `estimate` — emissions estimate, with or without result insights.
//! - `factors` — the emission-factor catalogue, whole or per category.

pub mod estimate;
pub mod factors;
