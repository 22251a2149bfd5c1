//! # Middleware
//!
//! Execution order, outermost first:
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod metrics;
pub mod tracing_layer;
