//! # footprint-api — Axum API Service for the Footprint Stack
//!
//! Exposes the `footprint-core` estimator over HTTP.
//!
//! ## API Surface
//!
//! | Path                        | Module                  | Purpose                         |
//! |-----------------------------|-------------------------|---------------------------------|
//! | `POST /v1/estimate`         | [`routes::estimate`]    | Emissions estimate              |
//! | `POST /v1/estimate/insights`| [`routes::estimate`]    | Estimate, ranking, and tips     |
//! | `GET /v1/factors[/{name}]`  | [`routes::factors`]     | Emission-factor catalogue       |
//! | `GET /openapi.json`         | [`openapi`]             | OpenAPI document                |
//! | `GET /health/*`             | this module             | Probes and counters             |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Extension, Json, Router};

use crate::middleware::metrics::{ApiMetrics, MetricsSnapshot};
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the metrics middleware
/// so that polling them does not inflate the request counters.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();

    let api = Router::new()
        .merge(routes::estimate::router())
        .merge(routes::factors::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .layer(Extension(metrics.clone()))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .route("/health/metrics", get(metrics_snapshot))
        .layer(Extension(metrics));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the estimator has no dependencies to wait on.
async fn readiness() -> &'static str {
    "ready"
}

/// Current request, error, and estimate counters.
async fn metrics_snapshot(Extension(metrics): Extension<ApiMetrics>) -> Json<MetricsSnapshot> {
    Json(metrics.snapshot())
}
