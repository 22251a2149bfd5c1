//! # Estimation API
//!
//! Runs the emissions estimator over a posted [`ActivityInput`]. The plain
//! endpoint returns the [`EmissionsResult`] as-is; the insights endpoint
//! adds the category ranking and reduction tips shown on a results page.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Extension, Json, Router};
use footprint_core::{
    ranked_categories, reduction_tips, ActivityInput, Category, EmissionsResult, RankedCategory,
};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::extract_activity;
use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Estimate plus derived insights.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub result: EmissionsResult,
    pub ranked_categories: Vec<RankedCategory>,
    pub tips: Vec<&'static str>,
}

/// Build the estimation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/estimate", post(estimate))
        .route("/v1/estimate/insights", post(estimate_with_insights))
}

fn run(state: &AppState, metrics: &ApiMetrics, input: &ActivityInput) -> EmissionsResult {
    let transport = input.tally(Category::Transport);
    let electricity = input.tally(Category::Electricity);
    let waste = input.tally(Category::Waste);
    let food = input.tally(Category::Food);
    tracing::debug!(
        transport.usable = transport.usable,
        transport.excluded = transport.excluded,
        electricity.usable = electricity.usable,
        electricity.excluded = electricity.excluded,
        waste.usable = waste.usable,
        waste.excluded = waste.excluded,
        food.usable = food.usable,
        food.excluded = food.excluded,
        "entry tally"
    );

    let result = state.estimator.compute(input);
    metrics.record_estimate();
    tracing::info!(total_kg_co2e = result.total_kg_co2e, "estimate computed");
    result
}

/// POST /v1/estimate — Estimate monthly emissions.
#[utoipa::path(
    post,
    path = "/v1/estimate",
    responses(
        (status = 200, description = "Total and per-category emissions in kg CO2e"),
        (status = 400, description = "Malformed input document", body = crate::error::ErrorBody),
        (status = 422, description = "No usable entry (only when input is required)", body = crate::error::ErrorBody),
    ),
    tag = "estimate"
)]
pub async fn estimate(
    State(state): State<AppState>,
    Extension(metrics): Extension<ApiMetrics>,
    body: Result<Json<ActivityInput>, JsonRejection>,
) -> Result<Json<EmissionsResult>, AppError> {
    let input = extract_activity(body, state.config.require_input)?;
    Ok(Json(run(&state, &metrics, &input)))
}

/// POST /v1/estimate/insights — Estimate with ranking and reduction tips.
#[utoipa::path(
    post,
    path = "/v1/estimate/insights",
    responses(
        (status = 200, description = "Estimate, categories ranked by emissions, and reduction tips"),
        (status = 400, description = "Malformed input document", body = crate::error::ErrorBody),
        (status = 422, description = "No usable entry (only when input is required)", body = crate::error::ErrorBody),
    ),
    tag = "estimate"
)]
pub async fn estimate_with_insights(
    State(state): State<AppState>,
    Extension(metrics): Extension<ApiMetrics>,
    body: Result<Json<ActivityInput>, JsonRejection>,
) -> Result<Json<InsightsResponse>, AppError> {
    let input = extract_activity(body, state.config.require_input)?;
    let result = run(&state, &metrics, &input);
    Ok(Json(InsightsResponse {
        ranked_categories: ranked_categories(&result),
        tips: reduction_tips(&result),
        result,
    }))
}
