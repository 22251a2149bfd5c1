//! # Emission Factor Catalogue
//!
//! Read-only view of every coefficient the estimator applies.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use footprint_core::{Category, FactorEntry};

use crate::error::AppError;
use crate::state::AppState;

/// Build the factor catalogue router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/factors", get(list_factors))
        .route("/v1/factors/{category}", get(category_factors))
}

/// GET /v1/factors — Every emission factor.
#[utoipa::path(
    get,
    path = "/v1/factors",
    responses(
        (status = 200, description = "Emission factors in category order"),
    ),
    tag = "factors"
)]
pub async fn list_factors(State(state): State<AppState>) -> Json<Vec<FactorEntry>> {
    Json(state.factors.as_ref().clone())
}

/// GET /v1/factors/{category} — Emission factors of one category.
#[utoipa::path(
    get,
    path = "/v1/factors/{category}",
    params(
        ("category" = String, Path, description = "transport, electricity, waste, or food"),
    ),
    responses(
        (status = 200, description = "Emission factors of the category"),
        (status = 404, description = "Unknown category", body = crate::error::ErrorBody),
    ),
    tag = "factors"
)]
pub async fn category_factors(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<FactorEntry>>, AppError> {
    let category: Category = name.parse()?;
    let rows = state
        .factors
        .iter()
        .filter(|row| row.category == category)
        .cloned()
        .collect();
    Ok(Json(rows))
}
