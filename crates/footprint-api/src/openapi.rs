//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into one OpenAPI document served
//! at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Footprint API",
        version = "0.1.0",
        description = "Monthly carbon-footprint estimates from transport, electricity, waste, and food activity.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::estimate::estimate,
        crate::routes::estimate::estimate_with_insights,
        crate::routes::factors::list_factors,
        crate::routes::factors::category_factors,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::middleware::metrics::MetricsSnapshot,
    )),
    tags(
        (name = "estimate", description = "Emissions estimation"),
        (name = "factors", description = "Emission factor catalogue"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
