//! # Request Extraction
//!
//! Handlers take `Result<Json<T>, JsonRejection>` so that decoding failures
//! surface as the API's own [`AppError::BadRequest`] body instead of Axum's
//! plain-text rejection.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use footprint_core::ActivityInput;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract an [`ActivityInput`], optionally refusing one with nothing usable.
pub fn extract_activity(
    result: Result<Json<ActivityInput>, JsonRejection>,
    require_input: bool,
) -> Result<ActivityInput, AppError> {
    let input = extract_json(result)?;
    if require_input {
        input.require_usable()?;
    }
    Ok(input)
}
