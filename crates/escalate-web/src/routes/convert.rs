//! JSON conversion endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use escalate_lease::Conversion;

use crate::dto::ConvertRequest;
use crate::error::ApiResult;
use crate::state::AppState;

/// Run one conversion.
///
/// Body rejections are reported in the same error envelope as engine errors.
pub async fn convert(
    State(state): State<AppState>,
    body: Result<Json<ConvertRequest>, JsonRejection>,
) -> ApiResult<Json<Conversion>> {
    let Json(req) = body?;
    let request = req.into_request(state.config.lease);
    let conversion = state.config.execute(&request)?;
    tracing::debug!(
        operation = %conversion.operation,
        rate = conversion.rate,
        budget = conversion.budget,
        "converted"
    );
    Ok(Json(conversion))
}
