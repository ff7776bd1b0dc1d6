//! Calculator form endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use escalate_lease::ConversionRequest;

use crate::error::ApiError;
use crate::form::{FormQuery, FormView, InvalidForm};
use crate::state::AppState;

/// Render the form, converting whatever the query string asks for.
///
/// Bad input re-renders the form with the message and a 422 status; a
/// solver failure does the same with a 500.
pub async fn calculator(
    State(state): State<AppState>,
    Query(query): Query<FormQuery>,
) -> (StatusCode, Html<String>) {
    let defaults = state.config.lease;
    let input = match query.parse(defaults) {
        Ok(input) => input,
        Err(InvalidForm { input, error }) => {
            let view = FormView::from_failure(&input, error.to_string());
            return (error.status(), Html(view.render()));
        }
    };

    let request = ConversionRequest::new(input.operation, input.value(), input.params);
    match state.config.execute(&request) {
        Ok(conversion) => (StatusCode::OK, Html(FormView::from_conversion(&conversion).render())),
        Err(err) => {
            tracing::debug!(error = %err, "form conversion failed");
            let err = ApiError::from(err);
            let view = FormView::from_failure(&input, err.to_string());
            (err.status(), Html(view.render()))
        }
    }
}
