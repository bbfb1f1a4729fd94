use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::selection::{SubmitSelectionsRequest, SubmitSelectionsResponse},
    models::SelectionRecord,
};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/selections",
    responses(
        (status = 200, description = "Every stored pick", body = Vec<SelectionRecord>)
    ),
    tag = "selections"
)]
pub async fn list_selections(State(state): State<AppState>) -> Json<Vec<SelectionRecord>> {
    Json(services::list_selections(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/selections",
    request_body = SubmitSelectionsRequest,
    responses(
        (status = 201, description = "Predictions saved", body = SubmitSelectionsResponse),
        (status = 400, description = "Invalid name, unknown category, or missing picks"),
        (status = 404, description = "Pick for a category with no loaded catalog"),
        (status = 422, description = "Pick not in the category's catalog"),
        (status = 500, description = "Local ledger could not be written")
    ),
    tag = "selections"
)]
pub async fn submit_selections(
    State(state): State<AppState>,
    Json(request): Json<SubmitSelectionsRequest>,
) -> Result<Response, WebError> {
    let response = services::submit(&state, &request).await?;

    Ok((StatusCode::CREATED, Json(response)).into_response())
}
