use axum::{
    Json,
    extract::{Path, Query, State},
};
use storage::dto::leaderboard::{Leaderboard, LeaderboardFilter, StandingResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardFilter),
    responses(
        (status = 200, description = "Users ranked by points", body = Leaderboard),
        (status = 404, description = "Outcomes or pick history not available")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(filter): Query<LeaderboardFilter>,
) -> Result<Json<Leaderboard>, WebError> {
    Ok(Json(services::get_leaderboard(&state, filter.source).await?))
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/{name}",
    params(
        ("name" = String, Path, description = "User name as submitted"),
        LeaderboardFilter
    ),
    responses(
        (status = 200, description = "One user's graded picks", body = StandingResponse),
        (status = 404, description = "No picks for this user")
    ),
    tag = "leaderboard"
)]
pub async fn get_standing(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(filter): Query<LeaderboardFilter>,
) -> Result<Json<StandingResponse>, WebError> {
    let leaderboard = services::get_leaderboard(&state, filter.source).await?;

    let standing = leaderboard
        .standing_for(name.trim())
        .cloned()
        .ok_or_else(|| WebError::NotFound(format!("Picks for '{}'", name)))?;

    Ok(Json(StandingResponse::from(standing)))
}
