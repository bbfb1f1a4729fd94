use axum::{Router, routing::get};

use super::handlers::{get_leaderboard, get_standing};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_leaderboard))
        .route("/:name", get(get_standing))
}
