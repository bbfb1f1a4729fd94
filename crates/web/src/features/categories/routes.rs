use axum::{Router, routing::get};

use super::handlers::{get_category, list_categories};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/:category", get(get_category))
}
