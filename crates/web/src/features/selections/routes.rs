use axum::{Router, routing::get};

use super::handlers::{list_selections, submit_selections};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_selections).post(submit_selections))
}
