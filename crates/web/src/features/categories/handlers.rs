use axum::{
    Json,
    extract::{Path, State},
};
use storage::{dto::catalog::CatalogResponse, models::Category};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Catalogs for every loaded category", body = Vec<CatalogResponse>)
    ),
    tag = "categories"
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CatalogResponse>> {
    Json(services::list_catalogs(&state.catalogs))
}

#[utoipa::path(
    get,
    path = "/api/categories/{category}",
    params(
        ("category" = String, Path, description = "Category slug or display name")
    ),
    responses(
        (status = 200, description = "Catalog found", body = CatalogResponse),
        (status = 400, description = "Unknown category"),
        (status = 404, description = "Category has no loaded catalog")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CatalogResponse>, WebError> {
    let category: Category = category
        .parse()
        .map_err(|e: storage::StorageError| WebError::BadRequest(e.to_string()))?;

    Ok(Json(services::get_catalog(&state.catalogs, category)?))
}
