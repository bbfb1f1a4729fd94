use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::{categories, leaderboard, selections};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        categories::handlers::list_categories,
        categories::handlers::get_category,
        selections::handlers::list_selections,
        selections::handlers::submit_selections,
        leaderboard::handlers::get_leaderboard,
        leaderboard::handlers::get_standing,
    ),
    components(
        schemas(
            storage::models::Category,
            storage::models::CategoryEntry,
            storage::models::SelectionRecord,
            storage::dto::catalog::CatalogResponse,
            storage::dto::selection::SubmitSelectionsRequest,
            storage::dto::selection::SubmitSelectionsResponse,
            storage::dto::selection::RemoteStatus,
            storage::dto::selection::MissingPicksResponse,
            storage::dto::leaderboard::PickSource,
            storage::dto::leaderboard::CategoryResult,
            storage::dto::leaderboard::Standing,
            storage::dto::leaderboard::StandingResponse,
            storage::dto::leaderboard::Leaderboard,
            storage::services::git_sync::GitSyncOutcome,
        )
    ),
    tags(
        (name = "categories", description = "Eligible picks and their points"),
        (name = "selections", description = "Submitting and listing predictions"),
        (name = "leaderboard", description = "Graded picks and rankings"),
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/categories", categories::routes::routes())
        .nest("/selections", selections::routes::routes())
        .nest("/leaderboard", leaderboard::routes::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .layer(cors)
        .with_state(state)
}
