use crate::error::{ApiError, ErrorResponse};
use crate::gateway::{self, ResponseShape, RouteContract};
use crate::models::SimilarRecipesResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

const CONTRACT: RouteContract = RouteContract {
    upstream_path: "recipes/{}/similar",
    params: &[],
    shape: ResponseShape::Wrap("similar_recipes"),
    failure_message: "Unable to fetch similar recipes from Spoonacular API",
};

/// GET /recipes/:id/similar handler - Find recipes similar to a given one
///
/// The upstream answer (an array) comes back nested under `similar_recipes`.
#[utoipa::path(
    get,
    path = routes::SIMILAR_RECIPES,
    params(
        ("id" = i64, Path, description = "Recipe identifier")
    ),
    responses(
        (status = 200, description = "Similar recipes", body = SimilarRecipesResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn similar_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let body = gateway::forward(&state.upstream, &CONTRACT, &[id], &HashMap::new()).await?;

    tracing::info!("Fetched similar recipes for recipe {}", id);
    Ok((StatusCode::OK, Json(body)))
}
