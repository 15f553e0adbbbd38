use crate::error::{ApiError, ErrorResponse};
use crate::gateway::{self, ResponseShape, RouteContract};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

const CONTRACT: RouteContract = RouteContract {
    upstream_path: "recipes/{}/information",
    params: &[],
    shape: ResponseShape::Verbatim,
    failure_message: "Unable to fetch recipe information from Spoonacular API",
};

/// GET /recipes/:id/information handler - Full recipe information
#[utoipa::path(
    get,
    path = routes::RECIPE_INFORMATION,
    params(
        ("id" = i64, Path, description = "Recipe identifier")
    ),
    responses(
        (status = 200, description = "Recipe information as returned by the upstream API", body = Object),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn information_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let body = gateway::forward(&state.upstream, &CONTRACT, &[id], &HashMap::new()).await?;

    tracing::info!("Fetched information for recipe {}", id);
    Ok((StatusCode::OK, Json(body)))
}
