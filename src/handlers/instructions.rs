use crate::error::{ApiError, ErrorResponse};
use crate::gateway::{self, ResponseShape, RouteContract};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

const CONTRACT: RouteContract = RouteContract {
    upstream_path: "recipes/{}/analyzedInstructions",
    params: &[],
    shape: ResponseShape::Verbatim,
    failure_message: "Unable to fetch analyzed instructions from Spoonacular API",
};

/// GET /recipes/:id/analyzedInstructions handler - Step-by-step instructions
#[utoipa::path(
    get,
    path = routes::ANALYZED_INSTRUCTIONS,
    params(
        ("id" = i64, Path, description = "Recipe identifier")
    ),
    responses(
        (status = 200, description = "Analyzed instructions as returned by the upstream API", body = Object),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn instructions_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let body = gateway::forward(&state.upstream, &CONTRACT, &[id], &HashMap::new()).await?;

    tracing::info!("Fetched analyzed instructions for recipe {}", id);
    Ok((StatusCode::OK, Json(body)))
}
