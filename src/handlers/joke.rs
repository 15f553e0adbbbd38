use crate::error::{ApiError, ErrorResponse};
use crate::gateway::{self, ResponseShape, RouteContract};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

const CONTRACT: RouteContract = RouteContract {
    upstream_path: "food/jokes/random",
    params: &[],
    shape: ResponseShape::Verbatim,
    failure_message: "Unable to fetch a random food joke from Spoonacular API",
};

/// GET /food/jokes/random handler - Random food joke
#[utoipa::path(
    get,
    path = routes::RANDOM_JOKE,
    responses(
        (status = 200, description = "A random food joke", body = Object),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    ),
    tag = "food"
)]
pub async fn joke_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let body = gateway::forward(&state.upstream, &CONTRACT, &[], &HashMap::new()).await?;

    tracing::info!("Fetched a random food joke");
    Ok((StatusCode::OK, Json(body)))
}
