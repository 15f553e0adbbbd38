use crate::error::{ApiError, ErrorResponse};
use crate::gateway::{self, ParamSpec, ParamType, Requirement, ResponseShape, RouteContract};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

const CONTRACT: RouteContract = RouteContract {
    upstream_path: "recipes/queries/analyze",
    params: &[ParamSpec {
        name: "q",
        ty: ParamType::Str,
        requirement: Requirement::Required("Please provide a query to analyze"),
    }],
    shape: ResponseShape::Verbatim,
    failure_message: "Unable to analyze recipe query from Spoonacular API",
};

/// GET /recipes/queries/analyze handler - Analyze a natural-language recipe query
#[utoipa::path(
    get,
    path = routes::ANALYZE_QUERY,
    params(
        ("q" = String, Query, description = "Natural-language query to analyze")
    ),
    responses(
        (status = 200, description = "Query analysis as returned by the upstream API", body = Object),
        (status = 400, description = "Missing query", body = ErrorResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let body = gateway::forward(&state.upstream, &CONTRACT, &[], &query).await?;

    tracing::info!("Analyzed recipe query");
    Ok((StatusCode::OK, Json(body)))
}
