use crate::error::{ApiError, ErrorResponse};
use crate::gateway::{self, ParamSpec, ParamType, Requirement, ResponseShape, RouteContract};
use crate::models::SearchResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

const CONTRACT: RouteContract = RouteContract {
    upstream_path: "recipes/complexSearch",
    params: &[
        ParamSpec {
            name: "query",
            ty: ParamType::Str,
            requirement: Requirement::Default("pasta"),
        },
        ParamSpec {
            name: "maxFat",
            ty: ParamType::Int,
            requirement: Requirement::Default("25"),
        },
        ParamSpec {
            name: "number",
            ty: ParamType::Int,
            requirement: Requirement::Default("2"),
        },
    ],
    shape: ResponseShape::Pick(&["offset", "number", "results", "totalResults"]),
    failure_message: "Unable to fetch data from Spoonacular API",
};

/// GET /recipes/complexSearch handler - Search recipes
///
/// Forwards the search to the upstream API and reshapes the answer down to
/// the pagination fields and the result list.
#[utoipa::path(
    get,
    path = routes::RECIPE_SEARCH,
    params(
        ("query" = Option<String>, Query, description = "Search text (default: pasta)"),
        ("maxFat" = Option<i64>, Query, description = "Maximum grams of fat per serving (default: 25)"),
        ("number" = Option<i64>, Query, description = "Number of results to return (default: 2)")
    ),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let body = gateway::forward(&state.upstream, &CONTRACT, &[], &query).await?;

    tracing::info!("Recipe search succeeded");
    Ok((StatusCode::OK, Json(body)))
}
