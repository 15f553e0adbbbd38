use crate::error::{ApiError, ErrorResponse};
use crate::gateway::{self, ParamSpec, ParamType, Requirement, ResponseShape, RouteContract};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

const CONTRACT: RouteContract = RouteContract {
    upstream_path: "mealplanner/generate",
    params: &[ParamSpec {
        name: "timeFrame",
        ty: ParamType::Str,
        requirement: Requirement::Default("day"),
    }],
    shape: ResponseShape::Verbatim,
    failure_message: "Unable to generate meal plan from Spoonacular API",
};

/// GET /mealplanner/generate handler - Generate a meal plan
#[utoipa::path(
    get,
    path = routes::MEAL_PLAN,
    params(
        ("timeFrame" = Option<String>, Query, description = "Plan length, 'day' or 'week' (default: day)")
    ),
    responses(
        (status = 200, description = "Generated meal plan as returned by the upstream API", body = Object),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    ),
    tag = "mealplanner"
)]
pub async fn meal_plan_handler(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let body = gateway::forward(&state.upstream, &CONTRACT, &[], &query).await?;

    tracing::info!("Generated meal plan");
    Ok((StatusCode::OK, Json(body)))
}
