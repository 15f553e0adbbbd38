// Route path constants - single source of truth for all API paths

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const RECIPE_SEARCH: &str = "/recipes/complexSearch";
pub const SIMILAR_RECIPES: &str = "/recipes/{id}/similar";
pub const INGREDIENT_SUBSTITUTES: &str = "/ingredients/substitutes";
pub const RECIPE_INFORMATION: &str = "/recipes/{id}/information";
pub const ANALYZE_QUERY: &str = "/recipes/queries/analyze";
pub const MEAL_PLAN: &str = "/mealplanner/generate";
pub const ANALYZED_INSTRUCTIONS: &str = "/recipes/{id}/analyzedInstructions";
pub const RANDOM_JOKE: &str = "/food/jokes/random";

/// Assemble the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(RECIPE_SEARCH, get(handlers::search_handler))
        .route(SIMILAR_RECIPES, get(handlers::similar_handler))
        .route(INGREDIENT_SUBSTITUTES, get(handlers::substitutes_handler))
        .route(RECIPE_INFORMATION, get(handlers::information_handler))
        .route(ANALYZE_QUERY, get(handlers::analyze_handler))
        .route(MEAL_PLAN, get(handlers::meal_plan_handler))
        .route(ANALYZED_INSTRUCTIONS, get(handlers::instructions_handler))
        .route(RANDOM_JOKE, get(handlers::joke_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
