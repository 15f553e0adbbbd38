use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{SearchResponse, SimilarRecipesResponse, SubstitutesResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "recipe-gateway API",
        version = "1.0.0",
        description = "A forwarding gateway for the Spoonacular recipe and food-data API"
    ),
    paths(
        handlers::health::health_handler,
        handlers::search::search_handler,
        handlers::similar::similar_handler,
        handlers::substitutes::substitutes_handler,
        handlers::information::information_handler,
        handlers::analyze::analyze_handler,
        handlers::meal_plan::meal_plan_handler,
        handlers::instructions::instructions_handler,
        handlers::joke::joke_handler
    ),
    components(
        schemas(
            SearchResponse,
            SimilarRecipesResponse,
            SubstitutesResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "recipes", description = "Recipe lookup and search operations"),
        (name = "ingredients", description = "Ingredient operations"),
        (name = "mealplanner", description = "Meal plan generation"),
        (name = "food", description = "Miscellaneous food content")
    )
)]
pub struct ApiDoc;
