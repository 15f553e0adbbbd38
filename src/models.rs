use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Response type for the recipe search endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SearchResponse {
    pub offset: i64,
    pub number: i64,
    pub results: Vec<JsonValue>,
    #[serde(rename = "totalResults")]
    pub total_results: i64,
}

/// Response type for the similar-recipes endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SimilarRecipesResponse {
    pub similar_recipes: JsonValue,
}

/// Response type for the ingredient-substitutes endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubstitutesResponse {
    pub ingredient: String,
    pub substitutes: Vec<JsonValue>,
    pub message: String,
}
