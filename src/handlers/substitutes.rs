use crate::error::{ApiError, ErrorResponse};
use crate::gateway::{self, ParamSpec, ParamType, Requirement, ResponseShape, RouteContract};
use crate::models::SubstitutesResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

const CONTRACT: RouteContract = RouteContract {
    upstream_path: "food/ingredients/substitutes",
    params: &[ParamSpec {
        name: "ingredientName",
        ty: ParamType::Str,
        requirement: Requirement::Required("Please provide an ingredient name"),
    }],
    shape: ResponseShape::SubstitutesEnvelope {
        ingredient_param: "ingredientName",
    },
    failure_message: "Unable to fetch ingredient substitutes from Spoonacular API",
};

/// GET /ingredients/substitutes handler - Look up ingredient substitutes
///
/// Echoes the requested ingredient back alongside the upstream answer.
/// When the upstream knows no substitutes it omits both fields, so the
/// envelope falls back to an empty list and a fixed message.
#[utoipa::path(
    get,
    path = routes::INGREDIENT_SUBSTITUTES,
    params(
        ("ingredientName" = String, Query, description = "Ingredient to find substitutes for")
    ),
    responses(
        (status = 200, description = "Substitutes for the ingredient", body = SubstitutesResponse),
        (status = 400, description = "Missing ingredient name", body = ErrorResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    ),
    tag = "ingredients"
)]
pub async fn substitutes_handler(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let body = gateway::forward(&state.upstream, &CONTRACT, &[], &query).await?;

    tracing::info!("Fetched ingredient substitutes");
    Ok((StatusCode::OK, Json(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::upstream::UpstreamClient;
    use axum::{body::Body, http::Request, routing::get, Router};
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_app(base_url: &str) -> Router {
        let config = Config {
            api_key: "test-key".to_string(),
            upstream_base_url: base_url.to_string(),
            upstream_timeout_secs: Some(5),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };
        let upstream = UpstreamClient::from_config(&config).expect("Failed to create upstream client");
        let state = AppState {
            upstream,
            config: Arc::new(config),
        };

        Router::new()
            .route(crate::routes::INGREDIENT_SUBSTITUTES, get(substitutes_handler))
            .with_state(state)
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, JsonValue) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_substitutes_fallback_on_empty_upstream_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/ingredients/substitutes"))
            .and(query_param("ingredientName", "butter"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = send(
            test_app(&server.uri()),
            "/ingredients/substitutes?ingredientName=butter",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "ingredient": "butter",
                "substitutes": [],
                "message": "No substitutes found."
            })
        );
    }

    #[tokio::test]
    async fn test_substitutes_envelope_with_upstream_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/ingredients/substitutes"))
            .and(query_param("ingredientName", "butter"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "ingredient": "butter",
                "substitutes": ["1 cup margarine", "7/8 cup olive oil"],
                "message": "Found 2 substitutes."
            })))
            .mount(&server)
            .await;

        let (status, body) = send(
            test_app(&server.uri()),
            "/ingredients/substitutes?ingredientName=butter",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let parsed: SubstitutesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.ingredient, "butter");
        assert_eq!(parsed.substitutes.len(), 2);
        assert_eq!(parsed.message, "Found 2 substitutes.");
    }

    #[tokio::test]
    async fn test_substitutes_missing_param_short_circuits() {
        // Nothing listens at this address; a 400 proves no upstream call was made.
        let (status, body) = send(test_app("http://127.0.0.1:1"), "/ingredients/substitutes").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Please provide an ingredient name"}));
    }

    #[tokio::test]
    async fn test_substitutes_empty_param_short_circuits() {
        let (status, body) = send(
            test_app("http://127.0.0.1:1"),
            "/ingredients/substitutes?ingredientName=",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Please provide an ingredient name"}));
    }

    #[tokio::test]
    async fn test_substitutes_upstream_failure_yields_fixed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/ingredients/substitutes"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (status, body) = send(
            test_app(&server.uri()),
            "/ingredients/substitutes?ingredientName=butter",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": "Unable to fetch ingredient substitutes from Spoonacular API"})
        );
    }
}
