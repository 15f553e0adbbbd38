use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// automatically mapping different error types to appropriate HTTP status codes
/// and formatting them as JSON responses.
///
/// Client-side problems (a missing or malformed query parameter) map to 400.
/// Everything that goes wrong on the far side of the gateway maps to 500;
/// the upstream status code itself is never forwarded to the client.
#[derive(Debug)]
pub enum ApiError {
    /// A required query parameter is missing or empty
    MissingParam(String),
    /// A query parameter failed type validation
    InvalidParam(String),
    /// The upstream API answered with a non-success status
    Upstream(&'static str),
    /// The upstream API could not be reached or returned a malformed body
    Transport(anyhow::Error),
    /// A field the response shape requires is absent from the upstream body
    MissingField(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingParam(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidParam(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string()),
            ApiError::Transport(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{:#}", err),
            ),
            ApiError::MissingField(field) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Upstream response is missing the '{}' field", field),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
