//! API error types and JSON error response formatting.
//!
//! Every failure leaves the server as `{ "error": code, "message": text }`
//! with a matching status code. No partial agent response is ever sent.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use aura_agent::AgentError;
use aura_core::AuraError;

/// Message returned when the engine fails unexpectedly.
pub const GENERIC_FAILURE: &str = "Failed to create agent response. Please try again.";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid payload fields.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 500 Internal Server Error - the engine could not produce a reply.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::MissingChannel | AgentError::EmptyMessage => {
                ApiError::BadRequest("Payload requires channel and message.".to_string())
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<AuraError> for ApiError {
    fn from(err: AuraError) -> Self {
        match err {
            AuraError::Validation(msg) => ApiError::BadRequest(msg),
            _ => ApiError::Internal(GENERIC_FAILURE.to_string()),
        }
    }
}
