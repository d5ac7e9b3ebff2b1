//! Route handler functions.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use aura_agent::AgentRequest;
use aura_core::{AgentReply, IncomingMessagePayload};

use crate::error::{ApiError, GENERIC_FAILURE};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET /health - liveness and uptime.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// POST /api/agent - produce the agent response for one customer message.
pub async fn agent_reply(
    State(state): State<AppState>,
    body: Result<Json<IncomingMessagePayload>, JsonRejection>,
) -> Result<Json<AgentReply>, ApiError> {
    let Json(payload) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected malformed agent payload");
        ApiError::from(rejection)
    })?;

    let request = AgentRequest::from_payload(payload, &state.defaults).map_err(|e| {
        tracing::warn!(error = %e, "Rejected agent payload");
        ApiError::from(e)
    })?;
    let channel = request.channel;

    let engine = state.engine.clone();
    let reply = tokio::task::spawn_blocking(move || engine.respond(&request))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Agent engine task failed");
            ApiError::Internal(GENERIC_FAILURE.to_string())
        })?;

    tracing::info!(
        channel = %channel,
        sentiment = %reply.response.sentiment,
        urgency = %reply.response.cta.urgency,
        history_len = reply.history.len(),
        "Agent response created"
    );

    Ok(Json(reply))
}
