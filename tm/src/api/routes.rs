//! Route definitions and request handlers
//!
//! Every failure is surfaced as a chat-shaped JSON body, never a raw error
//! page: malformed input maps to 400, unexpected internal failures map to
//! 500 with a generic apology and a log line for diagnostics.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::backend::Planner;
use crate::domain::{ApiResponse, ChatMessage, ChatRequest};
use crate::state::SessionState;

/// Body of the 500 reply; the real cause goes to the log only
pub const APOLOGY_TEXT: &str =
    "Something went wrong on our end while planning your trip. Please try again in a moment.";

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<Planner>,
    pub sessions: Arc<SessionState>,
}

/// JSON error envelope for 4xx/5xx replies
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors a handler can surface to the caller
enum ApiError {
    BadRequest,
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, "Invalid request"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, APOLOGY_TEXT),
        };

        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat))
        .with_state(state)
}

async fn health() -> Json<&'static str> {
    Json("OK")
}

/// Handle one chat turn: plan a reply, persist the exchange, respond
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(%rejection, "chat: malformed request body");
        ApiError::BadRequest
    })?;

    let response = state.planner.plan(&request.message).await.map_err(|error| {
        error!(%error, "chat: planner failed");
        ApiError::Internal
    })?;

    let exchange = vec![
        ChatMessage::user(request.message),
        ChatMessage::assistant(response.chat_response.clone()),
    ];
    let conversation_id = state.sessions.save_conversation(exchange);

    if let Some(itinerary) = &response.itinerary_data {
        let itinerary_id = state.sessions.save_itinerary(itinerary.clone());
        debug!(%conversation_id, %itinerary_id, "chat: exchange persisted with itinerary");
    } else {
        debug!(%conversation_id, "chat: exchange persisted");
    }

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
