//! Remote AI backend client
//!
//! Thin transport to an agent service's `/run` endpoint. The response
//! envelope differs between backend versions, so whatever JSON comes back is
//! handed to the response parser rather than deserialized against a fixed
//! schema - an unusable payload still yields a chat-shaped reply.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{BackendError, PlannerBackend};
use crate::config::BackendConfig;
use crate::domain::ApiResponse;
use crate::pipeline::parse_reply;

/// Maximum number of retries for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 1000;

/// App identifier expected by the agent service
const APP_NAME: &str = "agents";

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

/// Client for a remote agent-style AI backend
pub struct RemoteBackend {
    base_url: String,
    http: Client,
    /// One logical session per client instance
    session_id: String,
    user_id: String,
}

impl RemoteBackend {
    /// Create a new client from configuration
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        debug!(base_url = %config.base_url, "from_config: called");

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build().map_err(BackendError::Network)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            session_id: Uuid::now_v7().to_string(),
            user_id: "travelmate-user".to_string(),
        })
    }

    /// Build the `/run` request body for one user message
    fn build_request_body(&self, message: &str) -> Value {
        serde_json::json!({
            "appName": APP_NAME,
            "userId": self.user_id,
            "sessionId": self.session_id,
            "newMessage": {
                "role": "user",
                "parts": [{ "text": message }],
            },
            "streaming": false,
        })
    }
}

#[async_trait]
impl PlannerBackend for RemoteBackend {
    async fn plan(&self, message: &str) -> Result<ApiResponse, BackendError> {
        debug!(session_id = %self.session_id, "plan: called");
        let url = format!("{}/run", self.base_url);
        let body = self.build_request_body(message);

        let mut last_error = None;
        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1);
                warn!(attempt, backoff_ms = backoff, "plan: retrying after transient error");
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            let response = match self.http.post(&url).json(&body).send().await {
                Ok(r) => r,
                Err(e) => {
                    debug!(attempt, error = %e, "plan: network error");
                    last_error = Some(BackendError::Network(e));
                    continue;
                }
            };

            let status = response.status().as_u16();

            if is_retryable_status(status) && attempt < MAX_RETRIES {
                let text = response.text().await.unwrap_or_default();
                debug!(attempt, status, "plan: retryable error");
                last_error = Some(BackendError::ApiError { status, message: text });
                continue;
            }

            if !response.status().is_success() {
                debug!(status, "plan: API error");
                let text = response.text().await.unwrap_or_default();
                return Err(BackendError::ApiError { status, message: text });
            }

            // Any JSON at all is acceptable here; shape recovery is the
            // response parser's job.
            let payload: Value = response.json().await?;
            let parsed = parse_reply(&payload);

            debug!(has_itinerary = parsed.itinerary.is_some(), "plan: parsed remote reply");
            return Ok(ApiResponse {
                chat_response: parsed.text,
                itinerary_data: parsed.itinerary,
            });
        }

        Err(last_error.unwrap_or_else(|| BackendError::InvalidResponse("Max retries exceeded".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        for status in [408, 429, 500, 502, 503, 504] {
            assert!(is_retryable_status(status), "{status} should be retryable");
        }
        for status in [200, 400, 401, 404] {
            assert!(!is_retryable_status(status), "{status} should not be retryable");
        }
    }

    #[test]
    fn test_build_request_body_shape() {
        let backend = RemoteBackend::from_config(&BackendConfig::default()).unwrap();
        let body = backend.build_request_body("plan a trip to goa");

        assert_eq!(body["appName"], APP_NAME);
        assert_eq!(body["streaming"], false);
        assert_eq!(body["newMessage"]["role"], "user");
        assert_eq!(body["newMessage"]["parts"][0]["text"], "plan a trip to goa");
        assert!(body["sessionId"].as_str().is_some());
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let config = BackendConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..BackendConfig::default()
        };

        let backend = RemoteBackend::from_config(&config).unwrap();
        assert_eq!(backend.base_url, "http://localhost:8000");
    }
}
