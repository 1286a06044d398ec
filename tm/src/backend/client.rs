//! PlannerBackend trait definition

use async_trait::async_trait;

use super::BackendError;
use crate::domain::ApiResponse;

/// Stateless planner - each chat message is handled independently
///
/// No conversation state is carried between calls; every reply is a pure
/// function of the single inbound message (plus, for remote backends,
/// whatever the remote service returns).
#[async_trait]
pub trait PlannerBackend: Send + Sync {
    /// Turn one user message into a chat reply with optional itinerary
    async fn plan(&self, message: &str) -> Result<ApiResponse, BackendError>;
}
