//! Local deterministic planner
//!
//! The inspectable stand-in for a real AI backend: extraction, generation,
//! and composition run in-process with no I/O, so identical messages always
//! produce identical replies (modulo the planning-horizon start date).

use async_trait::async_trait;
use tracing::debug;

use super::{BackendError, PlannerBackend};
use crate::domain::ApiResponse;
use crate::pipeline::{compose, extract, generate};

/// Planner backed by the in-process synthesis pipeline
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalBackend;

impl LocalBackend {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline synchronously
    ///
    /// Only the first recognized destination is used for generation; the
    /// clarifying-question branch handles everything else.
    pub fn respond(message: &str) -> ApiResponse {
        let intent = extract(message);
        debug!(destinations = ?intent.destinations, "respond: extracted intent");

        let itinerary = intent
            .destinations
            .first()
            .map(|destination| generate(destination, intent.duration_days, &intent.interests));

        compose(&intent, itinerary)
    }
}

#[async_trait]
impl PlannerBackend for LocalBackend {
    async fn plan(&self, message: &str) -> Result<ApiResponse, BackendError> {
        Ok(Self::respond(message))
    }
}
