//! Planner backends
//!
//! A planner turns one chat message into an [`ApiResponse`]. The local
//! backend is the deterministic in-process pipeline; the remote backend
//! proxies an AI service and recovers its reply through the response
//! parser. Fallback behavior is explicit configuration handed to
//! [`Planner::from_config`], never a process-wide mutable flag.

use std::sync::Arc;

use tracing::{debug, warn};

pub mod client;
mod error;
mod local;
mod remote;

pub use client::PlannerBackend;
pub use error::BackendError;
pub use local::LocalBackend;
pub use remote::RemoteBackend;

use crate::config::{BackendConfig, BackendMode};
use crate::domain::ApiResponse;

/// Create a planner backend based on the mode specified in config
pub fn create_backend(config: &BackendConfig) -> Result<Arc<dyn PlannerBackend>, BackendError> {
    debug!(mode = ?config.mode, "create_backend: called");
    match config.mode {
        BackendMode::Local => Ok(Arc::new(LocalBackend::new())),
        BackendMode::Remote => Ok(Arc::new(RemoteBackend::from_config(config)?)),
    }
}

/// Primary backend plus an optional local fallback
pub struct Planner {
    primary: Arc<dyn PlannerBackend>,
    fallback: Option<Arc<dyn PlannerBackend>>,
}

impl Planner {
    /// Assemble the planner described by config
    ///
    /// Remote mode gets a local fallback when `fallback_to_local` is set;
    /// local mode needs none (the local pipeline is total).
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        let primary = create_backend(config)?;
        let fallback: Option<Arc<dyn PlannerBackend>> =
            if config.mode == BackendMode::Remote && config.fallback_to_local {
                Some(Arc::new(LocalBackend::new()))
            } else {
                None
            };

        Ok(Self { primary, fallback })
    }

    /// Build a planner from explicit parts
    pub fn new(primary: Arc<dyn PlannerBackend>, fallback: Option<Arc<dyn PlannerBackend>>) -> Self {
        Self { primary, fallback }
    }

    /// Answer one chat message, falling back if the primary backend fails
    pub async fn plan(&self, message: &str) -> Result<ApiResponse, BackendError> {
        match self.primary.plan(message).await {
            Ok(response) => Ok(response),
            Err(error) => match &self.fallback {
                Some(fallback) => {
                    warn!(%error, "plan: primary backend failed, using local fallback");
                    fallback.plan(message).await
                }
                None => Err(error),
            },
        }
    }
}
