//! Backend error types

use thiserror::Error;

/// Errors from planner backends
///
/// Only the transport can fail; the local pipeline is total. Malformed
/// remote payloads are NOT errors - they degrade through the response
/// parser into a best-effort reply.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}
