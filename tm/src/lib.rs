//! TravelMate - conversational travel itinerary planner
//!
//! A chat endpoint accepts free-form text about a desired trip; a
//! deterministic pipeline extracts travel intent (destination, duration,
//! interests) and synthesizes a structured day-by-day itinerary the UI can
//! render. A resilient parser recovers text and itinerary data from
//! arbitrary remote AI payloads, so the system degrades gracefully when a
//! real backend replies in an unexpected envelope.
//!
//! # Modules
//!
//! - [`domain`] - canonical chat message and itinerary data contract
//! - [`pipeline`] - intent extraction, itinerary generation, reply
//!   composition, and payload parsing
//! - [`backend`] - planner trait with local (deterministic) and remote
//!   (proxied) implementations
//! - [`api`] - axum routes for `POST /api/chat`
//! - [`state`] - in-memory session storage
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod api;
pub mod backend;
pub mod cli;
pub mod config;
pub mod domain;
pub mod pipeline;
pub mod state;

// Re-export commonly used types
pub use backend::{BackendError, LocalBackend, Planner, PlannerBackend, RemoteBackend, create_backend};
pub use config::{BackendConfig, BackendMode, Config, ServerConfig};
pub use domain::{ApiResponse, ChatMessage, ChatRequest, Event, Itinerary, ItineraryDay, Role};
pub use pipeline::{Interest, ParsedReply, TripIntent, compose, extract, generate, generate_from, parse_reply};
pub use state::SessionState;
