//! Canonical data contract shared by the pipeline, the API, and storage
//!
//! Every entity here is created fresh per request/response cycle and never
//! mutated after construction.

mod itinerary;
mod message;

pub use itinerary::{Event, Itinerary, ItineraryDay};
pub use message::{ApiResponse, ChatMessage, ChatRequest, Role};
