//! Message-to-itinerary synthesis pipeline
//!
//! The four core transformations, each a synchronous pure function:
//!
//! - [`extract`] - free text to structured trip intent
//! - [`generate`] - intent parameters to a day-by-day itinerary
//! - [`compose`] - extraction + generation to a chat-shaped reply
//! - [`parse_reply`] - arbitrary backend payload to text + itinerary
//!
//! Invocations are independent and safely parallelizable; there is no
//! shared state to coordinate and nothing here performs I/O.

mod compose;
mod extract;
mod generate;
mod parse;

pub use compose::{CLARIFY_TEXT, compose};
pub use extract::{DEFAULT_DURATION_DAYS, Interest, TripIntent, extract};
pub use generate::{FALLBACK_TRIP_NAME, MAX_ITINERARY_DAYS, PLANNING_HORIZON_DAYS, generate, generate_from};
pub use parse::{GREETING_TEXT, NO_TEXT_FALLBACK, ParsedReply, parse_reply};
