//! Reply composition
//!
//! Turns extraction + generation results into the chat-shaped response the
//! UI renders. There is exactly one "I don't understand" branch: a fixed
//! clarifying question when no destination was recognized. No slot-filling
//! state is kept across turns.

use tracing::debug;

use crate::domain::{ApiResponse, Itinerary};
use crate::pipeline::{Interest, TripIntent};

/// Asked whenever the message names no recognized destination
pub const CLARIFY_TEXT: &str = "I'd love to help you plan your trip! Could you tell me where you'd \
     like to go, how many days you have, and what kind of experiences you enjoy?";

/// Pair the intent with an optional generated itinerary into a reply
///
/// When several destinations were recognized, only the first was used for
/// generation; the others are silently ignored.
pub fn compose(intent: &TripIntent, itinerary: Option<Itinerary>) -> ApiResponse {
    let Some(itinerary) = itinerary else {
        debug!("compose: no itinerary, asking clarifying question");
        return ApiResponse {
            chat_response: CLARIFY_TEXT.to_string(),
            itinerary_data: None,
        };
    };

    let mut text = format!(
        "Great news! I've put together a {}-day itinerary for {} ({}).",
        intent.duration_days,
        itinerary.destination,
        itinerary.display_dates(),
    );

    if !intent.interests.is_empty() {
        let interests = intent
            .interests
            .iter()
            .map(Interest::label)
            .collect::<Vec<_>>()
            .join(", ");
        text.push_str(&format!(" I made sure to include {interests} experiences."));
    }

    text.push_str(" You can review the full day-by-day plan in the itinerary panel.");

    debug!(destination = %itinerary.destination, "compose: confirmation reply");
    ApiResponse {
        chat_response: text,
        itinerary_data: Some(itinerary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{extract, generate_from};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_no_destination_yields_clarifying_question() {
        let intent = extract("plan something fun");
        let response = compose(&intent, None);

        assert_eq!(response.chat_response, CLARIFY_TEXT);
        assert!(response.itinerary_data.is_none());
    }

    #[test]
    fn test_confirmation_mentions_duration_and_destination() {
        let intent = extract("a 5 day trip to kerala");
        let itinerary = generate_from(today(), "kerala", intent.duration_days, &intent.interests);
        let response = compose(&intent, Some(itinerary));

        assert!(response.chat_response.contains("5-day"));
        assert!(response.chat_response.contains("Kerala, India"));
        assert!(response.itinerary_data.is_some());
    }

    #[test]
    fn test_interest_clause_lists_categories_comma_joined() {
        let intent = extract("5 days in kerala with culture and street food");
        let itinerary = generate_from(today(), "kerala", intent.duration_days, &intent.interests);
        let response = compose(&intent, Some(itinerary));

        assert!(response.chat_response.contains("cultural, food experiences"));
    }

    #[test]
    fn test_no_interest_clause_without_interests() {
        let intent = extract("4 days in tokyo");
        let itinerary = generate_from(today(), "tokyo", intent.duration_days, &intent.interests);
        let response = compose(&intent, Some(itinerary));

        assert!(!response.chat_response.contains("experiences."));
    }
}
