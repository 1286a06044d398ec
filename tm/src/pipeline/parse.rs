//! Best-effort parsing of remote AI backend payloads
//!
//! Backend versions and wrappers disagree about the reply envelope, so
//! nothing about the payload shape is trusted. Each known shape is probed
//! independently per event and every textual fragment found is kept;
//! failures in one probe never suppress another. This module never panics
//! and never returns an error - every failure path degrades to a fallback
//! value.

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::domain::Itinerary;

/// Reply to a null/absent payload
pub const GREETING_TEXT: &str =
    "I'm ready to help you plan your trip! What destination are you interested in?";

/// Reply when a payload yields no textual fragments at all
pub const NO_TEXT_FALLBACK: &str =
    "I'm working on your travel plans. What specific aspects of your trip would you like me to help with?";

/// Fragments are joined with a blank line, matching chat paragraph rendering
const FRAGMENT_SEPARATOR: &str = "\n\n";

/// What could be salvaged from a backend payload
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReply {
    pub text: String,
    pub itinerary: Option<Itinerary>,
}

/// Extract display text and any embedded itinerary from an arbitrary payload
pub fn parse_reply(payload: &Value) -> ParsedReply {
    if payload.is_null() {
        debug!("parse_reply: null payload, using greeting");
        return ParsedReply {
            text: GREETING_TEXT.to_string(),
            itinerary: None,
        };
    }

    // Single-object payloads are treated as a one-event sequence
    let events: Vec<&Value> = match payload.as_array() {
        Some(items) => items.iter().collect(),
        None => vec![payload],
    };

    let mut fragments: Vec<&str> = Vec::new();
    let mut itinerary: Option<Itinerary> = None;

    for event in &events {
        collect_fragments(event, &mut fragments);

        if itinerary.is_none() {
            itinerary = extract_itinerary(event);
        }
    }

    let text = if fragments.is_empty() {
        debug!(event_count = events.len(), "parse_reply: no text fragments found");
        NO_TEXT_FALLBACK.to_string()
    } else {
        fragments.join(FRAGMENT_SEPARATOR)
    };

    ParsedReply { text, itinerary }
}

/// Run every known shape probe against one event, in order, non-exclusively
fn collect_fragments<'a>(event: &'a Value, fragments: &mut Vec<&'a str>) {
    // Shape 1: event.content.parts[].text
    if let Some(parts) = event.pointer("/content/parts").and_then(Value::as_array) {
        push_part_texts(parts, fragments);
    }

    // Shape 2: event.candidates[] with string or parts-based content
    if let Some(candidates) = event.get("candidates").and_then(Value::as_array) {
        for candidate in candidates {
            match candidate.get("content") {
                Some(Value::String(content)) => push_fragment(content, fragments),
                Some(content) => {
                    if let Some(parts) = content.get("parts").and_then(Value::as_array) {
                        push_part_texts(parts, fragments);
                    }
                }
                None => {}
            }
        }
    }

    // Shape 3: event.candidates.content as a direct string
    if let Some(content) = event.pointer("/candidates/content").and_then(Value::as_str) {
        push_fragment(content, fragments);
    }

    // Shape 4: event.text as a direct string
    if let Some(text) = event.get("text").and_then(Value::as_str) {
        push_fragment(text, fragments);
    }

    // Shape 5: event.parts[].text directly on the event
    if let Some(parts) = event.get("parts").and_then(Value::as_array) {
        push_part_texts(parts, fragments);
    }
}

fn push_part_texts<'a>(parts: &'a [Value], fragments: &mut Vec<&'a str>) {
    for part in parts {
        if let Some(text) = part.get("text").and_then(Value::as_str) {
            push_fragment(text, fragments);
        }
    }
}

fn push_fragment<'a>(text: &'a str, fragments: &mut Vec<&'a str>) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        fragments.push(trimmed);
    }
}

/// Look for an itinerary JSON blob inside an event's content or text string.
///
/// The scan is a greedy brace-delimited regex match, not a balanced-brace
/// parser; anything that fails to parse or lacks the trip_name/days marker
/// fields is treated as "no itinerary here".
fn extract_itinerary(event: &Value) -> Option<Itinerary> {
    let haystack = event
        .get("content")
        .and_then(Value::as_str)
        .or_else(|| event.get("text").and_then(Value::as_str))?;

    let regex = Regex::new(r"(?s)\{.*\}").ok()?;
    let candidate = regex.find(haystack)?.as_str();

    let value: Value = serde_json::from_str(candidate).ok()?;
    if value.get("trip_name").is_none() || value.get("days").is_none() {
        return None;
    }

    match serde_json::from_value::<Itinerary>(value) {
        Ok(itinerary) => {
            debug!(trip_name = %itinerary.trip_name, "extract_itinerary: found embedded itinerary");
            Some(itinerary)
        }
        Err(error) => {
            debug!(%error, "extract_itinerary: marker fields present but shape invalid");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_payload_uses_greeting() {
        let reply = parse_reply(&Value::Null);

        assert_eq!(reply.text, GREETING_TEXT);
        assert!(reply.itinerary.is_none());
    }

    #[test]
    fn test_empty_object_and_array_fall_back() {
        for payload in [json!({}), json!([])] {
            let reply = parse_reply(&payload);
            assert_eq!(reply.text, NO_TEXT_FALLBACK);
            assert!(reply.itinerary.is_none());
        }
    }

    #[test]
    fn test_plain_string_payload_falls_back() {
        let reply = parse_reply(&json!("not json"));
        assert_eq!(reply.text, NO_TEXT_FALLBACK);
    }

    #[test]
    fn test_content_parts_join_with_blank_line() {
        let payload = json!([{"content": {"parts": [{"text": "Hello"}, {"text": "World"}]}}]);
        let reply = parse_reply(&payload);

        assert_eq!(reply.text, "Hello\n\nWorld");
    }

    #[test]
    fn test_fragments_across_events_keep_encounter_order() {
        let payload = json!([
            {"content": {"parts": [{"text": "Hello"}]}},
            {"text": "World"},
        ]);

        assert_eq!(parse_reply(&payload).text, "Hello\n\nWorld");
    }

    #[test]
    fn test_candidates_array_with_string_content() {
        let payload = json!([{"candidates": [{"content": "From a candidate"}]}]);
        assert_eq!(parse_reply(&payload).text, "From a candidate");
    }

    #[test]
    fn test_candidates_array_with_parts_content() {
        let payload = json!([{"candidates": [{"content": {"parts": [{"text": "Nested"}]}}]}]);
        assert_eq!(parse_reply(&payload).text, "Nested");
    }

    #[test]
    fn test_candidates_object_with_direct_content() {
        let payload = json!([{"candidates": {"content": "Direct string"}}]);
        assert_eq!(parse_reply(&payload).text, "Direct string");
    }

    #[test]
    fn test_single_object_payload_is_wrapped() {
        let payload = json!({"text": "No array here"});
        assert_eq!(parse_reply(&payload).text, "No array here");
    }

    #[test]
    fn test_whitespace_only_fragments_are_skipped() {
        let payload = json!([{"content": {"parts": [{"text": "   "}, {"text": "Kept"}]}}]);
        assert_eq!(parse_reply(&payload).text, "Kept");
    }

    #[test]
    fn test_probes_accumulate_within_one_event() {
        let payload = json!([{
            "content": {"parts": [{"text": "First"}]},
            "text": "Second",
            "parts": [{"text": "Third"}],
        }]);

        assert_eq!(parse_reply(&payload).text, "First\n\nSecond\n\nThird");
    }

    #[test]
    fn test_malformed_shapes_never_panic() {
        let payloads = [
            json!([{"content": 42}]),
            json!([{"content": {"parts": "not an array"}}]),
            json!([{"candidates": [{"content": {"parts": [{"text": 7}]}}]}]),
            json!([{"parts": [null, {"no_text": true}]}]),
            json!([[["deeply"], ["nested"]]]),
            json!(3.25),
        ];

        for payload in payloads {
            let reply = parse_reply(&payload);
            assert!(!reply.text.is_empty());
        }
    }

    #[test]
    fn test_itinerary_extracted_from_content_string() {
        let itinerary_json = r#"{"trip_name": "Kerala Backwaters & Hills Adventure",
            "start_date": "2026-09-05", "end_date": "2026-09-09",
            "origin": "Kochi", "destination": "Kerala, India", "days": []}"#;
        let payload = json!([{
            "content": format!("Here is your plan: {itinerary_json} Enjoy!"),
            "text": "Your itinerary is ready.",
        }]);

        let reply = parse_reply(&payload);
        let itinerary = reply.itinerary.expect("itinerary should be recovered");
        assert_eq!(itinerary.trip_name, "Kerala Backwaters & Hills Adventure");
        assert_eq!(reply.text, "Your itinerary is ready.");
    }

    #[test]
    fn test_json_without_marker_fields_is_ignored() {
        let payload = json!([{"content": r#"{"foo": 1, "bar": 2}"#}]);
        assert!(parse_reply(&payload).itinerary.is_none());
    }

    #[test]
    fn test_broken_json_is_swallowed() {
        let payload = json!([{"content": "{not valid json", "text": "still fine"}]);

        let reply = parse_reply(&payload);
        assert!(reply.itinerary.is_none());
        assert_eq!(reply.text, "still fine");
    }

    #[test]
    fn test_first_itinerary_match_wins() {
        let first = r#"{"trip_name": "First", "start_date": "2026-09-05", "end_date": "2026-09-05",
            "origin": "A", "destination": "B", "days": []}"#;
        let second = r#"{"trip_name": "Second", "start_date": "2026-09-05", "end_date": "2026-09-05",
            "origin": "A", "destination": "B", "days": []}"#;
        let payload = json!([{"content": first}, {"content": second}]);

        let itinerary = parse_reply(&payload).itinerary.expect("should find an itinerary");
        assert_eq!(itinerary.trip_name, "First");
    }
}
