//! Itinerary, day, and event types
//!
//! The wire format matches what the UI renders: an itinerary is trip-level
//! metadata plus ordered days, each day an ordered list of tagged events.
//! Optional event fields are omitted from JSON when unknown - absence means
//! "unknown", never an empty string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single scheduled item within a day
///
/// The `type` tag determines which optional fields are meaningful. `time` is
/// a display label ("10:30 AM", "Full day"), not a sortable timestamp; event
/// order within a day is the intended chronological sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Flight {
        id: String,
        time: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flight_number: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<String>,
    },
    Hotel {
        id: String,
        time: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hotel_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
    },
    Attraction {
        id: String,
        time: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<String>,
    },
}

impl Event {
    /// Get the event id
    pub fn id(&self) -> &str {
        match self {
            Event::Flight { id, .. } | Event::Hotel { id, .. } | Event::Attraction { id, .. } => id,
        }
    }

    /// Get the display time label
    pub fn time(&self) -> &str {
        match self {
            Event::Flight { time, .. } | Event::Hotel { time, .. } | Event::Attraction { time, .. } => time,
        }
    }

    /// Get the event title
    pub fn title(&self) -> &str {
        match self {
            Event::Flight { title, .. } | Event::Hotel { title, .. } | Event::Attraction { title, .. } => title,
        }
    }

    /// Get the event kind name as it appears on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Flight { .. } => "flight",
            Event::Hotel { .. } => "hotel",
            Event::Attraction { .. } => "attraction",
        }
    }
}

/// One day of a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based position within the trip, strictly increasing with no gaps
    pub day_number: u32,
    pub date: NaiveDate,
    pub title: String,
    pub events: Vec<Event>,
}

/// A structured, multi-day travel plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub trip_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Display form of the trip's date range, e.g. "Sep 5 - Sep 9, 2026"
    pub fn display_dates(&self) -> String {
        format!(
            "{} - {}, {}",
            self.start_date.format("%b %-d"),
            self.end_date.format("%b %-d"),
            self.end_date.format("%Y"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day() -> ItineraryDay {
        ItineraryDay {
            day_number: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            title: "Arrival in Kochi".to_string(),
            events: vec![Event::Flight {
                id: "activity-1-1".to_string(),
                time: "10:30 AM".to_string(),
                title: "Arrival in Kochi".to_string(),
                description: Some("Flight from Mumbai to Kochi International Airport".to_string()),
                flight_number: Some("AI 681".to_string()),
                from: Some("Mumbai (BOM)".to_string()),
                to: Some("Kochi (COK)".to_string()),
            }],
        }
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let day = sample_day();
        let json = serde_json::to_value(&day.events[0]).unwrap();

        assert_eq!(json["type"], "flight");
        assert_eq!(json["flight_number"], "AI 681");
    }

    #[test]
    fn test_event_omits_unknown_fields() {
        let event = Event::Attraction {
            id: "activity-1-1".to_string(),
            time: "4:00 PM".to_string(),
            title: "Fort Kochi Walking Tour".to_string(),
            description: None,
            location: Some("Fort Kochi".to_string()),
            duration: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("duration").is_none());
        assert_eq!(json["location"], "Fort Kochi");
    }

    #[test]
    fn test_event_round_trips_each_kind() {
        let events = vec![
            sample_day().events[0].clone(),
            Event::Hotel {
                id: "activity-1-2".to_string(),
                time: "2:00 PM".to_string(),
                title: "Check-in at Hotel".to_string(),
                description: None,
                hotel_name: Some("Taj Malabar Resort & Spa".to_string()),
                address: Some("Willingdon Island, Kochi".to_string()),
            },
            Event::Attraction {
                id: "activity-1-3".to_string(),
                time: "4:00 PM".to_string(),
                title: "Fort Kochi Walking Tour".to_string(),
                description: None,
                location: None,
                duration: Some("2 hours".to_string()),
            },
        ];

        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: Event = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event);
        }
    }

    #[test]
    fn test_display_dates_format() {
        let itinerary = Itinerary {
            trip_name: "Kerala Backwaters & Hills Adventure".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            origin: "Kochi".to_string(),
            destination: "Kerala, India".to_string(),
            days: vec![sample_day()],
        };

        assert_eq!(itinerary.display_dates(), "Jan 15 - Jan 20, 2024");
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let day = sample_day();
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["day_number"], 1);
    }
}
