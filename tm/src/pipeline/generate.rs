//! Deterministic itinerary synthesis
//!
//! Content comes from fixed lookup tables keyed by destination and day
//! number, with documented generic fallbacks on every miss. Given the same
//! inputs and the same starting date, the output is identical.

use chrono::{Duration, NaiveDate, Utc};
use tracing::debug;

use crate::domain::{Event, Itinerary, ItineraryDay};
use crate::pipeline::Interest;

/// Trips are planned this many days out from "today"
pub const PLANNING_HORIZON_DAYS: i64 = 30;

/// Upper bound on synthesized days, independent of the requested duration
pub const MAX_ITINERARY_DAYS: u32 = 7;

/// Trip name used for destinations missing from the metadata table
pub const FALLBACK_TRIP_NAME: &str = "Amazing Journey";

/// Display metadata for a known destination
struct DestinationInfo {
    trip_name: &'static str,
    /// Display location shown as the itinerary destination
    location: &'static str,
    /// Gateway city the trip starts from
    origin: &'static str,
}

const DESTINATIONS: &[(&str, DestinationInfo)] = &[
    (
        "kerala",
        DestinationInfo {
            trip_name: "Kerala Backwaters & Hills Adventure",
            location: "Kerala, India",
            origin: "Kochi",
        },
    ),
    (
        "goa",
        DestinationInfo {
            trip_name: "Goa Sun & Sand Escape",
            location: "Goa, India",
            origin: "Panaji",
        },
    ),
    (
        "rajasthan",
        DestinationInfo {
            trip_name: "Royal Rajasthan Heritage Trail",
            location: "Rajasthan, India",
            origin: "Jaipur",
        },
    ),
    (
        "paris",
        DestinationInfo {
            trip_name: "Paris City of Lights Getaway",
            location: "Paris, France",
            origin: "Paris",
        },
    ),
    (
        "tokyo",
        DestinationInfo {
            trip_name: "Tokyo Neon & Tradition Tour",
            location: "Tokyo, Japan",
            origin: "Tokyo",
        },
    ),
    (
        "bali",
        DestinationInfo {
            trip_name: "Bali Island Serenity Retreat",
            location: "Bali, Indonesia",
            origin: "Denpasar",
        },
    ),
];

/// Blueprint for one event; ids are assigned at generation time
enum EventTemplate {
    Flight {
        time: &'static str,
        title: &'static str,
        description: Option<&'static str>,
        flight_number: Option<&'static str>,
        from: Option<&'static str>,
        to: Option<&'static str>,
    },
    Hotel {
        time: &'static str,
        title: &'static str,
        description: Option<&'static str>,
        hotel_name: Option<&'static str>,
        address: Option<&'static str>,
    },
    Attraction {
        time: &'static str,
        title: &'static str,
        description: Option<&'static str>,
        location: Option<&'static str>,
        duration: Option<&'static str>,
    },
}

/// Blueprint for one curated day
struct DayTemplate {
    title: &'static str,
    events: &'static [EventTemplate],
}

/// Curated (destination, day_number) -> day content. Any combination absent
/// here falls back to the generic day template.
const DAY_TEMPLATES: &[(&str, u32, DayTemplate)] = &[
    (
        "kerala",
        1,
        DayTemplate {
            title: "Arrival in Kochi",
            events: &[
                EventTemplate::Flight {
                    time: "10:30 AM",
                    title: "Arrival in Kochi",
                    description: Some("Flight from Mumbai to Kochi International Airport"),
                    flight_number: Some("AI 681"),
                    from: Some("Mumbai (BOM)"),
                    to: Some("Kochi (COK)"),
                },
                EventTemplate::Hotel {
                    time: "2:00 PM",
                    title: "Check-in at Hotel",
                    description: Some("Luxury waterfront hotel with traditional Kerala architecture"),
                    hotel_name: Some("Taj Malabar Resort & Spa"),
                    address: Some("Willingdon Island, Kochi"),
                },
                EventTemplate::Attraction {
                    time: "4:00 PM",
                    title: "Fort Kochi Walking Tour",
                    description: Some("Explore the historic Portuguese and Dutch colonial architecture"),
                    location: Some("Fort Kochi"),
                    duration: Some("2 hours"),
                },
            ],
        },
    ),
    (
        "kerala",
        2,
        DayTemplate {
            title: "Backwaters of Alleppey",
            events: &[
                EventTemplate::Attraction {
                    time: "8:00 AM",
                    title: "Backwater Cruise",
                    description: Some("Traditional houseboat cruise through Kerala's famous backwaters"),
                    location: Some("Alleppey Backwaters"),
                    duration: Some("Full day"),
                },
                EventTemplate::Attraction {
                    time: "1:00 PM",
                    title: "Traditional Kerala Lunch",
                    description: Some("Authentic meal served on banana leaf aboard the houseboat"),
                    location: Some("Houseboat"),
                    duration: Some("1 hour"),
                },
            ],
        },
    ),
    (
        "kerala",
        3,
        DayTemplate {
            title: "Up to Munnar",
            events: &[
                EventTemplate::Attraction {
                    time: "9:00 AM",
                    title: "Munnar Hill Station",
                    description: Some("Drive to the picturesque tea plantations of Munnar"),
                    location: Some("Munnar"),
                    duration: Some("3 hours drive"),
                },
                EventTemplate::Hotel {
                    time: "1:00 PM",
                    title: "Check-in Mountain Resort",
                    description: Some("Eco-friendly resort surrounded by tea gardens"),
                    hotel_name: Some("Tea Valley Resort"),
                    address: Some("Munnar Hills, Kerala"),
                },
                EventTemplate::Attraction {
                    time: "3:30 PM",
                    title: "Tea Plantation Visit",
                    description: Some("Learn about tea processing and enjoy fresh mountain air"),
                    location: Some("Kolukkumalai Tea Estate"),
                    duration: Some("2 hours"),
                },
            ],
        },
    ),
    (
        "kerala",
        4,
        DayTemplate {
            title: "Western Ghats Wilderness",
            events: &[
                EventTemplate::Attraction {
                    time: "6:00 AM",
                    title: "Sunrise at Echo Point",
                    description: Some("Watch the spectacular sunrise over the Western Ghats"),
                    location: Some("Echo Point, Munnar"),
                    duration: Some("2 hours"),
                },
                EventTemplate::Attraction {
                    time: "11:00 AM",
                    title: "Eravikulam National Park",
                    description: Some("Wildlife sanctuary home to the endangered Nilgiri Tahr"),
                    location: Some("Eravikulam National Park"),
                    duration: Some("3 hours"),
                },
                EventTemplate::Attraction {
                    time: "4:00 PM",
                    title: "Spice Garden Tour",
                    description: Some("Explore aromatic spice plantations and learn about cultivation"),
                    location: Some("Munnar Spice Gardens"),
                    duration: Some("1.5 hours"),
                },
            ],
        },
    ),
    (
        "kerala",
        5,
        DayTemplate {
            title: "Back to the Coast",
            events: &[
                EventTemplate::Attraction {
                    time: "10:00 AM",
                    title: "Return to Kochi",
                    description: Some("Scenic drive back to Kochi with stops at viewpoints"),
                    location: Some("Munnar to Kochi"),
                    duration: Some("4 hours"),
                },
                EventTemplate::Attraction {
                    time: "3:00 PM",
                    title: "Kerala Kathakali Performance",
                    description: Some("Traditional dance performance showcasing Kerala's cultural heritage"),
                    location: Some("Kerala Kathakali Centre, Kochi"),
                    duration: Some("1 hour"),
                },
                EventTemplate::Attraction {
                    time: "6:00 PM",
                    title: "Sunset at Marine Drive",
                    description: Some("Relaxing evening walk along Kochi's waterfront promenade"),
                    location: Some("Marine Drive, Kochi"),
                    duration: Some("1 hour"),
                },
            ],
        },
    ),
    (
        "kerala",
        6,
        DayTemplate {
            title: "Departure from Kochi",
            events: &[EventTemplate::Flight {
                time: "2:15 PM",
                title: "Departure from Kochi",
                description: Some("Return flight to Mumbai"),
                flight_number: Some("AI 684"),
                from: Some("Kochi (COK)"),
                to: Some("Mumbai (BOM)"),
            }],
        },
    ),
    (
        "goa",
        1,
        DayTemplate {
            title: "Beaches of North Goa",
            events: &[
                EventTemplate::Hotel {
                    time: "12:00 PM",
                    title: "Check-in Beach Resort",
                    description: Some("Beachfront resort a short walk from the Baga strip"),
                    hotel_name: Some("Estrela do Mar Beach Resort"),
                    address: Some("Calangute-Baga Road, Goa"),
                },
                EventTemplate::Attraction {
                    time: "3:00 PM",
                    title: "Baga Beach Afternoon",
                    description: Some("Swim, sunbathe, and try parasailing along the northern shore"),
                    location: Some("Baga Beach"),
                    duration: Some("3 hours"),
                },
                EventTemplate::Attraction {
                    time: "7:00 PM",
                    title: "Beach Shack Dinner",
                    description: Some("Fresh seafood and live music at a classic Goan shack"),
                    location: Some("Calangute"),
                    duration: Some("2 hours"),
                },
            ],
        },
    ),
    (
        "goa",
        2,
        DayTemplate {
            title: "Old Goa Heritage",
            events: &[
                EventTemplate::Attraction {
                    time: "9:30 AM",
                    title: "Basilica of Bom Jesus",
                    description: Some("UNESCO-listed baroque church holding the relics of St. Francis Xavier"),
                    location: Some("Old Goa"),
                    duration: Some("1.5 hours"),
                },
                EventTemplate::Attraction {
                    time: "1:00 PM",
                    title: "Latin Quarter Walk",
                    description: Some("Wander the colour-washed Portuguese lanes of Fontainhas"),
                    location: Some("Fontainhas, Panaji"),
                    duration: Some("2 hours"),
                },
                EventTemplate::Attraction {
                    time: "5:30 PM",
                    title: "Mandovi Sunset Cruise",
                    description: Some("Evening river cruise with folk dance performances"),
                    location: Some("Mandovi River"),
                    duration: Some("1.5 hours"),
                },
            ],
        },
    ),
    (
        "paris",
        1,
        DayTemplate {
            title: "Icons of Paris",
            events: &[
                EventTemplate::Attraction {
                    time: "9:00 AM",
                    title: "Eiffel Tower Summit",
                    description: Some("Ride to the summit for views across the whole city"),
                    location: Some("Champ de Mars"),
                    duration: Some("2.5 hours"),
                },
                EventTemplate::Attraction {
                    time: "2:00 PM",
                    title: "Seine Riverbank Stroll",
                    description: Some("Walk the Left Bank past the bouquinistes toward Notre-Dame"),
                    location: Some("Quais de la Seine"),
                    duration: Some("2 hours"),
                },
                EventTemplate::Attraction {
                    time: "7:30 PM",
                    title: "Bistro Dinner",
                    description: Some("Classic French dinner in the Saint-Germain quarter"),
                    location: Some("Saint-Germain-des-Prés"),
                    duration: Some("2 hours"),
                },
            ],
        },
    ),
    (
        "paris",
        2,
        DayTemplate {
            title: "Museums and Montmartre",
            events: &[
                EventTemplate::Attraction {
                    time: "9:30 AM",
                    title: "Louvre Highlights Tour",
                    description: Some("Guided route through the museum's essential galleries"),
                    location: Some("Musée du Louvre"),
                    duration: Some("3 hours"),
                },
                EventTemplate::Attraction {
                    time: "3:00 PM",
                    title: "Montmartre & Sacré-Cœur",
                    description: Some("Climb through the artists' quarter to the basilica steps"),
                    location: Some("Montmartre"),
                    duration: Some("2.5 hours"),
                },
            ],
        },
    ),
    (
        "paris",
        3,
        DayTemplate {
            title: "Day Trip to Versailles",
            events: &[
                EventTemplate::Attraction {
                    time: "9:00 AM",
                    title: "Palace of Versailles",
                    description: Some("Tour the State Apartments and the Hall of Mirrors"),
                    location: Some("Versailles"),
                    duration: Some("3 hours"),
                },
                EventTemplate::Attraction {
                    time: "2:30 PM",
                    title: "Gardens and Grand Canal",
                    description: Some("Explore the formal gardens, fountains, and the Trianon estates"),
                    location: Some("Versailles Gardens"),
                    duration: Some("2.5 hours"),
                },
            ],
        },
    ),
];

/// Generic 4-activity day used whenever no curated template exists
const GENERIC_ACTIVITIES: &[(&str, &str, &str)] = &[
    ("9:00 AM", "Morning Discovery", "Start the day exploring the area's best-known sights"),
    ("12:30 PM", "Local Cuisine", "Lunch featuring regional specialties at a local favorite"),
    ("2:30 PM", "Afternoon Adventure", "Guided activity showcasing what makes this place unique"),
    ("7:00 PM", "Evening Relaxation", "Unwind over dinner and a leisurely evening walk"),
];

fn destination_info(destination_id: &str) -> Option<&'static DestinationInfo> {
    DESTINATIONS
        .iter()
        .find(|(id, _)| *id == destination_id)
        .map(|(_, info)| info)
}

fn day_template(destination_id: &str, day_number: u32) -> Option<&'static DayTemplate> {
    DAY_TEMPLATES
        .iter()
        .find(|(id, day, _)| *id == destination_id && *day == day_number)
        .map(|(_, _, template)| template)
}

/// Build an itinerary starting at the fixed planning horizon from today
pub fn generate(destination_id: &str, duration_days: u32, interests: &[Interest]) -> Itinerary {
    generate_from(Utc::now().date_naive(), destination_id, duration_days, interests)
}

/// Build an itinerary with an explicit "today", for deterministic callers
///
/// Interests are accepted as an extraction signal but do not currently vary
/// day content; they shape only the composed reply text.
pub fn generate_from(today: NaiveDate, destination_id: &str, duration_days: u32, _interests: &[Interest]) -> Itinerary {
    let duration_days = duration_days.max(1);

    let (trip_name, location, origin) = match destination_info(destination_id) {
        Some(info) => (info.trip_name, info.location, info.origin),
        None => (FALLBACK_TRIP_NAME, destination_id, destination_id),
    };

    let start_date = today + Duration::days(PLANNING_HORIZON_DAYS);
    let end_date = start_date + Duration::days(i64::from(duration_days) - 1);
    let day_count = duration_days.min(MAX_ITINERARY_DAYS);

    debug!(
        destination_id,
        duration_days, day_count, %start_date, "generate_from: building itinerary"
    );

    let days = (1..=day_count)
        .map(|day_number| {
            let date = start_date + Duration::days(i64::from(day_number) - 1);
            match day_template(destination_id, day_number) {
                Some(template) => build_curated_day(day_number, date, template),
                None => build_generic_day(day_number, date, location),
            }
        })
        .collect();

    Itinerary {
        trip_name: trip_name.to_string(),
        start_date,
        end_date,
        origin: origin.to_string(),
        destination: location.to_string(),
        days,
    }
}

fn build_curated_day(day_number: u32, date: NaiveDate, template: &DayTemplate) -> ItineraryDay {
    let events = template
        .events
        .iter()
        .enumerate()
        .map(|(index, event)| instantiate_event(day_number, index + 1, event))
        .collect();

    ItineraryDay {
        day_number,
        date,
        title: template.title.to_string(),
        events,
    }
}

fn build_generic_day(day_number: u32, date: NaiveDate, location: &str) -> ItineraryDay {
    let events = GENERIC_ACTIVITIES
        .iter()
        .enumerate()
        .map(|(index, (time, title, description))| Event::Attraction {
            id: event_id(day_number, index + 1),
            time: time.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            location: Some(location.to_string()),
            duration: None,
        })
        .collect();

    ItineraryDay {
        day_number,
        date,
        title: format!("Day {day_number}: Exploring {location}"),
        events,
    }
}

fn instantiate_event(day_number: u32, index: usize, template: &EventTemplate) -> Event {
    let id = event_id(day_number, index);
    let owned = |value: &Option<&str>| value.map(str::to_string);

    match template {
        EventTemplate::Flight {
            time,
            title,
            description,
            flight_number,
            from,
            to,
        } => Event::Flight {
            id,
            time: time.to_string(),
            title: title.to_string(),
            description: owned(description),
            flight_number: owned(flight_number),
            from: owned(from),
            to: owned(to),
        },
        EventTemplate::Hotel {
            time,
            title,
            description,
            hotel_name,
            address,
        } => Event::Hotel {
            id,
            time: time.to_string(),
            title: title.to_string(),
            description: owned(description),
            hotel_name: owned(hotel_name),
            address: owned(address),
        },
        EventTemplate::Attraction {
            time,
            title,
            description,
            location,
            duration,
        } => Event::Attraction {
            id,
            time: time.to_string(),
            title: title.to_string(),
            description: owned(description),
            location: owned(location),
            duration: owned(duration),
        },
    }
}

/// Synthetic per-day-unique event id, 1-based within the day
fn event_id(day_number: u32, index: usize) -> String {
    format!("activity-{day_number}-{index}")
}
