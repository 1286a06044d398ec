//! Intent extraction from free-form chat text
//!
//! Extraction is keyword and pattern matching over a fixed vocabulary, not a
//! learned model. It is a pure function of the input text: no state, no
//! randomness, identical input always yields identical output.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Trip length assumed when the message names no duration
pub const DEFAULT_DURATION_DAYS: u32 = 3;

/// Recognized place identifiers, matched case-insensitively as substrings.
///
/// Matches are reported in this order, not in input order.
const GAZETTEER: &[&str] = &[
    "kerala",
    "goa",
    "rajasthan",
    "kashmir",
    "ladakh",
    "paris",
    "rome",
    "tokyo",
    "bali",
    "switzerland",
    "dubai",
    "maldives",
];

/// First `<integer><separator?><unit>` wins; week units multiply by 7
const DURATION_PATTERN: &str = r"(?i)\b(\d+)[\s-]*(day|week)s?\b";

/// An interest category recognized in user text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Cultural,
    Adventure,
    Relaxation,
    Food,
    Nature,
    Nightlife,
    Romantic,
}

impl Interest {
    /// Human-readable label used in composed replies
    pub fn label(&self) -> &'static str {
        match self {
            Interest::Cultural => "cultural",
            Interest::Adventure => "adventure",
            Interest::Relaxation => "relaxation",
            Interest::Food => "food",
            Interest::Nature => "nature",
            Interest::Nightlife => "nightlife",
            Interest::Romantic => "romantic",
        }
    }
}

/// Category -> keyword table; a category is selected when any keyword occurs
/// as a substring of the lower-cased input
const INTEREST_KEYWORDS: &[(Interest, &[&str])] = &[
    (
        Interest::Cultural,
        &["cultur", "museum", "heritage", "histor", "temple", "tradition", "festival"],
    ),
    (
        Interest::Adventure,
        &["adventur", "trek", "hiking", "rafting", "climb", "safari", "diving", "thrill"],
    ),
    (
        Interest::Relaxation,
        &["relax", "spa", "beach", "resort", "unwind", "peaceful", "leisure"],
    ),
    (
        Interest::Food,
        &["food", "cuisine", "culinary", "restaurant", "street food", "gastronomy"],
    ),
    (
        Interest::Nature,
        &["nature", "wildlife", "mountain", "backwater", "forest", "lake", "waterfall", "scenic"],
    ),
    (Interest::Nightlife, &["nightlife", "party", "club", "casino", "dancing"]),
    (
        Interest::Romantic,
        &["romantic", "romance", "honeymoon", "anniversary", "couple"],
    ),
];

/// Structured trip parameters derived from one chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripIntent {
    /// Recognized place identifiers, in gazetteer order; empty when none match
    pub destinations: Vec<String>,
    pub duration_days: u32,
    /// Selected categories, in table order; no ranking
    pub interests: Vec<Interest>,
}

/// Parse raw user text into destinations, duration, and interests
pub fn extract(text: &str) -> TripIntent {
    let lowered = text.to_lowercase();

    let destinations: Vec<String> = GAZETTEER
        .iter()
        .filter(|place| lowered.contains(*place))
        .map(|place| place.to_string())
        .collect();

    let duration_days = extract_duration(&lowered).unwrap_or(DEFAULT_DURATION_DAYS);

    let interests: Vec<Interest> = INTEREST_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(interest, _)| *interest)
        .collect();

    debug!(
        destination_count = destinations.len(),
        duration_days,
        interest_count = interests.len(),
        "extract: parsed intent"
    );

    TripIntent {
        destinations,
        duration_days,
        interests,
    }
}

/// First duration mention in the text, in days, if any parses cleanly
fn extract_duration(lowered: &str) -> Option<u32> {
    let regex = Regex::new(DURATION_PATTERN).ok()?;
    let captures = regex.captures(lowered)?;

    let count: u32 = captures.get(1)?.as_str().parse().ok()?;
    let days = match captures.get(2)?.as_str() {
        "week" => count.checked_mul(7)?,
        _ => count,
    };

    if days == 0 { None } else { Some(days) }
}
