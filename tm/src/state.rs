//! Session state facade over the generic store
//!
//! The request handler persists each exchange and any generated itinerary
//! here. State is in-memory for the lifetime of the process; there is no
//! deletion flow and no on-disk format.

use sessionstore::KvStore;
use tracing::debug;

use crate::domain::{ChatMessage, Itinerary};

/// Conversations and itineraries for the running process
#[derive(Debug, Default)]
pub struct SessionState {
    conversations: KvStore<Vec<ChatMessage>>,
    itineraries: KvStore<Itinerary>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            conversations: KvStore::new(),
            itineraries: KvStore::new(),
        }
    }

    /// Store a conversation and return its id
    pub fn save_conversation(&self, messages: Vec<ChatMessage>) -> String {
        debug!(message_count = messages.len(), "save_conversation: called");
        self.conversations.insert(messages)
    }

    /// Fetch a conversation by id
    pub fn get_conversation(&self, id: &str) -> Option<Vec<ChatMessage>> {
        self.conversations.get(id)
    }

    /// Store an itinerary and return its id
    pub fn save_itinerary(&self, itinerary: Itinerary) -> String {
        debug!(trip_name = %itinerary.trip_name, "save_itinerary: called");
        self.itineraries.insert(itinerary)
    }

    /// Fetch an itinerary by id
    pub fn get_itinerary(&self, id: &str) -> Option<Itinerary> {
        self.itineraries.get(id)
    }

    /// Number of stored conversations
    pub fn conversation_count(&self) -> usize {
        self.conversations.len()
    }

    /// Number of stored itineraries
    pub fn itinerary_count(&self) -> usize {
        self.itineraries.len()
    }
}
