//! Chat message and API envelope types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Itinerary;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a conversation
///
/// Messages are append-only: once created they are never edited, and a
/// conversation is ordered by insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message with a fresh id and the current timestamp
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message with a fresh id and the current timestamp
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: format!("msg-{}", Uuid::now_v7()),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Request body for `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body for `POST /api/chat`
///
/// `itinerary_data` is attached only when the triggering message yielded a
/// recognized destination; it is omitted from the wire entirely otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub chat_response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary_data: Option<Itinerary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors_set_role() {
        let user = ChatMessage::user("hi");
        let assistant = ChatMessage::assistant("hello");

        assert_eq!(user.role, Role::User);
        assert_eq!(assistant.role, Role::Assistant);
        assert!(user.id.starts_with("msg-"));
        assert_ne!(user.id, assistant.id);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }

    #[test]
    fn test_api_response_omits_absent_itinerary() {
        let response = ApiResponse {
            chat_response: "hello".to_string(),
            itinerary_data: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("itinerary_data").is_none());
    }

    #[test]
    fn test_api_response_parses_without_itinerary_field() {
        let response: ApiResponse = serde_json::from_str(r#"{"chat_response": "hi"}"#).unwrap();
        assert_eq!(response.chat_response, "hi");
        assert!(response.itinerary_data.is_none());
    }
}
